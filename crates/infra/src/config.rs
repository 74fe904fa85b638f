use remind_anyone_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to sign and verify access tokens
    pub secret_key: String,
    /// Lifetime of issued access tokens in minutes
    pub access_token_expire_minutes: i64,
    /// Push gateway that device notifications are posted to
    pub expo_push_url: String,
    /// OAuth client id that federated id tokens must be issued for.
    /// When unset, the audience check is skipped.
    pub google_client_id: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let secret_key = match std::env::var("SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find SECRET_KEY environment variable. Going to create one.");
                create_random_secret(32)
            }
        };
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let default_token_expire = 30;
        let access_token_expire_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(default_token_expire);
        let expo_push_url = std::env::var("EXPO_PUSH_URL")
            .unwrap_or_else(|_| "https://exp.host/--/api/v2/push/send".into());
        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.is_empty());

        Self {
            port,
            secret_key,
            access_token_expire_minutes,
            expo_push_url,
            google_client_id,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
