mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::Repos;
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub push: Arc<dyn IPushService>,
    pub google_auth: Arc<dyn IGoogleAuthService>,
}

impl Context {
    pub fn create_inmemory() -> Self {
        let config = Config::new();
        let push = Arc::new(ExpoPushService::new(config.expo_push_url.clone()));
        let google_auth = Arc::new(GoogleAuthService::new(config.google_client_id.clone()));
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            push,
            google_auth,
        }
    }

    async fn create_postgres(connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let push = Arc::new(ExpoPushService::new(config.expo_push_url.clone()));
        let google_auth = Arc::new(GoogleAuthService::new(config.google_client_id.clone()));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            push,
            google_auth,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Context {
    const DATABASE_URL: &str = "DATABASE_URL";

    match std::env::var(DATABASE_URL) {
        Ok(connection_string) => {
            info!("{} env var was provided. Going to use postgres.", DATABASE_URL);
            Context::create_postgres(&connection_string).await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                DATABASE_URL
            );
            Context::create_inmemory()
        }
    }
}
