use serde::Deserialize;

/// Identity attributes extracted from a verified federated id token.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[async_trait::async_trait]
pub trait IGoogleAuthService: Send + Sync {
    /// Verifies the id token and returns the profile it asserts, or
    /// an error when the token is invalid, expired or issued for a
    /// different audience.
    async fn verify(&self, id_token: &str) -> anyhow::Result<GoogleProfile>;
}

/// Verifies id tokens against Google's tokeninfo endpoint.
pub struct GoogleAuthService {
    client: reqwest::Client,
    expected_audience: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenInfoResponse {
    aud: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleAuthService {
    pub fn new(expected_audience: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            expected_audience,
        }
    }
}

#[async_trait::async_trait]
impl IGoogleAuthService for GoogleAuthService {
    async fn verify(&self, id_token: &str) -> anyhow::Result<GoogleProfile> {
        let res = self
            .client
            .get("https://oauth2.googleapis.com/tokeninfo")
            .query(&[("id_token", id_token)])
            .send()
            .await?;
        if !res.status().is_success() {
            anyhow::bail!("Token verification failed with status: {}", res.status());
        }
        let info: TokenInfoResponse = res.json().await?;
        if let Some(expected) = &self.expected_audience {
            if info.aud != *expected {
                anyhow::bail!("Token was issued for a different audience");
            }
        }
        Ok(GoogleProfile {
            email: info.email,
            name: info.name,
            picture: info.picture,
        })
    }
}

/// Test double that accepts every token and returns a fixed profile,
/// or rejects everything when constructed without one.
pub struct StubGoogleAuthService {
    pub profile: Option<GoogleProfile>,
}

#[async_trait::async_trait]
impl IGoogleAuthService for StubGoogleAuthService {
    async fn verify(&self, _id_token: &str) -> anyhow::Result<GoogleProfile> {
        match &self.profile {
            Some(profile) => Ok(profile.clone()),
            None => anyhow::bail!("Invalid token"),
        }
    }
}
