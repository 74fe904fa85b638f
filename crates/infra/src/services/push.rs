use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Payload of a single device notification, matching the Expo push
/// HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpoPushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
}

#[async_trait::async_trait]
pub trait IPushService: Send + Sync {
    async fn send(&self, message: &ExpoPushMessage) -> anyhow::Result<()>;
}

/// Posts notifications to the Expo push gateway. Callers treat
/// delivery as best-effort; an `Err` here is theirs to swallow.
pub struct ExpoPushService {
    client: reqwest::Client,
    url: String,
}

impl ExpoPushService {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl IPushService for ExpoPushService {
    async fn send(&self, message: &ExpoPushMessage) -> anyhow::Result<()> {
        let res = self.client.post(&self.url).json(message).send().await?;
        if !res.status().is_success() {
            anyhow::bail!("Push gateway responded with status: {}", res.status());
        }
        Ok(())
    }
}

/// Records sent messages instead of delivering them; can be told to
/// fail to exercise the best-effort path.
pub struct StubPushService {
    pub sent: Mutex<Vec<ExpoPushMessage>>,
    pub fail: AtomicBool,
}

impl StubPushService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

impl Default for StubPushService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPushService for StubPushService {
    async fn send(&self, message: &ExpoPushMessage) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("Push gateway unreachable");
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
