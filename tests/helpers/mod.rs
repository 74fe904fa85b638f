use remind_anyone_api::Application;
use remind_anyone_api_structs::dtos::{ReminderDTO, TokenDTO, UserDTO};
use remind_anyone_infra::{Context, StubPushService};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub push: Arc<StubPushService>,
}

pub async fn spawn_app() -> TestApp {
    let mut ctx = Context::create_inmemory();
    // Random free port per test app.
    ctx.config.port = 0;
    let push = Arc::new(StubPushService::new());
    ctx.push = push.clone();

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application");
    let address = format!("http://localhost:{}", application.port());
    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Failed to start application");
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
        push,
    }
}

impl TestApp {
    /// Logs in through the dev password flow, provisioning the user on
    /// first use, and returns their access token.
    pub async fn login(&self, username: &str) -> String {
        let res = self
            .client
            .post(format!("{}/auth/token", self.address))
            .form(&serde_json::json!({
                "username": username,
                "password": "anything",
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        res.json::<TokenDTO>().await.expect("Expected a token").access_token
    }

    pub async fn get_me(&self, token: &str) -> UserDTO {
        let res = self
            .client
            .get(format!("{}/auth/me", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        res.json().await.expect("Expected a user")
    }

    pub async fn add_friend(&self, token: &str, friend: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/friends/", self.address))
            .bearer_auth(token)
            .json(&serde_json::json!({ "friend_email_or_username": friend }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn create_reminder(
        &self,
        token: &str,
        title: &str,
        recipient_id: &str,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}/reminders/", self.address))
            .bearer_auth(token)
            .json(&serde_json::json!({
                "title": title,
                "due_date": "2026-09-01T10:00:00Z",
                "recipient_id": recipient_id,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_reminders(&self, token: &str) -> Vec<ReminderDTO> {
        let res = self
            .client
            .get(format!("{}/reminders/", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        res.json().await.expect("Expected a list of reminders")
    }

    pub async fn update_reminder(
        &self,
        token: &str,
        reminder_id: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .put(format!("{}/reminders/{}", self.address, reminder_id))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
