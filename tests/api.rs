mod helpers;

use helpers::spawn_app;
use remind_anyone_api_structs::dtos::UserDTO;
use serde_json::json;

#[actix_web::test]
async fn status_endpoint_greets() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to Remind Anyone API");
}

#[actix_web::test]
async fn unauthenticated_requests_are_challenged() {
    let app = spawn_app().await;

    for (method, path) in [
        ("GET", "/auth/me"),
        ("GET", "/friends/"),
        ("POST", "/friends/"),
        ("GET", "/reminders/"),
    ] {
        let req = match method {
            "GET" => app.client.get(format!("{}{}", app.address, path)),
            _ => app
                .client
                .post(format!("{}{}", app.address, path))
                .json(&json!({ "friend_email_or_username": "bob" })),
        };
        let res = req.send().await.expect("Failed to execute request");

        assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers()
                .get("WWW-Authenticate")
                .and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
    }
}

#[actix_web::test]
async fn federated_test_token_login_provisions_the_test_user() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(format!("{}/auth/login", app.address))
        .json(&json!({ "id_token": "test-token" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();

    let me = app.get_me(token).await;
    assert_eq!(me.email, "test@example.com");
    assert_eq!(me.username, "testuser");
}

#[actix_web::test]
async fn friends_can_exchange_reminders() {
    let app = spawn_app().await;
    let alice = app.login("alice").await;
    let bob = app.login("bob").await;
    let bob_profile = app.get_me(&bob).await;

    // Friendship is bidirectional immediately.
    let res = app.add_friend(&alice, "bob").await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let friend: UserDTO = res.json().await.unwrap();
    assert_eq!(friend.username, "bob");

    let alice_profile = app.get_me(&alice).await;
    let res = app
        .client
        .get(format!("{}/friends/", app.address))
        .bearer_auth(&bob)
        .send()
        .await
        .unwrap();
    let bobs_friends: Vec<UserDTO> = res.json().await.unwrap();
    assert_eq!(bobs_friends.len(), 1);
    assert_eq!(bobs_friends[0].id, alice_profile.id);

    let res = app
        .create_reminder(&alice, "Water the plants", &bob_profile.id.as_string())
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let bobs_reminders = app.list_reminders(&bob).await;
    assert_eq!(bobs_reminders.len(), 1);
    assert_eq!(bobs_reminders[0].title, "Water the plants");
    let reminder_id = bobs_reminders[0].id.as_string();

    // Status belongs to the recipient.
    let res = app
        .update_reminder(&alice, &reminder_id, &json!({ "status": "Completed" }))
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);

    let res = app
        .update_reminder(&bob, &reminder_id, &json!({ "status": "Completed" }))
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    // Details belong to the creator.
    let res = app
        .update_reminder(&bob, &reminder_id, &json!({ "title": "Hijacked" }))
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);

    let res = app
        .update_reminder(&alice, &reminder_id, &json!({ "title": "Water all plants" }))
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    // Only the creator deletes.
    let res = app
        .client
        .delete(format!("{}/reminders/{}", app.address, reminder_id))
        .bearer_auth(&bob)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);

    let res = app
        .client
        .delete(format!("{}/reminders/{}", app.address, reminder_id))
        .bearer_auth(&alice)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);

    assert!(app.list_reminders(&bob).await.is_empty());
}

#[actix_web::test]
async fn reminders_require_friendship_but_allow_self() {
    let app = spawn_app().await;
    let alice = app.login("alice").await;
    let bob = app.login("bob").await;

    let alice_profile = app.get_me(&alice).await;
    let bob_profile = app.get_me(&bob).await;

    let res = app
        .create_reminder(&alice, "Stretch", &bob_profile.id.as_string())
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    let res = app
        .create_reminder(&alice, "Stretch", &alice_profile.id.as_string())
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    // Severity left out of the payload lands as the Medium default.
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["severity"], "Medium");
    assert_eq!(body["status"], "Created");
}

#[actix_web::test]
async fn friendship_rejects_self_and_duplicates() {
    let app = spawn_app().await;
    let alice = app.login("alice").await;
    let _bob = app.login("bob").await;

    let res = app.add_friend(&alice, "alice").await;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    let res = app.add_friend(&alice, "bob").await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let res = app.add_friend(&alice, "bob").await;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    let res = app.add_friend(&alice, "nobody").await;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn recipient_with_registered_device_gets_notified() {
    let app = spawn_app().await;
    let alice = app.login("alice").await;
    let bob = app.login("bob").await;
    let bob_profile = app.get_me(&bob).await;
    app.add_friend(&alice, "bob").await;

    let res = app
        .client
        .put(format!("{}/auth/me/device-token", app.address))
        .bearer_auth(&bob)
        .json(&json!({ "token": "ExponentPushToken[bob]" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let res = app
        .create_reminder(&alice, "Call grandma", &bob_profile.id.as_string())
        .await;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let sent = app.push.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ExponentPushToken[bob]");
    assert_eq!(sent[0].title, "New Reminder from alice");
    assert_eq!(sent[0].body, "Call grandma");
}
