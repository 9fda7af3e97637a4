use reqwest::StatusCode;
use sesmock::domain::Message;
use time::macros::datetime;

mod common;

fn stored_message(id: &str, received_at: time::OffsetDateTime) -> Message {
    Message {
        id: id.to_owned(),
        from: "a@x.com".to_owned(),
        reply_to: vec!["r@x.com".to_owned()],
        to: vec!["b@x.com".to_owned()],
        cc: vec!["c@x.com".to_owned()],
        bcc: vec!["d@x.com".to_owned()],
        subject: format!("subject {id}"),
        body_html: String::new(),
        body_text: "plain".to_owned(),
        received_at,
    }
}

#[tokio::test]
async fn test_list_is_empty_before_any_send() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/messages", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"messages": []}));
}

#[tokio::test]
async fn test_list_orders_by_received_time() {
    let app = common::TestApp::spawn().await;

    let t1 = datetime!(2024-06-01 12:00:00 UTC);
    let t2 = datetime!(2024-06-01 12:00:01 UTC);
    let t3 = datetime!(2024-06-01 12:00:02 UTC);

    app.store.insert("m3", stored_message("m3", t3)).await;
    app.store.insert("m1", stored_message("m1", t1)).await;
    app.store.insert("m2", stored_message("m2", t2)).await;

    let resp = app.client.get(format!("{}/messages", app.server_url)).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    let ids: Vec<&str> =
        body["messages"].as_array().unwrap().iter().map(|m| m["message_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
}

#[tokio::test]
async fn test_list_projects_summaries_only() {
    let app = common::TestApp::spawn().await;
    app.store.insert("m1", stored_message("m1", datetime!(2024-06-01 12:00:00 UTC))).await;

    let resp = app.client.get(format!("{}/messages", app.server_url)).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    let entry = &body["messages"][0];
    assert_eq!(entry["message_id"], "m1");
    assert_eq!(entry["from"], "a@x.com");
    assert_eq!(entry["subject"], "subject m1");
    assert_eq!(entry["received_at"], "2024-06-01T12:00:00Z");
    assert!(entry.get("body").is_none());
    assert!(entry.get("to").is_none());
}

#[tokio::test]
async fn test_get_returns_full_content_with_text_fallback() {
    let app = common::TestApp::spawn().await;
    app.store.insert("m1", stored_message("m1", datetime!(2024-06-01 12:00:00 UTC))).await;

    let resp = app.client.get(format!("{}/messages/m1", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message_id"], "m1");
    assert_eq!(body["from"], "a@x.com");
    assert_eq!(body["reply_to"], serde_json::json!(["r@x.com"]));
    assert_eq!(body["to"], serde_json::json!(["b@x.com"]));
    assert_eq!(body["cc"], serde_json::json!(["c@x.com"]));
    assert_eq!(body["bcc"], serde_json::json!(["d@x.com"]));
    assert_eq!(body["subject"], "subject m1");
    assert_eq!(body["body"], "plain");
    assert_eq!(body["received_at"], "2024-06-01T12:00:00Z");
}

#[tokio::test]
async fn test_get_prefers_html_body() {
    let app = common::TestApp::spawn().await;
    let mut message = stored_message("m1", datetime!(2024-06-01 12:00:00 UTC));
    message.body_html = "<p>rich</p>".to_owned();
    app.store.insert("m1", message).await;

    let resp = app.client.get(format!("{}/messages/m1", app.server_url)).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    // Exactly one body value, the HTML variant.
    assert_eq!(body["body"], "<p>rich</p>");
    assert!(body.get("body_text").is_none());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/messages/never-issued", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "message not found (id = never-issued)");
}

#[tokio::test]
async fn test_get_is_stable_between_reads() {
    let app = common::TestApp::spawn().await;

    let resp = app.send_email(&common::simple_send_payload("hi", "hello")).await;
    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["MessageId"].as_str().unwrap();

    let url = format!("{}/messages/{id}", app.server_url);
    let first: serde_json::Value = app.client.get(&url).send().await.unwrap().json().await.unwrap();
    let second: serde_json::Value = app.client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(first, second);
}
