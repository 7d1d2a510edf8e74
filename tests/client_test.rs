// Integration tests for the FCM client against a mock FCM endpoint

use fcm_legacy::{FcmClient, FcmError, Message, Notification, Priority, Recipient};
use serde_json::json;
use wiremock::matchers::{body_bytes, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fcm_legacy=debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_send_topic_message() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fcm/send"))
        .and(header("Authorization", "key=ABC"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "to": "/topics/news",
            "data": {"k": "v"},
            "priority": "normal"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FcmClient::new("ABC").with_proxy_api_url(format!("{}/fcm/send", server.uri()));
    let message = Message::new()
        .add_recipient(Recipient::topic("news"))
        .unwrap()
        .with_priority(Priority::Normal)
        .with_data_entry("k", "v");

    let response = client.send(&message).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_send_device_message_with_notification() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_json(json!({
            "to": "device-token-1",
            "priority": "high",
            "notification": {"title": "Hi", "body": "There", "sound": "default"},
            "time_to_live": 0
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = FcmClient::new("ABC").with_proxy_api_url(format!("{}/send", server.uri()));
    let message = Message::new()
        .add_recipient(Recipient::device("device-token-1"))
        .unwrap()
        .with_notification(Notification::new("Hi", "There").with_sound("default"))
        .with_time_to_live(0);

    let response = client.send(&message).await.unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_send_encrypted_payload() {
    init_tracing();
    let server = MockServer::start().await;
    let payload = vec![0x01, 0x02, 0xff, 0x00, 0x7f];

    Mock::given(method("POST"))
        .and(header("Authorization", "key=ABC"))
        .and(header("Content-Type", "application/json"))
        .and(header("Encryption", "dh=abc"))
        .and(header("Crypto-Key", "salt=xyz"))
        .and(header("Content-Encoding", "aesgcm"))
        .and(header("TTL", "0"))
        .and(body_bytes(payload.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = FcmClient::new("ABC").with_proxy_api_url(server.uri());
    let message = Message::new()
        .add_recipient(Recipient::device("device-token-1"))
        .unwrap()
        .with_data_entry("ignored", true)
        .with_encrypted_data(payload, "dh=abc", "salt=xyz");

    let response = client.send(&message).await.unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_error_status_is_returned_untouched() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = FcmClient::new("wrong-key").with_proxy_api_url(server.uri());
    let message = Message::new().add_recipient(Recipient::topic("news")).unwrap();

    let response = client.send(&message).await.unwrap();
    assert_eq!(response.status(), 401);
    assert_eq!(response.text().await.unwrap(), "Unauthorized");
}

#[tokio::test]
async fn test_multiple_topics_send_condition() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "condition": "'a' in topics || 'b' in topics",
            "priority": "high"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = FcmClient::new("ABC").with_proxy_api_url(server.uri());
    let message = Message::new()
        .add_recipient(Recipient::topic("a"))
        .and_then(|m| m.add_recipient(Recipient::topic("b")))
        .unwrap();

    client.send(&message).await.unwrap();
}

#[tokio::test]
async fn test_empty_message_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FcmClient::new("ABC").with_proxy_api_url(server.uri());

    let result = client.send(&Message::new()).await;
    assert!(matches!(result, Err(FcmError::EmptyRecipients)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on port 1
    let client = FcmClient::new("ABC").with_proxy_api_url("http://127.0.0.1:1/fcm/send");
    let message = Message::new().add_recipient(Recipient::topic("news")).unwrap();

    let result = client.send(&message).await;
    assert!(matches!(result, Err(FcmError::Transport(_))));
}
