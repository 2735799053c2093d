//! End-to-end relay tests against a local stand-in for the Bot API

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tower::ServiceExt;
use vitrina_core::{TelegramClient, TelegramConfig};
use vitrina_server::{build_router, AppState};

/// Canned Bot API that records the first payload it receives
#[derive(Clone)]
struct BotApi {
    reply: Value,
    captured: Arc<Mutex<Option<oneshot::Sender<Value>>>>,
}

async fn handle_send_message(State(state): State<BotApi>, Json(payload): Json<Value>) -> Json<Value> {
    if let Some(tx) = state.captured.lock().await.take() {
        let _ = tx.send(payload);
    }
    Json(state.reply.clone())
}

async fn spawn_bot_api(reply: Value) -> (String, oneshot::Receiver<Value>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();
    let state = BotApi {
        reply,
        captured: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/bottest-token/sendMessage", post(handle_send_message))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), rx)
}

fn relay_state(api_base: &str) -> Arc<AppState> {
    let config = TelegramConfig {
        bot_token: Some("test-token".to_string()),
        chat_id: Some(467_035),
        api_base: api_base.to_string(),
        request_timeout_secs: 5,
    };
    Arc::new(AppState {
        relay: TelegramClient::new(&config).expect("client"),
    })
}

fn submission_request(body: &str) -> Request<Body> {
    Request::post("/send-message")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn submission_is_forwarded_and_acknowledged() {
    let (api_base, payload_rx) = spawn_bot_api(json!({ "ok": true, "result": {} })).await;
    let app = build_router(relay_state(&api_base));

    let response = app
        .oneshot(submission_request(
            r#"{"name":"Anna","phone":"+7 900 000-00-00","message":"Call me back"}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Message sent"));

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload["chat_id"], json!(467_035));
    let text = payload["text"].as_str().expect("text");
    assert!(text.contains("Name: Anna"));
    assert!(text.contains("Phone: +7 900 000-00-00"));
    assert!(text.contains("Message: Call me back"));
}

#[tokio::test]
async fn upstream_rejection_maps_to_client_error() {
    let (api_base, _payload_rx) = spawn_bot_api(json!({
        "ok": false,
        "error_code": 400,
        "description": "chat not found"
    }))
    .await;
    let app = build_router(relay_state(&api_base));

    let response = app
        .oneshot(submission_request(r#"{"name":"Anna"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("chat not found"));
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    // Nothing listens on port 1.
    let app = build_router(relay_state("http://127.0.0.1:1"));

    let response = app
        .oneshot(submission_request(r#"{"name":"Anna"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Failed to send message"));
}

#[tokio::test]
async fn missing_fields_get_placeholders() {
    let (api_base, payload_rx) = spawn_bot_api(json!({ "ok": true, "result": {} })).await;
    let app = build_router(relay_state(&api_base));

    let response = app
        .oneshot(submission_request("{}"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = payload_rx.await.expect("payload");
    let text = payload["text"].as_str().expect("text");
    assert_eq!(text.matches("Not specified").count(), 3);
}
