#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use herxv_shop::{
    app::build_app,
    config::{LogConfig, MailConfig},
    mailer::{MailError, Mailer, OutgoingEmail},
    order_log::OrderLog,
    state::AppState,
};

/// Keeps every email instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Behaves like an SMTP server that refuses every message.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Other("connection refused".into()))
    }
}

pub fn test_mail_config() -> MailConfig {
    MailConfig {
        from_email: "shop@herxv.test".to_string(),
        from_name: "HER XV".to_string(),
        order_from_name: "HER XV Orders".to_string(),
        order_to_email: "owner@herxv.test".to_string(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<RecordingMailer>,
    pub logs: TempDir,
}

/// Full router with middleware, a recording mailer and log files in a
/// temporary directory.
pub fn build_test_app() -> TestApp {
    let mailer = Arc::new(RecordingMailer::default());
    let logs = tempfile::tempdir().unwrap();
    let order_log = OrderLog::new(&LogConfig {
        enabled: true,
        directory: logs.path().to_path_buf(),
    });
    let state = AppState::new(test_mail_config(), mailer.clone(), order_log);

    TestApp {
        router: build_app(state),
        mailer,
        logs,
    }
}

pub fn build_failing_app() -> (Router, TempDir) {
    let logs = tempfile::tempdir().unwrap();
    let order_log = OrderLog::new(&LogConfig {
        enabled: true,
        directory: logs.path().to_path_buf(),
    });
    let state = AppState::new(test_mail_config(), Arc::new(FailingMailer), order_log);
    (build_app(state), logs)
}

pub fn valid_order() -> serde_json::Value {
    serde_json::json!({
        "customerName": "Thandi Mokoena",
        "customerEmail": "thandi@example.com",
        "customerPhone": "0825550101",
        "customerCity": "Pretoria",
        "orderNotes": "Please gift wrap",
        "website": "",
        "cart": [
            { "id": "a", "productId": 1, "name": "Her XV", "size": "M", "quantity": 2, "price": 320, "total": 640 },
            { "id": "b", "productId": 5, "name": "Blom Squad", "size": "S", "quantity": 1, "price": 320, "total": 320 }
        ]
    })
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
