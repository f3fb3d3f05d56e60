//! Wire-level contract tests for the relay endpoint.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use vitrine_config::{
    Config, ConfigMetadata, MailConfig, SecretString, ServerConfig,
};
use vitrine_server::{
    infra::app_state::AppState,
    mailer::{Mailer, MailerError, OutgoingMail},
    routes::create_router,
};

#[derive(Debug, Default)]
struct StubMailer {
    fail_verify: bool,
    fail_send: bool,
    verifies: AtomicUsize,
    sends: AtomicUsize,
}

#[async_trait]
impl Mailer for StubMailer {
    async fn verify(&self) -> Result<(), MailerError> {
        self.verifies.fetch_add(1, Ordering::SeqCst);
        if self.fail_verify {
            return Err(MailerError::Unavailable("connection refused".into()));
        }
        Ok(())
    }

    async fn send(&self, _mail: OutgoingMail) -> Result<(), MailerError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        if self.fail_send {
            return Err(MailerError::Unavailable("550 rejected".into()));
        }
        Ok(())
    }
}

fn app_with(mailer: Arc<StubMailer>) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        mail: MailConfig {
            username: "relay@example.com".into(),
            password: SecretString::new("app-password"),
            smtp_host: "smtp.example.com".into(),
        },
        metadata: ConfigMetadata::default(),
    };
    create_router(AppState::new(Arc::new(config), mailer))
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn complete_submission_is_relayed() {
    let mailer = Arc::new(StubMailer::default());
    let app = app_with(mailer.clone());

    let response = app
        .oneshot(post_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello!",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Email sent successfully"));
    assert_eq!(mailer.verifies.load(Ordering::SeqCst), 1);
    assert_eq!(mailer.sends.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_email_is_rejected_without_touching_the_transport() {
    let mailer = Arc::new(StubMailer::default());
    let app = app_with(mailer.clone());

    let response = app
        .oneshot(post_json(json!({
            "name": "Ada",
            "message": "Hello!",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("All fields are required"));
    assert_eq!(mailer.verifies.load(Ordering::SeqCst), 0);
    assert_eq!(mailer.sends.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let app = app_with(Arc::new(StubMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Method Not Allowed"));
}

#[tokio::test]
async fn options_returns_an_empty_ok() {
    let app = app_with(Arc::new(StubMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn verification_failure_yields_500_and_no_send() {
    let mailer = Arc::new(StubMailer {
        fail_verify: true,
        ..StubMailer::default()
    });
    let app = app_with(mailer.clone());

    let response = app
        .oneshot(post_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello!",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["message"], json!("Failed to send email"));
    assert_eq!(mailer.sends.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn transport_failure_yields_500() {
    let mailer = Arc::new(StubMailer {
        fail_send: true,
        ..StubMailer::default()
    });
    let app = app_with(mailer.clone());

    let response = app
        .oneshot(post_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello!",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Failed to send email"));
}

#[tokio::test]
async fn cross_origin_requests_get_permissive_cors_headers() {
    let app = app_with(Arc::new(StubMailer::default()));

    let mut request = post_json(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello!",
    }));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn preflight_lists_the_allowed_methods() {
    let app = app_with(Arc::new(StubMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/contact")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(allowed.contains("POST"), "allow-methods was `{allowed}`");
    assert!(allowed.contains("OPTIONS"), "allow-methods was `{allowed}`");
}
