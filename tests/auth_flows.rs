//! End-to-end tests for the auth flows against a mock of the user API.
//!
//! The mock implements the six `/api/users/*` endpoints over real HTTP so the
//! client, the flow controllers, the session store and the handoff are
//! exercised together exactly as the binary wires them.

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use tokio::net::TcpListener;

use stocksathi::errors::FlowError;
use stocksathi::flow::{CodeInput, LoginFlow, ResetFlow, ResetStep, SignupFlow, VerifyFlow};
use stocksathi::session::SessionStore;
use stocksathi::{api::AuthClient, handoff};

const GOOD_EMAIL: &str = "trader@example.com";
const GOOD_PASSWORD: &str = "secret1";
const GOOD_CODE: &str = "123456";

fn user_body(email: &str) -> Value {
    json!({"id": 42, "name": "Trader", "email": email})
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"success": false, "message": "Email already registered"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "token": "fresh-token",
            "user": user_body(&email),
        })),
    )
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == GOOD_EMAIL && body["password"] == GOOD_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "token": "session-token",
                "user": user_body(GOOD_EMAIL),
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
    }
}

async fn send_code(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default();
    Json(json!({
        "success": true,
        "message": format!("Code sent to {email}"),
    }))
}

async fn verify_email(Json(body): Json<Value>) -> impl IntoResponse {
    if body["code"] == GOOD_CODE {
        (StatusCode::OK, Json(json!({"success": true})))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Invalid verification code"})),
        )
    }
}

async fn reset_password(Json(body): Json<Value>) -> impl IntoResponse {
    if body["code"] != GOOD_CODE {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Invalid reset code"})),
        );
    }
    if body["newPassword"].as_str().unwrap_or_default().len() < 6 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Password too short"})),
        );
    }
    (StatusCode::OK, Json(json!({"success": true})))
}

/// Half-open register endpoint: claims success but sends no token, the shape
/// a broken backend could produce. The client must refuse to hand off.
async fn register_missing_token(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    Json(json!({"success": true, "user": user_body(&email)}))
}

async fn spawn_mock(broken_register: bool) -> String {
    let register_route = if broken_register {
        post(register_missing_token)
    } else {
        post(register)
    };

    let app = Router::new()
        .route("/api/users/register", register_route)
        .route("/api/users/login", post(login))
        .route("/api/users/send-verification-code", post(send_code))
        .route("/api/users/verify-email", post(verify_email))
        .route("/api/users/send-password-reset-code", post(send_code))
        .route("/api/users/reset-password", post(reset_password));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn scratch_store() -> SessionStore {
    let unique = format!(
        "stocksathi-it-{}-{}.json",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    SessionStore::new(std::env::temp_dir().join(unique))
}

#[tokio::test]
async fn login_persists_full_session_before_handoff() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();
    let store = scratch_store();

    let mut flow = LoginFlow::new(GOOD_EMAIL.to_string(), SecretString::from(GOOD_PASSWORD));
    let session = flow.submit(&client, &store).await.unwrap();

    // The store is the source of truth for the handoff.
    let persisted = store.read().unwrap();
    assert_eq!(persisted, session);
    assert_eq!(persisted.token, "session-token");
    assert_eq!(persisted.user["email"], GOOD_EMAIL);
    assert!(persisted.is_complete());

    let url = handoff::dashboard_url("http://localhost:5174", &session).unwrap();
    assert!(url.as_str().starts_with("http://localhost:5174/?token="));

    store.clear().unwrap();
}

#[tokio::test]
async fn login_failure_surfaces_server_message_and_writes_nothing() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();
    let store = scratch_store();

    let mut flow = LoginFlow::new(GOOD_EMAIL.to_string(), SecretString::from("wrong-pass"));
    let err = flow.submit(&client, &store).await.unwrap_err();

    assert_eq!(err, FlowError::Server("Invalid credentials".to_string()));
    assert!(store.read().is_none());
}

#[tokio::test]
async fn signup_leaves_session_and_verification_hint() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();
    let store = scratch_store();

    let mut flow = SignupFlow::new(
        "Trader".to_string(),
        "new@example.com".to_string(),
        SecretString::from(GOOD_PASSWORD),
    );
    let session = flow.submit(&client, &store).await.unwrap();

    assert_eq!(session.token, "fresh-token");
    assert_eq!(
        store.take_verification_hint(),
        Some("new@example.com".to_string())
    );

    store.clear().unwrap();
}

#[tokio::test]
async fn duplicate_signup_reports_the_conflict_message() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();
    let store = scratch_store();

    let mut flow = SignupFlow::new(
        "Trader".to_string(),
        "taken@example.com".to_string(),
        SecretString::from(GOOD_PASSWORD),
    );
    let err = flow.submit(&client, &store).await.unwrap_err();

    assert_eq!(
        err,
        FlowError::Server("Email already registered".to_string())
    );
    assert!(store.read().is_none());
}

#[tokio::test]
async fn success_without_token_refuses_the_handoff() {
    let base = spawn_mock(true).await;
    let client = AuthClient::new(&base).unwrap();
    let store = scratch_store();

    let mut flow = SignupFlow::new(
        "Trader".to_string(),
        "new@example.com".to_string(),
        SecretString::from(GOOD_PASSWORD),
    );
    let err = flow.submit(&client, &store).await.unwrap_err();

    assert_eq!(err, FlowError::IncompleteSession);
    assert!(store.read().is_none());
}

#[tokio::test]
async fn send_code_starts_the_sixty_second_cooldown() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();

    let mut flow = VerifyFlow::new(GOOD_EMAIL.to_string());
    let t0 = Instant::now();
    let message = flow.send_code(&client, t0).await.unwrap();

    assert_eq!(message.as_deref(), Some("Code sent to trader@example.com"));
    assert_eq!(flow.resend_remaining_secs(t0), 60);

    let err = flow.send_code(&client, t0).await.unwrap_err();
    assert!(err.to_string().contains("wait"));
}

#[tokio::test]
async fn wrong_verification_code_is_rejected_and_cleared() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();

    let mut flow = VerifyFlow::new(GOOD_EMAIL.to_string());
    flow.code = CodeInput::parse("999999").unwrap();

    let err = flow.submit(&client).await.unwrap_err();
    assert_eq!(
        err,
        FlowError::Server("Invalid verification code".to_string())
    );
    assert_eq!(flow.code.first_empty(), Some(0));

    flow.code = CodeInput::parse(GOOD_CODE).unwrap();
    flow.submit(&client).await.unwrap();
}

#[tokio::test]
async fn reset_wizard_walks_forward_to_done() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();

    let mut flow = ResetFlow::new();
    flow.submit_email(&client, GOOD_EMAIL.to_string(), Instant::now())
        .await
        .unwrap();
    assert_eq!(flow.step(), ResetStep::Code);

    flow.code = CodeInput::parse(GOOD_CODE).unwrap();
    flow.submit_code().unwrap();
    assert_eq!(flow.step(), ResetStep::Password);

    flow.submit_password(&client, &SecretString::from("brand-new-pass"))
        .await
        .unwrap();
    assert_eq!(flow.step(), ResetStep::Done);
}

#[tokio::test]
async fn reset_with_wrong_code_stays_on_password_step() {
    let base = spawn_mock(false).await;
    let client = AuthClient::new(&base).unwrap();

    let mut flow = ResetFlow::resume(
        GOOD_EMAIL.to_string(),
        CodeInput::parse("000000").unwrap(),
    );

    let err = flow
        .submit_password(&client, &SecretString::from("brand-new-pass"))
        .await
        .unwrap_err();
    assert_eq!(err, FlowError::Server("Invalid reset code".to_string()));
    assert_eq!(flow.step(), ResetStep::Password);
    assert_eq!(flow.code.first_empty(), Some(0));
}
