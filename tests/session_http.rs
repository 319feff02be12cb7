//! End-to-end session tests: the reqwest transport against an in-process
//! backend that speaks the cookie-session protocol and enforces the
//! double-submit CSRF check on every POST.

#![cfg(feature = "server")]

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use smart_stadium::client::LOGIN_PATH;
use smart_stadium::config::ClientSettings;
use smart_stadium::session::{gate, AccessPolicy, GateDecision};
use smart_stadium::transport::http::HttpTransport;
use smart_stadium::transport::{find_cookie, Transport};
use smart_stadium::{ApiClient, AuthFailure, SessionStore};
use stadium_types::{Credentials, RegistrationProfile};

const CSRF_TOKEN: &str = "tok-8f2a";

#[derive(Default)]
struct Backend {
    /// username -> (email, password)
    users: HashMap<String, (String, String)>,
    /// session id -> username
    sessions: HashMap<String, String>,
    csrf_rejections: usize,
}

type Shared = Arc<Mutex<Backend>>;

fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|raw| find_cookie(raw, name))
}

fn csrf_ok(state: &Shared, headers: &HeaderMap) -> bool {
    let sent = headers.get("X-CSRFToken").and_then(|v| v.to_str().ok());
    let ok = matches!((cookie(headers, "csrftoken"), sent), (Some(c), Some(h)) if c == h);
    if !ok {
        state.lock().unwrap().csrf_rejections += 1;
    }
    ok
}

fn csrf_failed() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "detail": "CSRF Failed: CSRF token missing." })),
    )
        .into_response()
}

fn user_json(state: &Backend, username: &str) -> Value {
    let email = state
        .users
        .get(username)
        .map(|(email, _)| email.clone())
        .unwrap_or_default();
    json!({ "username": username, "email": email })
}

fn signed_in(state: &Shared, username: &str) -> Response {
    let sid = format!("sid-{username}");
    let mut backend = state.lock().unwrap();
    backend.sessions.insert(sid.clone(), username.to_string());
    let user = user_json(&backend, username);
    (
        [(header::SET_COOKIE, format!("sessionid={sid}; Path=/; HttpOnly"))],
        Json(json!({ "success": true, "user": user })),
    )
        .into_response()
}

async fn csrf() -> Response {
    (
        [(header::SET_COOKIE, format!("csrftoken={CSRF_TOKEN}; Path=/"))],
        Json(json!({ "detail": "CSRF cookie set" })),
    )
        .into_response()
}

async fn current_user(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    let backend = state.lock().unwrap();
    let username = cookie(&headers, "sessionid").and_then(|sid| backend.sessions.get(&sid).cloned());
    match username {
        Some(username) => Json(json!({
            "is_authenticated": true,
            "user": user_json(&backend, &username),
        })),
        None => Json(json!({ "is_authenticated": false })),
    }
}

async fn login(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !csrf_ok(&state, &headers) {
        return csrf_failed();
    }
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();
    let valid = state
        .lock()
        .unwrap()
        .users
        .get(&username)
        .is_some_and(|(_, p)| p == password);
    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Invalid credentials" })),
        )
            .into_response();
    }
    signed_in(&state, &username)
}

async fn register(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !csrf_ok(&state, &headers) {
        return csrf_failed();
    }
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    {
        let mut backend = state.lock().unwrap();
        if backend.users.contains_key(&username) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Username already exists" })),
            )
                .into_response();
        }
        backend.users.insert(username.clone(), (email, password));
    }
    signed_in(&state, &username)
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !csrf_ok(&state, &headers) {
        return csrf_failed();
    }
    if let Some(sid) = cookie(&headers, "sessionid") {
        state.lock().unwrap().sessions.remove(&sid);
    }
    (
        [(header::SET_COOKIE, "sessionid=; Path=/; Max-Age=0".to_string())],
        Json(json!({ "success": true })),
    )
        .into_response()
}

async fn validate_ticket(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !csrf_ok(&state, &headers) {
        return csrf_failed();
    }
    match body["code"].as_str() {
        Some("TKT-0001") => Json(json!({
            "valid": true,
            "details": {
                "id": 1, "event": 1, "customer_name": "Dana Smith",
                "ticket_code": "TKT-0001", "is_validated": true,
                "fraud_score": 0.05, "seat_number": "A-12", "price": "85.00"
            }
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "valid": false, "reason": "Ticket not found" })),
        )
            .into_response(),
    }
}

async fn spawn_backend() -> (String, Shared) {
    let state: Shared = Arc::default();
    state.lock().unwrap().users.insert(
        "alice".to_string(),
        ("alice@stadium.io".to_string(), "s3cret".to_string()),
    );

    let api = Router::new()
        .route("/auth/csrf/", get(csrf))
        .route("/auth/user/", get(current_user))
        .route("/auth/login/", post(login))
        .route("/auth/register/", post(register))
        .route("/auth/logout/", post(logout))
        .route("/validate-ticket", post(validate_ticket))
        .with_state(state.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), state)
}

fn settings(base: &str) -> ClientSettings {
    ClientSettings {
        api_base_url: base.to_string(),
        request_timeout_secs: 2,
        ..ClientSettings::default()
    }
}

fn store(base: &str) -> SessionStore<HttpTransport> {
    SessionStore::new(ApiClient::new(HttpTransport::new(settings(base))))
}

#[tokio::test]
async fn test_bootstrap_resolves_anonymous_and_sets_csrf_cookie() {
    let (base, _) = spawn_backend().await;
    let store = store(&base);

    let session = store.bootstrap().await;

    assert!(session.is_resolved());
    assert!(session.identity().is_none());
    assert!(store.client().transport().has_csrf_token());
    assert_eq!(
        gate::decide_for_path("/crowd", &session, AccessPolicy::default()),
        GateDecision::Redirect {
            to: "/login",
            replace: true
        }
    );
}

#[tokio::test]
async fn test_login_persists_across_session_check() {
    let (base, state) = spawn_backend().await;
    let store = store(&base);
    store.bootstrap().await;

    let outcome = store.login(&Credentials::new("alice", "s3cret")).await;

    assert!(outcome.success);
    let session = store.snapshot();
    assert_eq!(session.identity().unwrap().email, "alice@stadium.io");
    assert_eq!(
        gate::decide_for_path("/dashboard", &session, AccessPolicy::default()),
        GateDecision::Render
    );

    // The session cookie is replayed on later requests
    let me = store.client().current_user().await.unwrap();
    assert!(me.is_authenticated);
    assert_eq!(state.lock().unwrap().csrf_rejections, 0);
}

#[tokio::test]
async fn test_login_without_bootstrap_fetches_csrf_first() {
    let (base, state) = spawn_backend().await;
    let store = store(&base);

    let outcome = store.login(&Credentials::new("alice", "s3cret")).await;

    assert!(outcome.success);
    assert_eq!(state.lock().unwrap().csrf_rejections, 0);
}

#[tokio::test]
async fn test_post_without_csrf_cookie_is_refused() {
    let (base, state) = spawn_backend().await;
    let transport = HttpTransport::new(settings(&base));

    let body = json!({ "username": "alice", "password": "s3cret" });
    let response = transport.post(LOGIN_PATH, Some(&body)).await.unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(state.lock().unwrap().csrf_rejections, 1);
}

#[tokio::test]
async fn test_wrong_password_is_rejected_with_reason() {
    let (base, _) = spawn_backend().await;
    let store = store(&base);
    store.bootstrap().await;

    let outcome = store.login(&Credentials::new("alice", "nope")).await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.failure,
        Some(AuthFailure::Rejected {
            message: Some("Invalid credentials".to_string())
        })
    );
    assert!(store.snapshot().identity().is_none());
}

#[tokio::test]
async fn test_register_signs_in_and_duplicate_is_rejected() {
    let (base, _) = spawn_backend().await;
    let store = store(&base);
    store.bootstrap().await;

    let profile = RegistrationProfile {
        username: "bob".to_string(),
        email: "bob@stadium.io".to_string(),
        password: "pw".to_string(),
    };
    assert!(store.register(&profile).await.success);
    assert_eq!(store.snapshot().identity().unwrap().username, "bob");

    let again = store.register(&profile).await;
    assert_eq!(
        again.failure,
        Some(AuthFailure::Rejected {
            message: Some("Username already exists".to_string())
        })
    );
    // A rejected attempt leaves the existing session alone
    assert_eq!(store.snapshot().identity().unwrap().username, "bob");
}

#[tokio::test]
async fn test_logout_ends_backend_session() {
    let (base, state) = spawn_backend().await;
    let store = store(&base);
    store.bootstrap().await;
    store.login(&Credentials::new("alice", "s3cret")).await;

    let session = store.logout().await;

    assert!(session.identity().is_none());
    assert!(state.lock().unwrap().sessions.is_empty());
    let me = store.client().current_user().await.unwrap();
    assert!(!me.is_authenticated);
}

#[tokio::test]
async fn test_ticket_validation_decodes_rejections() {
    let (base, _) = spawn_backend().await;
    let store = store(&base);
    store.bootstrap().await;

    let ok = store.client().validate_ticket(" TKT-0001 ").await.unwrap();
    assert!(ok.valid);
    assert_eq!(ok.details.unwrap().price, 85.0);

    let missing = store.client().validate_ticket("TKT-9999").await.unwrap();
    assert!(!missing.valid);
    assert_eq!(missing.reason.as_deref(), Some("Ticket not found"));
}

#[tokio::test]
async fn test_unreachable_backend_fails_closed() {
    // Reserve a port, then free it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = store(&format!("http://{addr}/api"));

    let session = store.bootstrap().await;
    assert!(session.is_resolved());
    assert!(session.identity().is_none());

    let outcome = store.login(&Credentials::new("alice", "s3cret")).await;
    assert_eq!(outcome.failure, Some(AuthFailure::Transport));
}
