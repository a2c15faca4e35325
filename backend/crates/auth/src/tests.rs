//! Router-level tests for the auth API

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use kernel::role::UserRole;
use platform::password::ClearTextPassword;
use platform::token::TokenService;
use serde_json::{Value, json};
use tower::ServiceExt;
use users::{Email, InMemoryUserRepository, NewUser, UserRepository};

use crate::application::config::AuthConfig;
use crate::presentation::router::auth_router;

const SECRET: &[u8] = b"auth-test";

async fn app() -> (Router, InMemoryUserRepository, Arc<TokenService>) {
    let config = AuthConfig::from_expires_in("1h").unwrap();
    let tokens = Arc::new(TokenService::new(SECRET, config.token_ttl));
    let repo = InMemoryUserRepository::with_sample_users();

    repo.create(NewUser {
        name: "Admin User".to_string(),
        email: Email::new("admin@example.com").unwrap(),
        role: UserRole::Admin,
        password_hash: Some(
            ClearTextPassword::new("password123".to_string())
                .hash()
                .unwrap(),
        ),
    })
    .await
    .unwrap();

    let router = Router::new().nest(
        "/api/auth",
        auth_router(repo.clone(), tokens.clone(), config),
    );
    (router, repo, tokens)
}

async fn post(app: &Router, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_login_success() {
    let (app, _, tokens) = app().await;
    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({"email": " ADMIN@example.com ", "password": "password123"}),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["email"], "admin@example.com");
    assert_eq!(body["data"]["expiresIn"], "1h");

    let claims = tokens.verify(body["data"]["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.role, UserRole::Admin);
    assert_eq!(claims.email, "admin@example.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _, _) = app().await;

    for body in [
        json!({"email": "admin@example.com", "password": "wrong"}),
        json!({"email": "nobody@example.com", "password": "password123"}),
        // Seeded without a password
        json!({"email": "john@example.com", "password": "password123"}),
    ] {
        let (status, body) = post(&app, "/api/auth/login", body, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn test_login_validation() {
    let (app, _, _) = app().await;
    let (status, body) = post(&app, "/api/auth/login", json!({}), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_then_duplicate() {
    let (app, repo, _) = app().await;
    let payload = json!({"name": " Bob ", "email": "bob@x.com", "password": "Secret1"});

    let (status, body) = post(&app, "/api/auth/register", payload.clone(), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["data"]["user"]["name"], "Bob");
    assert_eq!(body["data"]["user"]["role"], "user");
    assert!(body["data"]["token"].is_string());

    let (status, body) = post(&app, "/api/auth/register", payload, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_register_weak_password() {
    let (app, _, _) = app().await;
    let (status, body) = post(
        &app,
        "/api/auth/register",
        json!({"name": "Bob", "email": "bob@x.com", "password": "secret"}),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "password");
    assert_eq!(
        body["errors"][0]["message"],
        "Password must contain at least one lowercase letter, one uppercase letter, and one number"
    );
}

#[tokio::test]
async fn test_refresh_token() {
    let (app, _, tokens) = app().await;
    let token = tokens.issue(2, "jane@example.com", UserRole::User).unwrap();

    let (status, body) = post(
        &app,
        "/api/auth/refresh-token",
        json!({"refreshToken": token}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Token refreshed successfully");
    let claims = tokens.verify(body["data"]["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.id, 2);

    let (status, body) = post(
        &app,
        "/api/auth/refresh-token",
        json!({"refreshToken": "garbage"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid refresh token");
}

#[tokio::test]
async fn test_logout_requires_token() {
    let (app, _, tokens) = app().await;

    let (status, body) = post(&app, "/api/auth/logout", json!({}), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Access token required");

    let token = tokens.issue(1, "john@example.com", UserRole::Admin).unwrap();
    let (status, body) = post(&app, "/api/auth/logout", json!({}), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logout successful");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let (app, _, _) = app().await;
    let foreign = TokenService::new(b"other", Duration::from_secs(60))
        .issue(1, "john@example.com", UserRole::Admin)
        .unwrap();

    let (status, body) = post(&app, "/api/auth/logout", json!({}), Some(&foreign)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}
