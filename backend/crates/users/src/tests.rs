//! Router-level tests for the users API
//!
//! Tokens are minted directly so no test pays for a password hash except
//! the ones that create users.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use kernel::role::UserRole;
use platform::token::TokenService;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::domain::repository::UserRepository;
use crate::infra::memory::InMemoryUserRepository;
use crate::presentation::router::users_router;

struct Harness {
    app: Router,
    repo: InMemoryUserRepository,
    tokens: Arc<TokenService>,
}

impl Harness {
    fn new() -> Self {
        let tokens = Arc::new(TokenService::new(b"users-test", Duration::from_secs(600)));
        let repo = InMemoryUserRepository::with_sample_users();
        let app = Router::new().nest("/api/users", users_router(repo.clone(), tokens.clone()));
        Self { app, repo, tokens }
    }

    fn token(&self, role: UserRole) -> String {
        let id = if role.is_admin() { 1 } else { 2 };
        self.tokens.issue(id, "t@example.com", role).unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

#[tokio::test]
async fn test_list_requires_token() {
    let h = Harness::new();
    let (status, body) = h.send(Method::GET, "/api/users", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access token required");
}

#[tokio::test]
async fn test_list_users_with_pagination() {
    let h = Harness::new();
    let token = h.token(UserRole::User);
    let (status, body) = h
        .send(Method::GET, "/api/users?page=1&limit=1", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Users retrieved successfully");
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["data"]["pagination"],
        json!({"page": 1, "limit": 1, "total": 2, "pages": 2})
    );
}

#[tokio::test]
async fn test_list_filters_by_role() {
    let h = Harness::new();
    let token = h.token(UserRole::User);
    let (_, body) = h
        .send(Method::GET, "/api/users?role=admin", Some(&token), None)
        .await;

    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "John Doe");
}

#[tokio::test]
async fn test_invalid_query_is_rejected_before_auth() {
    let h = Harness::new();
    let (status, body) = h
        .send(Method::GET, "/api/users?limit=500", None, None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "limit");
    assert_eq!(body["errors"][0]["value"], "500");
}

#[tokio::test]
async fn test_get_user() {
    let h = Harness::new();
    let token = h.token(UserRole::User);

    let (status, body) = h.send(Method::GET, "/api/users/2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User retrieved successfully");
    assert_eq!(body["data"]["email"], "jane@example.com");
    assert!(body["data"].get("passwordHash").is_none());

    let (status, body) = h.send(Method::GET, "/api/users/99", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = h.send(Method::GET, "/api/users/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "User ID must be a number");
}

#[tokio::test]
async fn test_create_then_get_then_duplicate() {
    let h = Harness::new();
    let token = h.token(UserRole::Admin);
    let payload = json!({"name": "A", "email": "a@x.com", "password": "Abcdef1"});

    // "A" is one character: the name rule rejects it
    let (status, body) = h
        .send(Method::POST, "/api/users", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "name");

    let payload = json!({"name": "Al", "email": " A@X.com ", "password": "Abcdef1"});
    let (status, body) = h
        .send(Method::POST, "/api/users", Some(&token), Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Resource created successfully");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["role"], "user");
    let id = body["data"]["id"].as_u64().unwrap();
    assert_eq!(id, 3);

    let (status, fetched) = h
        .send(Method::GET, &format!("/api/users/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);

    let (status, body) = h
        .send(Method::POST, "/api/users", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
    assert_eq!(h.repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_create_requires_admin() {
    let h = Harness::new();
    let token = h.token(UserRole::User);
    let payload = json!({"name": "Al", "email": "a@x.com", "password": "Abcdef1"});

    let (status, body) = h
        .send(Method::POST, "/api/users", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Insufficient permissions");
    assert_eq!(h.repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_update_user() {
    let h = Harness::new();
    let token = h.token(UserRole::User);

    let (status, body) = h
        .send(
            Method::PUT,
            "/api/users/2",
            Some(&token),
            Some(json!({"name": "  Janet  ", "role": "moderator"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Resource updated successfully");
    assert_eq!(body["data"]["name"], "Janet");
    assert_eq!(body["data"]["role"], "moderator");
    assert_eq!(body["data"]["email"], "jane@example.com");

    let (status, body) = h
        .send(
            Method::PUT,
            "/api/users/2",
            Some(&token),
            Some(json!({"email": "JOHN@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");

    let (status, _) = h
        .send(Method::PUT, "/api/users/77", Some(&token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_user_with_taken_email_is_not_found() {
    let h = Harness::new();
    let token = h.token(UserRole::Admin);

    let (status, body) = h
        .send(
            Method::PUT,
            "/api/users/99",
            Some(&token),
            Some(json!({"email": "john@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_create_accepts_numeric_name_as_text() {
    let h = Harness::new();
    let token = h.token(UserRole::Admin);
    let payload = json!({"name": 12, "email": "n@x.com", "password": "Abcdef1"});

    let (status, body) = h
        .send(Method::POST, "/api/users", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "12");
}

#[tokio::test]
async fn test_huge_page_is_a_validation_error() {
    let h = Harness::new();
    let token = h.token(UserRole::User);

    let (status, body) = h
        .send(Method::GET, "/api/users?page=5000000000", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "page");
}

#[tokio::test]
async fn test_delete_user() {
    let h = Harness::new();
    let admin = h.token(UserRole::Admin);
    let user = h.token(UserRole::User);

    let (status, _) = h.send(Method::DELETE, "/api/users/2", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = h.send(Method::DELETE, "/api/users/2", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Resource deleted successfully");
    assert_eq!(body["data"]["name"], "Jane Smith");

    let (status, body) = h.send(Method::DELETE, "/api/users/2", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
    assert_eq!(h.repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_expired_token() {
    let h = Harness::new();
    let expired = TokenService::new(b"users-test", Duration::ZERO)
        .issue(1, "a@x.com", UserRole::Admin)
        .unwrap();
    // exp == iat; wait for the clock to pass it
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (status, body) = h.send(Method::GET, "/api/users", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}
