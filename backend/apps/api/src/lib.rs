//! API Application
//!
//! Assembles the auth, users and service routers into one axum app with
//! the shared middleware stack (panic catcher, request tracing, CORS).

pub mod config;
pub mod routes;

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use kernel::error::app_error::AppError;
use kernel::role::UserRole;
use platform::guard::{GuardChain, MAX_BODY_BYTES, enforce};
use platform::token::TokenService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use users::application::{CreateUserInput, CreateUserUseCase};
use users::{InMemoryUserRepository, UsersResult};

use crate::config::AppConfig;
use crate::routes::{AppState, demo, health, system};

pub const DEMO_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEMO_ADMIN_PASSWORD: &str = "password123";

/// Build the full application router
pub fn build_app(config: &AppConfig, repo: InMemoryUserRepository) -> Router {
    let tokens = Arc::new(TokenService::new(
        config.jwt_secret.as_bytes(),
        config.auth.token_ttl,
    ));

    let state = AppState {
        repo: repo.clone(),
        environment: config.environment,
        started_at: Instant::now(),
    };

    let long_process = GuardChain::new(tokens.clone()).validate(demo::LONG_PROCESS);

    let service_routes = Router::new()
        .route("/", get(system::root))
        .route("/api", get(system::api_index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route(
            "/api/long-process",
            post(demo::long_process)
                .route_layer(middleware::from_fn_with_state(long_process, enforce)),
        )
        .with_state(state);

    service_routes
        .nest(
            "/api/auth",
            auth::auth_router(repo.clone(), tokens.clone(), config.auth.clone()),
        )
        .nest("/api/users", users::users_router(repo, tokens))
        .fallback(system::not_found)
        .method_not_allowed_fallback(system::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

/// CORS for the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ]))
        .allow_credentials(true)
        .max_age(Duration::from_secs(86_400))
}

/// Turn a handler panic into the generic 500 envelope
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(panic = detail, "Handler panicked");

    AppError::internal(detail.to_string()).into_response()
}

/// Seed the documented sample login (`admin@example.com` / `password123`)
pub async fn seed_demo_admin(repo: &InMemoryUserRepository) -> UsersResult<()> {
    let admin = CreateUserUseCase::new(Arc::new(repo.clone()))
        .execute(CreateUserInput {
            name: "Admin User".to_string(),
            email: DEMO_ADMIN_EMAIL.to_string(),
            password: DEMO_ADMIN_PASSWORD.to_string(),
            role: Some(UserRole::Admin),
        })
        .await?;

    tracing::info!(user_id = %admin.id, email = DEMO_ADMIN_EMAIL, "Seeded demo admin");
    Ok(())
}
