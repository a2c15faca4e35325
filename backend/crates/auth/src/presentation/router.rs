//! Auth Router

use axum::{Router, middleware, routing::post};
use platform::guard::{GuardChain, enforce};
use platform::token::TokenService;
use std::sync::Arc;
use users::{InMemoryUserRepository, UserRepository};

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::rules;

/// Create the auth router with the in-memory user repository
pub fn auth_router(
    repo: InMemoryUserRepository,
    tokens: Arc<TokenService>,
    config: AuthConfig,
) -> Router {
    auth_router_generic(repo, tokens, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, tokens: Arc<TokenService>, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let chain = || GuardChain::new(tokens.clone());
    let login = chain().validate(rules::LOGIN);
    let register = chain().validate(rules::REGISTER);
    let refresh = chain().validate(rules::REFRESH_TOKEN);
    let logout = chain().authenticate();

    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/login",
            post(handlers::login::<R>).route_layer(middleware::from_fn_with_state(login, enforce)),
        )
        .route(
            "/register",
            post(handlers::register::<R>)
                .route_layer(middleware::from_fn_with_state(register, enforce)),
        )
        .route(
            "/refresh-token",
            post(handlers::refresh_token::<R>)
                .route_layer(middleware::from_fn_with_state(refresh, enforce)),
        )
        .route(
            "/logout",
            post(handlers::logout).route_layer(middleware::from_fn_with_state(logout, enforce)),
        )
        .with_state(state)
}
