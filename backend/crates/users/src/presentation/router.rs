//! Users Router
//!
//! Every route declares its guard chain explicitly: validation first,
//! then authentication, then (for create/delete) the admin check.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use kernel::role::UserRole;
use platform::guard::{GuardChain, enforce};
use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::memory::InMemoryUserRepository;
use crate::presentation::handlers::{self, UsersAppState};
use crate::presentation::rules;

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// Create the users router with the in-memory repository
pub fn users_router(repo: InMemoryUserRepository, tokens: Arc<TokenService>) -> Router {
    users_router_generic(repo, tokens)
}

/// Create a generic users router for any repository implementation
pub fn users_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
    };

    let chain = || GuardChain::new(tokens.clone());
    let list = chain().validate(rules::LIST_USERS).authenticate();
    let by_id = chain().validate(rules::USER_BY_ID).authenticate();
    let create = chain()
        .validate(rules::CREATE_USER)
        .authenticate()
        .authorize(ADMIN_ONLY);
    let update = chain().validate(rules::UPDATE_USER).authenticate();
    let remove = chain()
        .validate(rules::USER_BY_ID)
        .authenticate()
        .authorize(ADMIN_ONLY);

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>)
                .route_layer(middleware::from_fn_with_state(list, enforce)),
        )
        .route(
            "/",
            post(handlers::create_user::<R>)
                .route_layer(middleware::from_fn_with_state(create, enforce)),
        )
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .route_layer(middleware::from_fn_with_state(by_id, enforce)),
        )
        .route(
            "/{id}",
            put(handlers::update_user::<R>)
                .route_layer(middleware::from_fn_with_state(update, enforce)),
        )
        .route(
            "/{id}",
            delete(handlers::delete_user::<R>)
                .route_layer(middleware::from_fn_with_state(remove, enforce)),
        )
        .with_state(state)
}
