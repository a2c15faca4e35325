//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;
use kernel::response::ApiResponse;
use platform::token::{Claims, TokenService};
use std::sync::Arc;
use users::UserRepository;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RefreshTokenUseCase, RegisterInput, RegisterUseCase,
};
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, TokenResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AuthResult<ApiResponse<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(
        AuthResponse {
            user: output.user,
            token: output.token,
            expires_in: state.config.expires_in.clone(),
        },
        "Login successful",
    ))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> AuthResult<ApiResponse<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::created(
        AuthResponse {
            user: output.user,
            token: output.token,
            expires_in: state.config.expires_in.clone(),
        },
        "Registration successful",
    ))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh-token
pub async fn refresh_token<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<RefreshTokenRequest>, AppError>,
) -> AuthResult<ApiResponse<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshTokenUseCase::new(state.tokens.clone());
    let token = use_case.execute(&req.refresh_token).await?;

    Ok(ApiResponse::ok(
        TokenResponse {
            token,
            expires_in: state.config.expires_in.clone(),
        },
        "Token refreshed successfully",
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(Extension(claims): Extension<Claims>) -> ApiResponse<()> {
    tracing::info!(user_id = claims.id, email = %claims.email, "User logged out");

    ApiResponse::message_only("Logout successful")
}
