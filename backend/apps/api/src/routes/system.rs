//! Banner, API catalogue and fallbacks

use axum::extract::State;
use axum::http::{Method, Uri};
use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::response::ApiResponse;
use serde::Serialize;
use serde_json::{Value, json};

use super::{AppState, SERVICE_NAME, VERSION};

#[derive(Debug, Serialize)]
pub struct Banner {
    pub service: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /
pub async fn root(State(state): State<AppState>) -> ApiResponse<Banner> {
    ApiResponse::ok(
        Banner {
            service: SERVICE_NAME,
            version: VERSION,
            environment: state.environment.as_str(),
            timestamp: Utc::now(),
        },
        format!("{SERVICE_NAME} is running"),
    )
}

/// GET /api
pub async fn api_index(State(state): State<AppState>) -> ApiResponse<Value> {
    let mut info = json!({
        "name": SERVICE_NAME,
        "version": VERSION,
        "environment": state.environment.as_str(),
        "timestamp": Utc::now(),
        "endpoints": {
            "auth": {
                "POST /api/auth/login": "User login",
                "POST /api/auth/register": "User registration",
                "POST /api/auth/refresh-token": "Refresh access token",
                "POST /api/auth/logout": "User logout"
            },
            "users": {
                "GET /api/users": "Get all users (paginated)",
                "GET /api/users/:id": "Get user by ID",
                "POST /api/users": "Create new user (admin only)",
                "PUT /api/users/:id": "Update user",
                "DELETE /api/users/:id": "Delete user (admin only)"
            },
            "health": {
                "GET /health": "Health check",
                "GET /health/ready": "Readiness check"
            },
            "demo": {
                "POST /api/long-process": "Respond after a delay"
            }
        },
        "authentication": {
            "type": "JWT Bearer Token",
            "header": "Authorization: Bearer <token>",
            "login": "POST /api/auth/login with email/password"
        }
    });

    if !state.environment.is_production() {
        info["sampleCredentials"] = json!({
            "email": crate::DEMO_ADMIN_EMAIL,
            "password": crate::DEMO_ADMIN_PASSWORD
        });
    }

    ApiResponse::ok(info, "API information retrieved successfully")
}

/// Fallback for unmatched paths and methods
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "No route matched");
    AppError::not_found(format!("Route {method} {} not found", uri.path()))
}
