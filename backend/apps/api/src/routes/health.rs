//! Liveness and readiness probes

use axum::extract::State;
use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::response::ApiResponse;
use serde::Serialize;
use users::UserRepository;

use super::{AppState, VERSION};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub environment: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessChecks {
    pub user_store: &'static str,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthReport> {
    ApiResponse::ok(
        HealthReport {
            status: "OK",
            timestamp: Utc::now(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            environment: state.environment.as_str(),
            version: VERSION,
        },
        "Health check passed",
    )
}

/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> AppResult<ApiResponse<ReadinessChecks>> {
    if let Err(e) = state.repo.ping().await {
        tracing::error!(error = %e, "Readiness check failed");
        return Err(AppError::service_unavailable("Service is not ready"));
    }

    Ok(ApiResponse::ok(
        ReadinessChecks {
            user_store: "connected",
        },
        "Service is ready",
    ))
}
