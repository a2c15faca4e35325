//! Long-running request demo
//!
//! Holds the connection open for the requested number of seconds, for
//! checking proxy and client timeouts.

use std::time::Duration;

use axum::body::Bytes;
use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::response::ApiResponse;
use kernel::validation::{Check, FieldRule, Location, Rule, RuleSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_DURATION_SECS: u64 = 5;
pub const MAX_DURATION_SECS: i64 = 900;

/// `POST /api/long-process`
pub const LONG_PROCESS: &RuleSet = &[FieldRule {
    location: Location::Body,
    field: "duration",
    optional: true,
    sanitizers: &[],
    rules: &[Rule {
        check: Check::Int {
            min: Some(0),
            max: Some(MAX_DURATION_SECS),
        },
        message: "Duration must be between 0 and 900 seconds",
    }],
}];

#[derive(Debug, Default, Deserialize)]
struct LongProcessRequest {
    /// Number or numeric string
    duration: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongProcessReport {
    pub duration_seconds: u64,
    pub completed_at: DateTime<Utc>,
}

fn seconds(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// POST /api/long-process
pub async fn long_process(body: Bytes) -> AppResult<ApiResponse<LongProcessReport>> {
    let request: LongProcessRequest = if body.is_empty() {
        LongProcessRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let secs = request
        .duration
        .as_ref()
        .and_then(seconds)
        .unwrap_or(DEFAULT_DURATION_SECS);

    tracing::info!(seconds = secs, "Starting long process");
    tokio::time::sleep(Duration::from_secs(secs)).await;

    Ok(ApiResponse::ok(
        LongProcessReport {
            duration_seconds: secs,
            completed_at: Utc::now(),
        },
        format!("Process completed after {secs} seconds"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seconds_accepts_numbers_and_strings() {
        assert_eq!(seconds(&json!(3)), Some(3));
        assert_eq!(seconds(&json!("12")), Some(12));
        assert_eq!(seconds(&json!(null)), None);
        assert_eq!(seconds(&json!([1])), None);
    }

    #[tokio::test]
    async fn test_zero_duration_completes() {
        let response = long_process(Bytes::from_static(br#"{"duration": 0}"#))
            .await
            .unwrap();
        assert_eq!(response.message, "Process completed after 0 seconds");
        assert_eq!(response.data.unwrap().duration_seconds, 0);
    }
}
