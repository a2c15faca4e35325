//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the axum response that turns every [`AppError`] into the failure envelope.

use super::app_error::AppError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::bad_request("Invalid UTF-8 string").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            AppError::bad_request("Invalid JSON body").with_source(err)
        } else if err.is_data() {
            AppError::bad_request(format!("Invalid request body: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod axum_impl {
    use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    use crate::error::app_error::AppError;
    use crate::response::ErrorBody;

    impl From<JsonRejection> for AppError {
        fn from(rejection: JsonRejection) -> Self {
            match rejection {
                JsonRejection::JsonSyntaxError(_) => AppError::bad_request("Invalid JSON body"),
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::bad_request("Expected request with `Content-Type: application/json`")
                }
                other => AppError::bad_request(other.body_text()),
            }
        }
    }

    impl From<PathRejection> for AppError {
        fn from(rejection: PathRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl From<QueryRejection> for AppError {
        fn from(rejection: QueryRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let body = ErrorBody::new(self.public_message(), self.errors());

            (status, axum::Json(body)).into_response()
        }
    }
}
