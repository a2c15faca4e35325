//! Response Envelope
//!
//! Every response body, successful or not, has the same outer shape:
//!
//! ```json
//! { "success": true,  "data": { ... }, "message": "..." }
//! { "success": false, "message": "...", "errors": [ ... ] }
//! ```
//!
//! [`ApiResponse`] builds the success side. The failure side is produced
//! exclusively by `AppError`'s `IntoResponse`, which uses [`ErrorBody`].

use serde::Serialize;
use std::borrow::Cow;

use crate::validation::FieldError;

/// Success envelope
///
/// `data` is always serialized (as `null` when absent) so clients can rely
/// on the key being present.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Cow<'static, str>,
    #[serde(skip)]
    status: u16,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with payload
    pub fn ok(data: T, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            status: 200,
        }
    }

    /// 201 Created with payload
    pub fn created(data: T, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: 201,
            ..Self::ok(data, message)
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }
}

impl ApiResponse<()> {
    /// 200 OK with `data: null`
    pub fn message_only(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            status: 200,
        }
    }
}

/// Failure envelope body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a [FieldError]>,
}

impl<'a> ErrorBody<'a> {
    /// `errors` is omitted entirely when there are no field errors
    pub fn new(message: &'a str, errors: &'a [FieldError]) -> Self {
        Self {
            success: false,
            message,
            errors: (!errors.is_empty()).then_some(errors),
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status)
            .unwrap_or(axum::http::StatusCode::OK);
        (status, axum::Json(self)).into_response()
    }
}
