//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! HTML routes reuse [`ApiError::status`] and [`ApiError::public_message`]
//! to render the error page instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use agronomist_core::AgronomistError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Unknown dropdown value or malformed input (400)
    Validation(AgronomistError),

    /// Page or form not found (404)
    NotFound { resource: &'static str, id: String },

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Message safe to show to the client. Internal details are logged instead.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                "an internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.code(),
            "message": self.public_message()
        });

        (self.status(), Json(body)).into_response()
    }
}

impl From<AgronomistError> for ApiError {
    fn from(e: AgronomistError) -> Self {
        match e {
            AgronomistError::UnknownPage { value } => Self::NotFound {
                resource: "page",
                id: value,
            },
            e if e.is_input_error() => Self::Validation(e),
            e => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}
