//! # API Error Type
//!
//! Unified error type for the shop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Front end                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  POST /cart/items                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler → Result<Json<T>, ApiError>                     │  │
//! │  │         │                                                        │  │
//! │  │  ValidationError ──┐                                             │  │
//! │  │  CoreError ────────┴──► ApiError { code, message } + status ───►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use scalecars_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// This is what the front end receives when a command fails:
/// ```json
/// {
///   "code": "AUTHENTICATION_FAILED",
///   "message": "Authentication failed: invalid username or password"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Wrong username/password (401)
    AuthenticationFailed,

    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Quantity below one or past the line maximum (400)
    InvalidQuantity,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::InvalidQuantity => StatusCode::BAD_REQUEST,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed => {
                ApiError::new(ErrorCode::AuthenticationFailed, err.to_string())
            }
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::LineNotFound(id) => ApiError::not_found("Cart line", id),
            CoreError::InvalidQuantity(_) | CoreError::QuantityOverflow(_) => {
                ApiError::new(ErrorCode::InvalidQuantity, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = ?self.code, message = %self.message, "request failed");
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
