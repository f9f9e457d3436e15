//! API error envelope.
//!
//! Every failure leaves the service as
//! `{"success": false, "error": <code>, "message": <text>}`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::booking::BookingError;
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ErrorCode;
use crate::domain::pricing::QuoteError;

/// Wire body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        code: &'static str,
        message: String,
    },
    NotFound {
        code: &'static str,
        message: String,
    },
    /// `message` goes to the client; `detail` only to the log.
    Internal {
        code: &'static str,
        message: String,
        detail: String,
    },
    /// The request ran past the configured timeout.
    RequestTimeout,
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: "invalid_input",
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn server_error(detail: impl Into<String>) -> Self {
        ApiError::Internal {
            code: "server_error",
            message: "Internal server error".to_string(),
            detail: detail.into(),
        }
    }

    /// Maps a catalog failure; store errors are reported under `fetch_code`.
    pub fn from_catalog(err: CatalogError, fetch_code: &'static str, fetch_message: &str) -> Self {
        match err {
            CatalogError::AccommodationNotFound(_) => {
                ApiError::not_found("accommodation_not_found", err.to_string())
            }
            CatalogError::ActivityNotFound(_) => {
                ApiError::not_found("activity_not_found", err.to_string())
            }
            CatalogError::Infrastructure(detail) => ApiError::Internal {
                code: fetch_code,
                message: fetch_message.to_string(),
                detail,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Internal { code, .. } => code,
            ApiError::RequestTimeout => "request_timeout",
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        let code = match &err {
            QuoteError::InvalidPackage(_) => "invalid_package",
            // A quote names the accommodation in its body, so this is a bad
            // request rather than a missing resource.
            QuoteError::AccommodationNotFound(_) => "accommodation_not_found",
            QuoteError::InvalidInput(_) | QuoteError::AmountOutOfRange => "invalid_input",
            QuoteError::Infrastructure(detail) => return ApiError::server_error(detail.clone()),
        };
        ApiError::BadRequest {
            code,
            message: err.to_string(),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        let message = err.message();
        match err.code() {
            ErrorCode::ValidationFailed => ApiError::invalid_input(message),
            ErrorCode::BookingNotFound => ApiError::not_found("booking_not_found", message),
            ErrorCode::InvalidStatus => ApiError::BadRequest {
                code: "invalid_status",
                message,
            },
            ErrorCode::InvalidStateTransition => ApiError::BadRequest {
                code: "invalid_status_transition",
                message,
            },
            ErrorCode::DatabaseError => ApiError::server_error(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_input(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_input(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            ApiError::NotFound { code, message } => (StatusCode::NOT_FOUND, code, message),
            ApiError::Internal {
                code,
                message,
                detail,
            } => {
                tracing::error!(error.code = code, error.detail = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, code, message)
            }
            ApiError::RequestTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                "request_timeout",
                "Request timed out".to_string(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: code,
            message,
        };
        (status, Json(body)).into_response()
    }
}
