//! Centralized error handling.
//!
//! Provides a unified error type for the entire application, with automatic
//! HTTP response conversion into the standard error envelope:
//!
//! ```json
//! {
//!   "timestamp": "2019-06-20T19:53:07Z",
//!   "status": 404,
//!   "error": "Resource not found",
//!   "message": "Resource not found. Id 7",
//!   "path": "/users/7"
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{
    ERROR_LABEL_DATABASE, ERROR_LABEL_INTERNAL, ERROR_LABEL_NOT_FOUND, ERROR_LABEL_ORDER_STATUS,
    ERROR_LABEL_VALIDATION,
};
use crate::types::timestamp;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup by id found nothing
    #[error("Resource not found. Id {0}")]
    NotFound(i32),

    /// Write rejected by a referential or uniqueness constraint
    #[error("{0}")]
    Integrity(String),

    #[error("{0}")]
    Validation(String),

    /// Status code outside WAITING_PAYMENT..=CANCELED
    #[error("Invalid order status code: {0}")]
    InvalidOrderStatus(i32),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Integrity(_)
            | AppError::Validation(_)
            | AppError::InvalidOrderStatus(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label carried in the `error` field of the envelope
    pub fn label(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => ERROR_LABEL_NOT_FOUND,
            AppError::Integrity(_) => ERROR_LABEL_DATABASE,
            AppError::Validation(_) => ERROR_LABEL_VALIDATION,
            AppError::InvalidOrderStatus(_) => ERROR_LABEL_ORDER_STATUS,
            AppError::Database(_) | AppError::Internal(_) => ERROR_LABEL_INTERNAL,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Classify a failed write.
    ///
    /// Foreign-key and uniqueness violations become [`AppError::Integrity`]
    /// carrying `message`; anything else stays a database error.
    pub fn from_write(err: DbErr, message: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail))
            | Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(%detail, "write rejected by constraint");
                AppError::Integrity(message())
            }
            _ => AppError::Database(err),
        }
    }
}

/// Convenience constructors
impl AppError {
    pub fn integrity(msg: impl Into<String>) -> Self {
        AppError::Integrity(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Wire-level error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandardError {
    #[serde(serialize_with = "timestamp::serialize")]
    #[schema(value_type = String, example = "2019-07-22T15:21:22Z")]
    pub timestamp: DateTime<Utc>,
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Resource not found")]
    pub error: String,
    #[schema(example = "Resource not found. Id 7")]
    pub message: String,
    #[schema(example = "/users/7")]
    pub path: String,
}

/// Rendered error, kept in the response extensions so the envelope
/// middleware can stamp the request path onto it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ErrorReport {
    /// Build the envelope for a request path
    pub fn envelope(&self, path: impl Into<String>) -> StandardError {
        StandardError {
            timestamp: Utc::now(),
            status: self.status.as_u16(),
            error: self.error.to_string(),
            message: self.message.clone(),
            path: path.into(),
        }
    }

    /// Render the envelope as an HTTP response, keeping the report attached
    pub fn render(self, path: impl Into<String>) -> Response {
        let body = self.envelope(path);
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl From<&AppError> for ErrorReport {
    fn from(error: &AppError) -> Self {
        Self {
            status: error.status(),
            error: error.label(),
            message: error.user_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Path is filled in by `error_envelope`; a bare response keeps it empty.
        ErrorReport::from(&self).render(String::new())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: i32) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: i32) -> AppResult<T> {
        self.ok_or(AppError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_with_id_in_message() {
        let err = AppError::NotFound(42);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.label(), "Resource not found");
        assert_eq!(err.user_message(), "Resource not found. Id 42");
    }

    #[test]
    fn test_integrity_maps_to_400() {
        let err = AppError::integrity("Cannot delete user 1: it is still referenced by orders");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.label(), "Database error");
        assert!(err.user_message().contains("still referenced"));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = AppError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn test_from_write_keeps_unclassified_errors() {
        let err = AppError::from_write(DbErr::Custom("boom".to_string()), || {
            "unused".to_string()
        });
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_into_response_attaches_report() {
        let response = AppError::NotFound(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.error, "Resource not found");
        assert_eq!(report.message, "Resource not found. Id 3");
    }

    #[test]
    fn test_envelope_fields() {
        let report = ErrorReport::from(&AppError::InvalidOrderStatus(9));
        let envelope = report.envelope("/orders/1");

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.error, "Invalid order status");
        assert_eq!(envelope.message, "Invalid order status code: 9");
        assert_eq!(envelope.path, "/orders/1");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(5), Err(AppError::NotFound(5))));
        assert_eq!(Some(1u8).ok_or_not_found(5).unwrap(), 1);
    }
}
