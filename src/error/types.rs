//! API Error Types
//!
//! This module defines the error type used across HTTP handlers and the
//! mapping from each error class to an HTTP status code and client-visible
//! message.
//!
//! # Error Categories
//!
//! - **Validation** - Client input failed a validator (400). The message
//!   names the specific field and rule that was violated.
//! - **Conflict** - Duplicate email on registration (409).
//! - **Unauthorized** - Bad credentials or a missing/invalid/expired token
//!   (401). Bad-credential failures collapse "email not found" and "wrong
//!   password" into one message to prevent account enumeration.
//! - **NotFound** - A valid token references a user that no longer exists (404).
//! - **Database / Hash / Token** - Infrastructure failures (500). The detail
//!   is logged server-side; clients only ever see a generic message so that
//!   schema or library internals cannot leak through error bodies.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by API handlers
///
/// Infrastructure variants (`Database`, `Hash`, `Token`) carry the underlying
/// error for logging but are never echoed verbatim to clients; see
/// [`ApiError::client_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed validation (400)
    #[error("validation failed for {field}: {message}")]
    Validation {
        /// Name of the offending request field
        field: &'static str,
        /// Human-readable rule description
        message: String,
    },

    /// Duplicate email on registration (409)
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or missing/invalid/expired token (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced record no longer exists (404)
    #[error("{0}")]
    NotFound(String),

    /// Database transport or constraint failure (500)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure (500)
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuance failure (500)
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Build a validation error for a named request field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The uniform 401 returned for bad login credentials
    ///
    /// "Email not found" and "wrong password" must not be distinguishable.
    pub fn bad_credentials() -> Self {
        Self::Unauthorized("Invalid email or password".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message safe to return to the client
    ///
    /// Internal failures all map to the same generic string; the underlying
    /// error is only ever written to the server log.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Conflict(message) => message.clone(),
            Self::Unauthorized(message) => message.clone(),
            Self::NotFound(message) => message.clone(),
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Whether the underlying sqlx error is a unique-constraint violation
    ///
    /// The signup handler uses this to treat the `users.email` constraint as
    /// the authoritative duplicate signal, closing the check-then-insert race.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("email", "Invalid email format");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.client_message(), "Invalid email format");
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Conflict("Email already registered".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::bad_credentials().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("User not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_are_not_echoed() {
        let error = ApiError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(error.client_message(), "Internal server error");
        // The Display impl keeps the detail for logging.
        assert!(error.to_string().contains("database error"));
    }

    #[test]
    fn test_bad_credentials_message_is_uniform() {
        let a = ApiError::bad_credentials();
        let b = ApiError::bad_credentials();
        assert_eq!(a.client_message(), b.client_message());
    }
}
