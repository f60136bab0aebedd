//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. The taxonomy keeps
//! "retry with a new challenge" (expired), "retry the same challenge"
//! (invalid signature), and "fatal" (malformed key) distinguishable.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use pow::PowError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Session id does not map to a live session
    #[error("Session not found")]
    SessionNotFound,

    /// Session has expired (TTL exceeded)
    #[error("Session expired")]
    SessionExpired,

    /// Signature does not verify against the session challenge
    #[error("Signature verification failed")]
    InvalidSignature,

    /// Public key failed to decode or has the wrong length
    #[error("Malformed public key")]
    MalformedKey,

    /// Bearer credential signature mismatch or malformed structure
    #[error("Credential invalid")]
    TokenInvalid,

    /// Bearer credential expiry claim has elapsed
    #[error("Credential expired")]
    TokenExpired,

    /// Invalid credentials (unknown user or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account is not active
    #[error("Account is disabled")]
    AccountDisabled,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// User name validation error
    #[error("User name validation failed: {0}")]
    UserNameValidation(String),

    /// PoW admission error (registration path)
    #[error(transparent)]
    Pow(#[from] PowError),

    /// Record store unavailable (transient; the only retryable class)
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionNotFound | AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::SessionExpired => ErrorKind::Gone,
            AuthError::InvalidSignature
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::AccountDisabled => ErrorKind::Forbidden,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::MalformedKey
            | AuthError::PasswordValidation(_)
            | AuthError::UserNameValidation(_) => ErrorKind::BadRequest,
            AuthError::Pow(e) => e.kind(),
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Auth record store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSignature => {
                tracing::warn!("Signature verification failed");
            }
            AuthError::Pow(e) => e.log(),
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
