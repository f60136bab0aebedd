//! PoW Error Types
//!
//! This module provides PoW-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. HTTP conversion
//! happens at the admission surface; this crate only classifies.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// PoW-specific result type alias
pub type PowResult<T> = Result<T, PowError>;

/// PoW-specific error variants
///
/// Callers must be able to distinguish "retry with a new challenge"
/// (`ChallengeExpired`) from "retry the same challenge" (`InvalidProof`)
/// from "unknown token" (`InvalidToken`).
#[derive(Debug, Error)]
pub enum PowError {
    /// Token does not map to a live challenge (unknown or already consumed)
    #[error("Challenge token not found or already consumed")]
    InvalidToken,

    /// Challenge has expired (TTL exceeded)
    #[error("Challenge expired")]
    ChallengeExpired,

    /// Proof does not match the challenge or the difficulty target
    #[error("Invalid proof: hash does not match or does not meet difficulty")]
    InvalidProof,

    /// Record store unavailable (transient; the only retryable class)
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PowError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PowError::InvalidToken => ErrorKind::NotFound,
            PowError::ChallengeExpired => ErrorKind::Gone,
            PowError::InvalidProof => ErrorKind::Conflict,
            PowError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            PowError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PowError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "PoW record store error");
            }
            PowError::Internal(msg) => {
                tracing::error!(message = %msg, "PoW internal error");
            }
            PowError::InvalidProof => {
                tracing::warn!("PoW invalid proof attempt");
            }
            _ => {
                tracing::debug!(error = %self, "PoW error");
            }
        }
    }
}

impl From<PowError> for AppError {
    fn from(err: PowError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}
