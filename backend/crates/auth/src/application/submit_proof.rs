//! Submit Proof Use Case
//!
//! Verifies a detached signature over a session's challenge string and
//! records the one-way verified transition.

use std::sync::Arc;

use crate::domain::repository::{AuthRepository, AuthSessionRepository};
use crate::domain::signature;
use crate::error::{AuthError, AuthResult};
use uuid::Uuid;

/// Submit Proof Use Case
pub struct SubmitProofUseCase<S, A>
where
    S: AuthSessionRepository,
    A: AuthRepository,
{
    session_repo: Arc<S>,
    auth_repo: Arc<A>,
}

impl<S, A> SubmitProofUseCase<S, A>
where
    S: AuthSessionRepository,
    A: AuthRepository,
{
    pub fn new(session_repo: Arc<S>, auth_repo: Arc<A>) -> Self {
        Self {
            session_repo,
            auth_repo,
        }
    }

    /// Verify a signature for a session
    ///
    /// Policy: a failed signature leaves the session in place so the
    /// client can retry until expiry.
    pub async fn execute(&self, session_id: Uuid, signature_bytes: &[u8]) -> AuthResult<()> {
        let session = self
            .session_repo
            .get(session_id)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Session expired at proof submission");
            return Err(AuthError::SessionExpired);
        }

        let primary_key = session.public_key.to_bytes()?;
        let message = session.challenge.as_bytes();

        let mut valid = signature::verify(&primary_key, message, signature_bytes)?;

        if !valid {
            // Compatibility fallback, tried only after the primary key's
            // cryptographic check failed: some clients derive their key
            // from a raw seed with a different (deterministic) routine
            // than the bech32-encoded key on file implies.
            valid = self
                .verify_with_seed_fallback(&session.public_key, message, signature_bytes)
                .await?;
        }

        if !valid {
            tracing::warn!(session_id = %session_id, "Invalid session signature");
            return Err(AuthError::InvalidSignature);
        }

        self.session_repo.mark_verified(session_id).await?;

        tracing::info!(
            session_id = %session_id,
            public_key = %session.public_key,
            "Session verified"
        );

        Ok(())
    }

    async fn verify_with_seed_fallback(
        &self,
        public_key: &crate::domain::value_object::public_key::Npub,
        message: &[u8],
        signature_bytes: &[u8],
    ) -> AuthResult<bool> {
        let Some(seed_hex) = self.auth_repo.find_raw_seed_by_public_key(public_key).await? else {
            return Ok(false);
        };

        let Some(seed) = signature::parse_seed_hex(&seed_hex) else {
            tracing::warn!(public_key = %public_key, "Stored raw seed is malformed; fallback skipped");
            return Ok(false);
        };

        let derived_key = signature::derive_from_seed(&seed);
        signature::verify(&derived_key, message, signature_bytes)
    }
}
