//! Check Session Use Case
//!
//! Read paths over signature sessions. Expired records are lazily
//! deleted as a side effect of every check.

use std::sync::Arc;

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::public_key::Npub;
use crate::error::AuthResult;
use uuid::Uuid;

/// Check Session Use Case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Whether the session exists, is unexpired, and has been verified
    pub async fn is_verified(&self, session_id: Uuid) -> AuthResult<bool> {
        Ok(self
            .live_session(session_id)
            .await?
            .is_some_and(|s| s.verified))
    }

    /// The claimed public key, only for a live AND verified session
    ///
    /// This is the single read path other components may use to trust an
    /// identity claim.
    pub async fn public_key_for(&self, session_id: Uuid) -> AuthResult<Option<Npub>> {
        Ok(self
            .live_session(session_id)
            .await?
            .filter(|s| s.verified)
            .map(|s| s.public_key))
    }

    /// Explicit session teardown
    pub async fn close(&self, session_id: Uuid) -> AuthResult<()> {
        self.session_repo.delete(session_id).await?;
        tracing::info!(session_id = %session_id, "Session closed");
        Ok(())
    }

    /// Fetch a session, deleting it if expired (lazy cleanup)
    async fn live_session(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        match self.session_repo.get(session_id).await? {
            Some(session) if session.is_expired() => {
                self.session_repo.delete(session_id).await?;
                tracing::debug!(session_id = %session_id, "Expired session lazily deleted");
                Ok(None)
            }
            other => Ok(other),
        }
    }
}
