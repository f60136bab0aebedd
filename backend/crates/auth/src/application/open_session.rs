//! Open Session Use Case

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::public_key::Npub;
use crate::error::AuthResult;
use uuid::Uuid;

/// Output DTO for open session
#[derive(Debug, Clone)]
pub struct OpenSessionOutput {
    pub session_id: Uuid,
    pub challenge: String,
    pub expires_at_ms: i64,
}

/// Open Session Use Case
pub struct OpenSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> OpenSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Open an unverified session for a claimed public key
    pub async fn execute(&self, public_key: Npub) -> AuthResult<OpenSessionOutput> {
        let session = AuthSession::new(public_key, self.config.session_ttl);

        self.session_repo.create(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            public_key = %session.public_key,
            "Auth session opened"
        );

        Ok(OpenSessionOutput {
            session_id: session.session_id,
            challenge: session.challenge,
            expires_at_ms: session.expires_at_ms,
        })
    }
}
