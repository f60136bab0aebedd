//! Issue Challenge Use Case

use crate::application::config::PowConfig;
use crate::domain::entities::Challenge;
use crate::domain::repository::ChallengeRepository;
use crate::domain::value_objects::Difficulty;
use crate::error::PowResult;
use platform::crypto::random_hex;
use std::sync::Arc;
use uuid::Uuid;

/// Output DTO for issue challenge
#[derive(Debug, Clone)]
pub struct IssueChallengeOutput {
    pub token: Uuid,
    pub challenge: String,
    pub difficulty: u8,
    pub target: String,
    pub expires_at_ms: i64,
}

/// Issue Challenge Use Case
pub struct IssueChallengeUseCase<C>
where
    C: ChallengeRepository,
{
    repo: Arc<C>,
    config: Arc<PowConfig>,
}

impl<C> IssueChallengeUseCase<C>
where
    C: ChallengeRepository,
{
    pub fn new(repo: Arc<C>, config: Arc<PowConfig>) -> Self {
        Self { repo, config }
    }

    /// Issue a new one-time challenge
    ///
    /// The token and challenge string are independent random values; the
    /// token keys the record, the challenge string is what the client
    /// mines against.
    pub async fn execute(&self, difficulty: Difficulty) -> PowResult<IssueChallengeOutput> {
        let challenge_string = random_hex(self.config.challenge_bytes_len);
        let challenge = Challenge::new(
            challenge_string,
            difficulty.chars(),
            self.config.challenge_ttl_ms(),
        );

        self.repo.put(&challenge).await?;

        tracing::info!(
            token = %challenge.token,
            difficulty = challenge.difficulty,
            "Issued challenge"
        );

        Ok(IssueChallengeOutput {
            token: challenge.token,
            target: challenge.target(),
            difficulty: challenge.difficulty,
            expires_at_ms: challenge.expires_at_ms,
            challenge: challenge.challenge,
        })
    }
}
