//! Redeem Challenge Use Case

use crate::domain::repository::ChallengeRepository;
use crate::domain::services::verify_proof;
use crate::error::{PowError, PowResult};
use std::sync::Arc;
use uuid::Uuid;

/// Input DTO for challenge redemption
///
/// Proof fields arrive from the wire and may be missing; a missing field
/// is an invalid proof, never a panic.
#[derive(Debug, Clone)]
pub struct RedeemChallengeInput {
    pub token: Uuid,
    pub nonce: Option<String>,
    pub hash: Option<String>,
}

/// Redeem Challenge Use Case
pub struct RedeemChallengeUseCase<C>
where
    C: ChallengeRepository,
{
    repo: Arc<C>,
}

impl<C> RedeemChallengeUseCase<C>
where
    C: ChallengeRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    /// Redeem a challenge with a candidate proof
    ///
    /// Policy: a failed proof leaves the challenge in place so the client
    /// can retry until expiry. Only success or expiry removes the record.
    /// The stored difficulty is authoritative; callers cannot lower it.
    pub async fn execute(&self, input: RedeemChallengeInput) -> PowResult<()> {
        let challenge = self
            .repo
            .get(input.token)
            .await?
            .ok_or(PowError::InvalidToken)?;

        if challenge.is_expired() {
            self.repo.delete(input.token).await?;
            tracing::debug!(token = %input.token, "Challenge expired at redemption");
            return Err(PowError::ChallengeExpired);
        }

        let (nonce, hash) = match (&input.nonce, &input.hash) {
            (Some(nonce), Some(hash)) => (nonce.as_str(), hash.as_str()),
            _ => return Err(PowError::InvalidProof),
        };

        if !verify_proof(&challenge.challenge, nonce, hash, challenge.difficulty) {
            tracing::warn!(token = %input.token, "Invalid proof submitted");
            return Err(PowError::InvalidProof);
        }

        // At-most-once admission: the consume is conditional, so a lost
        // race against a concurrent redeemer surfaces as InvalidToken.
        if !self.repo.consume(input.token).await? {
            return Err(PowError::InvalidToken);
        }

        tracing::info!(token = %input.token, "Challenge redeemed");
        Ok(())
    }
}
