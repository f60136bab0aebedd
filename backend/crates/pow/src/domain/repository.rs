//! Repository Traits
//!
//! The Record Store contract the challenge registry needs: point lookup
//! by token, insert, delete, and an atomic consume. Implementations are
//! in the infrastructure layer.

use crate::domain::entities::Challenge;
use crate::error::PowResult;
use uuid::Uuid;

/// Challenge repository trait
#[trait_variant::make(ChallengeRepository: Send)]
pub trait LocalChallengeRepository {
    /// Persist a newly issued challenge, keyed by its token
    async fn put(&self, challenge: &Challenge) -> PowResult<()>;

    /// Point lookup by token; expiry is the caller's concern
    async fn get(&self, token: Uuid) -> PowResult<Option<Challenge>>;

    /// Unconditional delete (lazy expiry cleanup)
    async fn delete(&self, token: Uuid) -> PowResult<()>;

    /// Atomically consume an unexpired challenge
    ///
    /// Returns true iff this caller removed the record. Two concurrent
    /// redemption attempts for the same token must not both see true.
    async fn consume(&self, token: Uuid) -> PowResult<bool>;
}
