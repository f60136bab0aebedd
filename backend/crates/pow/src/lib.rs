//! PoW (Proof of Work) Admission Module
//!
//! Clean Architecture structure:
//! - `domain/` - Challenge entity, verification logic, repository traits
//! - `application/` - Use cases (issue, redeem)
//! - `infra/` - Record store implementations (Postgres, in-memory)
//!
//! ## Security Model
//! - Backend is the sole authority for challenge generation, difficulty, TTL, and verification
//! - Challenge consumption is atomic (no double-spend)
//! - A failed proof leaves the challenge in place; retries are allowed until expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::PowConfig;
pub use application::issue_challenge::{IssueChallengeOutput, IssueChallengeUseCase};
pub use application::redeem_challenge::{RedeemChallengeInput, RedeemChallengeUseCase};
pub use domain::repository::ChallengeRepository;
pub use domain::services::{compute_proof_hash, get_target, verify_proof};
pub use error::{PowError, PowResult};
pub use infra::memory::InMemoryChallengeStore;
pub use infra::postgres::PgChallengeStore;

#[cfg(test)]
mod tests;
