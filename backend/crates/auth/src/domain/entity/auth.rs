//! Auth Entity
//!
//! Authentication material for a user.
//! Separated from the User entity to isolate sensitive data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Auth credentials entity
///
/// `raw_seed` is the optional 32-byte Ed25519 seed (hex) some clients
/// registered with; it exists only to serve the compatibility fallback
/// during signature verification and must never leave this entity.
#[derive(Debug, Clone)]
pub struct Auth {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Raw signing seed (hex) for clients on the alternate key derivation
    pub raw_seed: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Auth {
    /// Create new auth credentials
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            raw_seed: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a raw signing seed (registration from a seed-deriving client)
    pub fn with_raw_seed(mut self, raw_seed: Option<String>) -> Self {
        self.raw_seed = raw_seed;
        self
    }
}
