//! Domain Entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::services::get_target;

/// Challenge entity - a one-time PoW admission record
///
/// A token maps to at most one live challenge. The record is deleted on
/// successful redemption or on expiry detection; tokens are never reused.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// Opaque token the caller presents on redemption
    pub token: Uuid,
    /// Random nonce-source the client hashes against
    pub challenge: String,
    /// Required count of leading zero hex characters in the proof hash
    pub difficulty: u8,
    pub issued_at: DateTime<Utc>,
    pub expires_at_ms: i64,
}

impl Challenge {
    /// Create a new challenge with a fresh random token
    pub fn new(challenge: String, difficulty: u8, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4(),
            challenge,
            difficulty,
            issued_at: now,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
        }
    }

    /// Check if the challenge has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// The required hash prefix for this challenge
    pub fn target(&self) -> String {
        get_target(self.difficulty)
    }
}
