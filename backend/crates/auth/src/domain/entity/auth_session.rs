//! Auth Session Entity
//!
//! A signature challenge-response session. The client proves control of
//! the private key behind a claimed public identity by signing the
//! session's challenge string.

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::value_object::public_key::Npub;

/// Prefix of every session challenge string
pub const CHALLENGE_PREFIX: &str = "auth-challenge:";

/// Auth session entity
///
/// `verified` transitions false → true at most once, only after a
/// successful signature check. An expired session is inert regardless of
/// its flag and is deleted on next access.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Claimed identity, stored in encoded (bech32) form
    pub public_key: Npub,
    /// Challenge string the client must sign
    pub challenge: String,
    /// Whether a valid signature has been submitted
    pub verified: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
}

impl AuthSession {
    /// Create a new unverified session
    ///
    /// The challenge string is derived from the session id, so a
    /// signature over it cannot be replayed against another session.
    pub fn new(public_key: Npub, ttl: Duration) -> Self {
        let now = Utc::now();
        let session_id = Uuid::new_v4();

        Self {
            session_id,
            public_key,
            challenge: format!("{CHALLENGE_PREFIX}{session_id}"),
            verified: false,
            created_at: now,
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Record a successful signature check (one-way)
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npub() -> Npub {
        Npub::from_bytes(&[1u8; 32]).unwrap()
    }

    #[test]
    fn test_challenge_binds_to_session_id() {
        let session = AuthSession::new(npub(), Duration::from_secs(3600));
        assert_eq!(
            session.challenge,
            format!("auth-challenge:{}", session.session_id)
        );
    }

    #[test]
    fn test_new_session_is_unverified_and_live() {
        let session = AuthSession::new(npub(), Duration::from_secs(3600));
        assert!(!session.verified);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_mark_verified_is_one_way() {
        let mut session = AuthSession::new(npub(), Duration::from_secs(3600));
        session.mark_verified();
        assert!(session.verified);
        session.mark_verified();
        assert!(session.verified);
    }
}
