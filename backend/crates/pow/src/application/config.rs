//! Application Configuration

use std::time::Duration;

use crate::domain::value_objects::Difficulty;

/// PoW application configuration
#[derive(Debug, Clone)]
pub struct PowConfig {
    /// Random bytes backing the challenge string (hex-encoded on the wire)
    pub challenge_bytes_len: usize,
    /// Default difficulty in leading zero hex characters
    pub difficulty: Difficulty,
    /// Challenge TTL (6 minutes)
    pub challenge_ttl: Duration,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            challenge_bytes_len: 32,
            difficulty: Difficulty::DEFAULT,
            challenge_ttl: Duration::from_secs(360),
        }
    }
}

impl PowConfig {
    pub fn challenge_ttl_ms(&self) -> i64 {
        self.challenge_ttl.as_millis() as i64
    }
}
