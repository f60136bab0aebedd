//! Application Configuration

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signature session TTL (1 hour)
    pub session_ttl: Duration,
    /// Bearer credential TTL (30 minutes)
    pub credential_ttl: Duration,
    /// Credential signing secret (HS256)
    ///
    /// Process-wide and read-only after initialization; every instance
    /// sharing it validates every other instance's tokens.
    pub credential_secret: Vec<u8>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(3600),
            credential_ttl: Duration::from_secs(30 * 60),
            credential_secret: vec![0u8; 32],
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random credential secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            credential_secret: secret,
            ..Default::default()
        }
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.credential_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn test_with_random_secret() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.credential_secret, b.credential_secret);
        assert!(a.credential_secret.iter().any(|&byte| byte != 0));
    }
}
