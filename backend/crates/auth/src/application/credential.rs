//! Credential Service
//!
//! Issues and validates stateless bearer credentials: HS256-signed
//! claims carrying the subject identity and an absolute expiry. No
//! server-side record backs a credential; validity is signature + expiry
//! (the account-active check happens at the facade, which owns the user
//! store).

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Credential claims (deterministic format shared across instances)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialClaims {
    /// Subject identity (the account's public id)
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiration time (seconds since epoch)
    pub exp: i64,
}

/// Bearer credential issue/validate service
#[derive(Clone)]
pub struct CredentialService {
    secret: Vec<u8>,
    default_ttl: Duration,
}

impl CredentialService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.credential_secret.clone(),
            default_ttl: config.credential_ttl,
        }
    }

    /// Issue a signed credential for a subject with an explicit TTL
    pub fn issue(&self, subject: &str, ttl: Duration) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = CredentialClaims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AuthError::Internal(format!("Credential encoding failed: {e}")))
    }

    /// Issue with the configured default TTL
    pub fn issue_default(&self, subject: &str) -> AuthResult<String> {
        self.issue(subject, self.default_ttl)
    }

    /// Validate a credential and return its subject
    ///
    /// The expiry check is ours, with zero leeway: a credential issued
    /// with `ttl = 0` is already expired. Signature or structural
    /// problems are `TokenInvalid`; an elapsed expiry is `TokenExpired`.
    pub fn validate(&self, token: &str) -> AuthResult<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<CredentialClaims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(|_| AuthError::TokenInvalid)?;

        if Utc::now().timestamp() >= data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CredentialService {
        CredentialService::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_validate_roundtrip() {
        let service = service();
        let token = service
            .issue("subject-1", Duration::from_secs(60))
            .unwrap();
        assert_eq!(service.validate(&token).unwrap(), "subject-1");
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let service = service();
        let token = service.issue("subject-1", Duration::ZERO).unwrap();
        assert!(matches!(
            service.validate(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let service = service();
        let token = service
            .issue("subject-1", Duration::from_secs(60))
            .unwrap();

        // Flip a character in the payload segment
        let mut chars: Vec<char> = token.chars().collect();
        let mid = token.find('.').unwrap() + 2;
        chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(matches!(
            service.validate(&tampered),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_foreign_secret_is_invalid() {
        let token = service()
            .issue("subject-1", Duration::from_secs(60))
            .unwrap();
        let other = service();
        assert!(matches!(
            other.validate(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_shared_secret_validates_across_instances() {
        let config = AuthConfig::with_random_secret();
        let issuer = CredentialService::new(&config);
        let validator = CredentialService::new(&config);

        let token = issuer.issue("subject-1", Duration::from_secs(60)).unwrap();
        assert_eq!(validator.validate(&token).unwrap(), "subject-1");
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            service().validate("not-a-token"),
            Err(AuthError::TokenInvalid)
        ));
    }
}
