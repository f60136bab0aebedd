//! UserPassword Value Object
//!
//! Wraps the stored Argon2id hash. The clear-text side lives in
//! `platform::password` and is zeroized on drop.

use platform::password::{self, PasswordHashError};

/// Re-export: validated clear-text password (zeroized on drop)
pub use platform::password::ClearTextPassword as RawPassword;

/// Stored password hash (PHC string format)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Hash a raw password with Argon2id
    pub fn from_raw(
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        password::hash_password(raw, pepper).map(Self)
    }

    /// Reconstruct from a stored PHC string
    pub fn from_phc_string(hash: String) -> Self {
        Self(hash)
    }

    /// Verify a raw password against this hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for a malformed
    /// stored hash.
    pub fn verify(
        &self,
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        password::verify_password(raw, &self.0, pepper)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_verify_roundtrip() {
        let raw = RawPassword::new("hunter2hunter2".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        assert!(hashed.verify(&raw, None).unwrap());

        let other = RawPassword::new("something else!".to_string()).unwrap();
        assert!(!hashed.verify(&other, None).unwrap());
    }

    #[test]
    fn test_hash_is_phc_format() {
        let raw = RawPassword::new("hunter2hunter2".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.as_str().starts_with("$argon2id$"));
    }
}
