//! UserName Value Object
//!
//! Login and display name. Stored twice: the original form for display
//! and a canonical lowercase form for uniqueness and lookup.

use crate::error::{AuthError, AuthResult};

pub const MIN_USER_NAME_LENGTH: usize = 3;
pub const MAX_USER_NAME_LENGTH: usize = 32;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Validate and construct a user name
    ///
    /// Allowed: ASCII alphanumerics, `_`, `-`, `.`; must start with an
    /// alphanumeric; length 3..=32.
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let original = raw.into();
        let len = original.chars().count();

        if len < MIN_USER_NAME_LENGTH {
            return Err(AuthError::UserNameValidation(format!(
                "must be at least {MIN_USER_NAME_LENGTH} characters"
            )));
        }
        if len > MAX_USER_NAME_LENGTH {
            return Err(AuthError::UserNameValidation(format!(
                "must be at most {MAX_USER_NAME_LENGTH} characters"
            )));
        }
        if !original
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            return Err(AuthError::UserNameValidation(
                "must start with a letter or digit".to_string(),
            ));
        }
        if !original
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(AuthError::UserNameValidation(
                "contains an invalid character".to_string(),
            ));
        }

        let canonical = original.to_ascii_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Reconstruct from trusted storage without re-validation
    pub fn from_stored(original: String) -> Self {
        let canonical = original.to_ascii_lowercase();
        Self {
            original,
            canonical,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for uniqueness and lookup
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("a1c").is_ok());
        assert!(UserName::new("alice.bob_cd-e").is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("x".repeat(33)).is_err());
        assert!(UserName::new("x".repeat(32)).is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(UserName::new("_leading").is_err());
        assert!(UserName::new("has space").is_err());
        assert!(UserName::new("emoji🦀").is_err());
    }

    #[test]
    fn test_canonical_is_lowercase() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.original(), "Alice");
        assert_eq!(name.canonical(), "alice");
    }
}
