//! User Status Value Object
//!
//! Intentionally kept simple with only 3 states:
//! - **Pending**: created but not yet admitted (registration in flight)
//! - **Active**: normal, fully functional account
//! - **Disabled**: cannot login

use serde::{Deserialize, Serialize};

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserStatus {
    /// Created but not activated yet
    #[default]
    Pending = 0,

    /// Normal active account - can login and use all features
    Active = 1,

    /// Disabled account - cannot login
    Disabled = 2,
}

impl UserStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    /// Check if login is allowed
    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Restore from a stored numeric ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_can_login() {
        assert!(!UserStatus::Pending.can_login());
        assert!(UserStatus::Active.can_login());
        assert!(!UserStatus::Disabled.can_login());
    }

    #[test]
    fn test_id_roundtrip() {
        for status in [UserStatus::Pending, UserStatus::Active, UserStatus::Disabled] {
            assert_eq!(UserStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(UserStatus::from_id(99), None);
    }
}
