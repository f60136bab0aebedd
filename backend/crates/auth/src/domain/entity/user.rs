//! User Entity
//!
//! Core account entity containing non-sensitive data.
//! Sensitive auth material is in the Auth entity.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    public_id::PublicId, public_key::Npub, user_id::UserId, user_name::UserName,
    user_status::UserStatus,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe); credential subject
    pub public_id: PublicId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Claimed public identity on the event network, if linked
    pub public_key: Option<Npub>,
    /// Status (Pending, Active, Disabled)
    pub user_status: UserStatus,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new (not yet activated) user
    pub fn new(user_name: UserName, public_key: Option<Npub>) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            user_name,
            public_key,
            user_status: UserStatus::Pending,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Activate the account after admission succeeded
    pub fn activate(&mut self) {
        self.user_status = UserStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.user_status.can_login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_pending() {
        let user = User::new(UserName::new("alice").unwrap(), None);
        assert_eq!(user.user_status, UserStatus::Pending);
        assert!(!user.can_login());
    }

    #[test]
    fn test_activation_enables_login() {
        let mut user = User::new(UserName::new("alice").unwrap(), None);
        user.activate();
        assert_eq!(user.user_status, UserStatus::Active);
        assert!(user.can_login());
    }
}
