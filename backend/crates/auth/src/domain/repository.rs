//! Repository Traits
//!
//! The Record Store and account store contracts the admission core
//! needs. Implementations are in the infrastructure layer.

use crate::domain::entity::{auth::Auth, auth_session::AuthSession, user::User};
use crate::domain::value_object::{
    public_id::PublicId, public_key::Npub, user_id::UserId, user_name::UserName,
};
use crate::error::AuthResult;
use uuid::Uuid;

/// User (account) repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Check if user name exists (canonical form)
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Find user by user name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Find user by public ID (credential subjects)
    async fn find_by_public_id(&self, public_id: &PublicId) -> AuthResult<Option<User>>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Auth credentials repository trait
#[trait_variant::make(AuthRepository: Send)]
pub trait LocalAuthRepository {
    /// Create auth credentials
    async fn create(&self, auth: &Auth) -> AuthResult<()>;

    /// Find auth by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Auth>>;

    /// Stored raw seed (hex) for the identity, if any
    ///
    /// Only the signature-fallback path reads this.
    async fn find_raw_seed_by_public_key(&self, public_key: &Npub) -> AuthResult<Option<String>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Point lookup by session id; expiry is the caller's concern
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Persist the one-way verified transition
    ///
    /// Must be conditional on the session still being unexpired so a
    /// concurrent expiry sweep cannot resurrect a dead session.
    async fn mark_verified(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete a session (lazy expiry or explicit teardown)
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;
}
