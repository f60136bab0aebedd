//! In-Memory Repository Implementation
//!
//! Mutex-guarded maps backing unit tests and local development without
//! a database. Mirrors the Postgres implementation's conditional
//! mutations so the concurrency contract holds under test.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entity::{auth::Auth, auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    public_id::PublicId, public_key::Npub, user_id::UserId, user_name::UserName,
};
use crate::error::AuthResult;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, Auth>,
    sessions: HashMap<Uuid, AuthSession>,
}

/// In-memory auth store
#[derive(Clone, Default)]
pub struct InMemoryAuthStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (test helper)
    pub fn session_count(&self) -> usize {
        self.inner.lock().expect("auth store lock poisoned").sessions.len()
    }
}

impl UserRepository for InMemoryAuthStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.inner
            .lock()
            .expect("auth store lock poisoned")
            .users
            .insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .users
            .values()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .users
            .values()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> AuthResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .users
            .values()
            .find(|u| u.public_id == *public_id)
            .cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        self.inner
            .lock()
            .expect("auth store lock poisoned")
            .users
            .insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }
}

impl AuthRepository for InMemoryAuthStore {
    async fn create(&self, auth: &Auth) -> AuthResult<()> {
        self.inner
            .lock()
            .expect("auth store lock poisoned")
            .credentials
            .insert(*auth.user_id.as_uuid(), auth.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Auth>> {
        Ok(self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .credentials
            .get(user_id.as_uuid())
            .cloned())
    }

    async fn find_raw_seed_by_public_key(&self, public_key: &Npub) -> AuthResult<Option<String>> {
        let guard = self.inner.lock().expect("auth store lock poisoned");
        let user = guard
            .users
            .values()
            .find(|u| u.public_key.as_ref() == Some(public_key));

        Ok(user
            .and_then(|u| guard.credentials.get(u.user_id.as_uuid()))
            .and_then(|a| a.raw_seed.clone()))
    }
}

impl AuthSessionRepository for InMemoryAuthStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.inner
            .lock()
            .expect("auth store lock poisoned")
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn get(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .sessions
            .get(&session_id)
            .cloned())
    }

    async fn mark_verified(&self, session_id: Uuid) -> AuthResult<()> {
        let now_ms = Utc::now().timestamp_millis();
        if let Some(session) = self
            .inner
            .lock()
            .expect("auth store lock poisoned")
            .sessions
            .get_mut(&session_id)
        {
            if session.expires_at_ms > now_ms {
                session.mark_verified();
            }
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.inner
            .lock()
            .expect("auth store lock poisoned")
            .sessions
            .remove(&session_id);
        Ok(())
    }
}
