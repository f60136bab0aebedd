//! In-Memory Repository Implementation
//!
//! Mutex-guarded map keyed by token. Backs unit tests and local
//! development without a database; the per-key atomicity contract is
//! provided by holding the lock across the conditional removal.

use crate::domain::entities::Challenge;
use crate::domain::repository::ChallengeRepository;
use crate::error::PowResult;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory challenge store
#[derive(Clone, Default)]
pub struct InMemoryChallengeStore {
    inner: Arc<Mutex<HashMap<Uuid, Challenge>>>,
}

impl InMemoryChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records (test helper)
    pub fn len(&self) -> usize {
        self.inner.lock().expect("challenge store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChallengeRepository for InMemoryChallengeStore {
    async fn put(&self, challenge: &Challenge) -> PowResult<()> {
        self.inner
            .lock()
            .expect("challenge store lock poisoned")
            .insert(challenge.token, challenge.clone());
        Ok(())
    }

    async fn get(&self, token: Uuid) -> PowResult<Option<Challenge>> {
        Ok(self
            .inner
            .lock()
            .expect("challenge store lock poisoned")
            .get(&token)
            .cloned())
    }

    async fn delete(&self, token: Uuid) -> PowResult<()> {
        self.inner
            .lock()
            .expect("challenge store lock poisoned")
            .remove(&token);
        Ok(())
    }

    async fn consume(&self, token: Uuid) -> PowResult<bool> {
        let now_ms = Utc::now().timestamp_millis();
        let mut guard = self.inner.lock().expect("challenge store lock poisoned");
        match guard.get(&token) {
            Some(challenge) if challenge.expires_at_ms > now_ms => {
                guard.remove(&token);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
