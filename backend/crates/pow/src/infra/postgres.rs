//! PostgreSQL Repository Implementation

use crate::domain::entities::Challenge;
use crate::domain::repository::ChallengeRepository;
use crate::error::PowResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed challenge store
#[derive(Clone)]
pub struct PgChallengeStore {
    pool: PgPool,
}

impl PgChallengeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sweep expired challenges
    ///
    /// Optional optimization: every read path re-checks expiry, so the
    /// sweep only reclaims storage.
    pub async fn cleanup_expired(&self) -> PowResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM pow_challenges WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(challenges_deleted = deleted, "Cleaned up expired challenges");

        Ok(deleted)
    }
}

impl ChallengeRepository for PgChallengeStore {
    async fn put(&self, challenge: &Challenge) -> PowResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pow_challenges (
                token,
                challenge,
                difficulty,
                issued_at,
                expires_at_ms
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(challenge.token)
        .bind(&challenge.challenge)
        .bind(challenge.difficulty as i16)
        .bind(challenge.issued_at)
        .bind(challenge.expires_at_ms)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            token = %challenge.token,
            difficulty = challenge.difficulty,
            "Challenge created"
        );

        Ok(())
    }

    async fn get(&self, token: Uuid) -> PowResult<Option<Challenge>> {
        let row = sqlx::query_as::<_, ChallengeRow>(
            r#"
            SELECT token, challenge, difficulty, issued_at, expires_at_ms
            FROM pow_challenges
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChallengeRow::into_challenge))
    }

    async fn delete(&self, token: Uuid) -> PowResult<()> {
        sqlx::query("DELETE FROM pow_challenges WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        tracing::debug!(token = %token, "Challenge deleted");
        Ok(())
    }

    async fn consume(&self, token: Uuid) -> PowResult<bool> {
        let now_ms = Utc::now().timestamp_millis();

        // Single conditional delete: of two concurrent redeemers exactly
        // one observes an affected row.
        let consumed = sqlx::query(
            "DELETE FROM pow_challenges WHERE token = $1 AND expires_at_ms > $2",
        )
        .bind(token)
        .bind(now_ms)
        .execute(&self.pool)
        .await?
        .rows_affected()
            > 0;

        if consumed {
            tracing::info!(token = %token, "Challenge consumed");
        }

        Ok(consumed)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ChallengeRow {
    token: Uuid,
    challenge: String,
    difficulty: i16,
    issued_at: chrono::DateTime<chrono::Utc>,
    expires_at_ms: i64,
}

impl ChallengeRow {
    fn into_challenge(self) -> Challenge {
        Challenge {
            token: self.token,
            challenge: self.challenge,
            difficulty: self.difficulty as u8,
            issued_at: self.issued_at,
            expires_at_ms: self.expires_at_ms,
        }
    }
}
