//! Unit tests for PoW crate

use crate::domain::entities::Challenge;
use crate::domain::services::{compute_proof_hash, get_target};

/// Mine a nonce satisfying the difficulty (test helper)
fn mine(challenge: &str, difficulty: u8) -> (String, String) {
    let target = get_target(difficulty);
    let mut counter: u64 = 0;
    loop {
        let nonce = counter.to_string();
        let hash = compute_proof_hash(challenge, &nonce);
        if hash.starts_with(&target) {
            return (nonce, hash);
        }
        counter += 1;
        assert!(counter < 10_000_000, "no nonce found within 10M attempts");
    }
}

/// Build an already-expired challenge (test helper)
fn expired_challenge(difficulty: u8) -> Challenge {
    let mut challenge = Challenge::new("deadbeef".to_string(), difficulty, 1_000);
    challenge.expires_at_ms = chrono::Utc::now().timestamp_millis() - 1;
    challenge
}

mod proof_tests {
    use super::*;
    use crate::domain::services::verify_proof;
    use platform::crypto::sha256_hex;

    #[test]
    fn test_target_length_and_content() {
        for difficulty in 0u8..=16 {
            let target = get_target(difficulty);
            assert_eq!(target.len(), difficulty as usize);
            assert!(target.chars().all(|c| c == '0'));
        }
    }

    #[test]
    fn test_hash_is_byte_exact_concatenation() {
        let challenge = "a1b2c3";
        let nonce = "42";
        assert_eq!(
            compute_proof_hash(challenge, nonce),
            sha256_hex(b"a1b2c342")
        );
    }

    #[test]
    fn test_verify_accepts_mined_proof() {
        let challenge = "f00dfeed";
        let (nonce, hash) = mine(challenge, 2);
        assert!(verify_proof(challenge, &nonce, &hash, 2));
    }

    #[test]
    fn test_verify_rejects_insufficient_difficulty() {
        let challenge = "f00dfeed";
        let (nonce, hash) = mine(challenge, 1);
        // A valid difficulty-1 proof that happens not to meet difficulty 6
        if !hash.starts_with(&get_target(6)) {
            assert!(!verify_proof(challenge, &nonce, &hash, 6));
        }
    }

    #[test]
    fn test_verify_rejects_foreign_hash() {
        let challenge = "f00dfeed";
        let (nonce, _) = mine(challenge, 1);
        let foreign = compute_proof_hash("other-challenge", &nonce);
        assert!(!verify_proof(challenge, &nonce, &foreign, 0));
    }
}

mod domain_tests {
    use super::*;
    use crate::domain::value_objects::Difficulty;

    #[test]
    fn test_challenge_creation() {
        let challenge = Challenge::new("cafe".to_string(), 4, 360_000);
        assert_eq!(challenge.difficulty, 4);
        assert_eq!(challenge.target(), "0000");
        assert!(!challenge.is_expired());
    }

    #[test]
    fn test_challenge_tokens_are_unique() {
        let a = Challenge::new("cafe".to_string(), 4, 360_000);
        let b = Challenge::new("cafe".to_string(), 4, 360_000);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_expiry_detection() {
        assert!(expired_challenge(4).is_expired());
    }

    #[test]
    fn test_difficulty_validation() {
        assert!(Difficulty::new(1).is_some());
        assert!(Difficulty::new(4).is_some());
        assert!(Difficulty::new(16).is_some());
        assert!(Difficulty::new(0).is_none());
        assert!(Difficulty::new(17).is_none());
        assert_eq!(Difficulty::default().chars(), 4);
    }
}

mod use_case_tests {
    use super::*;
    use crate::application::config::PowConfig;
    use crate::application::issue_challenge::IssueChallengeUseCase;
    use crate::application::redeem_challenge::{RedeemChallengeInput, RedeemChallengeUseCase};
    use crate::domain::repository::ChallengeRepository;
    use crate::domain::value_objects::Difficulty;
    use crate::error::PowError;
    use crate::infra::memory::InMemoryChallengeStore;
    use std::sync::Arc;

    fn setup() -> (
        Arc<InMemoryChallengeStore>,
        IssueChallengeUseCase<InMemoryChallengeStore>,
        RedeemChallengeUseCase<InMemoryChallengeStore>,
    ) {
        let store = Arc::new(InMemoryChallengeStore::new());
        let config = Arc::new(PowConfig::default());
        let issue = IssueChallengeUseCase::new(store.clone(), config);
        let redeem = RedeemChallengeUseCase::new(store.clone());
        (store, issue, redeem)
    }

    #[tokio::test]
    async fn test_issue_returns_independent_random_values() {
        let (store, issue, _) = setup();

        let a = issue.execute(Difficulty::DEFAULT).await.unwrap();
        let b = issue.execute(Difficulty::DEFAULT).await.unwrap();

        assert_ne!(a.token, b.token);
        assert_ne!(a.challenge, b.challenge);
        assert_eq!(a.challenge.len(), 64); // 32 random bytes, hex-encoded
        assert_eq!(a.target, "0000");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_redeem_succeeds_exactly_once() {
        let (store, issue, redeem) = setup();

        let issued = issue.execute(Difficulty::new(2).unwrap()).await.unwrap();
        let (nonce, hash) = mine(&issued.challenge, 2);

        let input = RedeemChallengeInput {
            token: issued.token,
            nonce: Some(nonce),
            hash: Some(hash),
        };

        redeem.execute(input.clone()).await.unwrap();
        assert!(store.is_empty());

        // Second redemption of the same token: record is gone
        let err = redeem.execute(input).await.unwrap_err();
        assert!(matches!(err, PowError::InvalidToken));
    }

    #[tokio::test]
    async fn test_end_to_end_difficulty_four() {
        let (_, issue, redeem) = setup();

        let issued = issue.execute(Difficulty::DEFAULT).await.unwrap();
        assert_eq!(issued.difficulty, 4);

        let (nonce, hash) = mine(&issued.challenge, 4);
        assert!(hash.starts_with("0000"));

        redeem
            .execute(RedeemChallengeInput {
                token: issued.token,
                nonce: Some(nonce),
                hash: Some(hash),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let (_, _, redeem) = setup();

        let err = redeem
            .execute(RedeemChallengeInput {
                token: uuid::Uuid::new_v4(),
                nonce: Some("1".to_string()),
                hash: Some("00".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PowError::InvalidToken));
    }

    #[tokio::test]
    async fn test_failed_proof_allows_retry_until_success() {
        let (store, issue, redeem) = setup();

        let issued = issue.execute(Difficulty::new(1).unwrap()).await.unwrap();

        // Garbage proof: rejected, record retained
        let err = redeem
            .execute(RedeemChallengeInput {
                token: issued.token,
                nonce: Some("nope".to_string()),
                hash: Some("ffff".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PowError::InvalidProof));
        assert_eq!(store.len(), 1);

        // Retry with a real proof succeeds
        let (nonce, hash) = mine(&issued.challenge, 1);
        redeem
            .execute(RedeemChallengeInput {
                token: issued.token,
                nonce: Some(nonce),
                hash: Some(hash),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_proof_fields_are_invalid_proof() {
        let (store, issue, redeem) = setup();

        let issued = issue.execute(Difficulty::DEFAULT).await.unwrap();

        let err = redeem
            .execute(RedeemChallengeInput {
                token: issued.token,
                nonce: None,
                hash: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PowError::InvalidProof));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_challenge_rejected_even_with_valid_proof() {
        let (store, _, redeem) = setup();

        let challenge = expired_challenge(1);
        let (nonce, hash) = mine(&challenge.challenge, 1);
        store.put(&challenge).await.unwrap();

        let err = redeem
            .execute(RedeemChallengeInput {
                token: challenge.token,
                nonce: Some(nonce),
                hash: Some(hash),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PowError::ChallengeExpired));
        // Lazy deletion happened on access
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_consume_is_single_winner() {
        let (store, issue, _) = setup();

        let issued = issue.execute(Difficulty::DEFAULT).await.unwrap();

        assert!(store.consume(issued.token).await.unwrap());
        assert!(!store.consume(issued.token).await.unwrap());
    }
}

mod error_tests {
    use crate::error::PowError;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_error_kinds() {
        assert_eq!(PowError::InvalidToken.kind(), ErrorKind::NotFound);
        assert_eq!(PowError::ChallengeExpired.kind(), ErrorKind::Gone);
        assert_eq!(PowError::InvalidProof.kind(), ErrorKind::Conflict);
        assert_eq!(
            PowError::Internal("test".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_error_display() {
        assert!(PowError::InvalidProof.to_string().contains("proof"));
        assert!(PowError::ChallengeExpired.to_string().contains("expired"));
    }
}
