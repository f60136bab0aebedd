//! Domain Services
//!
//! Pure proof-of-work verification logic. Deterministic and replayable;
//! no side effects, no stored state.

use sha2::{Digest, Sha256};

/// The required hash prefix for a difficulty: `difficulty` zero characters
pub fn get_target(difficulty: u8) -> String {
    "0".repeat(difficulty as usize)
}

/// Compute the proof hash: lowercase hex of SHA-256(challenge ++ nonce)
///
/// The exact UTF-8 byte concatenation is the contract clients solve
/// against; any change here breaks every client miner.
pub fn compute_proof_hash(challenge: &str, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(challenge.as_bytes());
    hasher.update(nonce.as_bytes());
    let digest = hasher.finalize();
    platform::crypto::to_hex(&digest)
}

/// Verify a claimed proof against a challenge
///
/// True iff the recomputed hash equals `claimed_hash` AND `claimed_hash`
/// starts with the difficulty target.
pub fn verify_proof(challenge: &str, nonce: &str, claimed_hash: &str, difficulty: u8) -> bool {
    let recomputed = compute_proof_hash(challenge, nonce);
    recomputed == claimed_hash && claimed_hash.starts_with(&get_target(difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::sha256_hex;

    #[test]
    fn test_get_target() {
        assert_eq!(get_target(0), "");
        assert_eq!(get_target(4), "0000");
        assert_eq!(get_target(8).len(), 8);
        assert!(get_target(8).chars().all(|c| c == '0'));
    }

    #[test]
    fn test_compute_proof_hash_is_plain_concatenation() {
        // SHA-256("abcdef") split as challenge "abc" + nonce "def"
        let direct = sha256_hex(b"abcdef");
        assert_eq!(compute_proof_hash("abc", "def"), direct);
    }

    #[test]
    fn test_verify_proof_difficulty_zero() {
        let hash = compute_proof_hash("challenge", "nonce");
        assert!(verify_proof("challenge", "nonce", &hash, 0));
    }

    #[test]
    fn test_verify_proof_rejects_wrong_hash() {
        let mut hash = compute_proof_hash("challenge", "nonce");
        // Flip the last hex digit
        let last = hash.pop().unwrap();
        hash.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_proof("challenge", "nonce", &hash, 0));
    }

    #[test]
    fn test_verify_proof_enforces_target_prefix() {
        // A correct hash that does not start with enough zeros must fail
        let hash = compute_proof_hash("challenge", "nonce");
        let leading_zeros = hash.chars().take_while(|&c| c == '0').count() as u8;
        assert!(!verify_proof(
            "challenge",
            "nonce",
            &hash,
            leading_zeros + 1
        ));
    }
}
