//! Signature Verification
//!
//! Pure Ed25519 detached-signature checks over session challenge
//! strings. Verification failure is a boolean, never an error; only
//! malformed key material is an error (`MalformedKey`).

use ed25519_dalek::{Signature, SigningKey, Verifier, VerifyingKey};

use crate::error::{AuthError, AuthResult};

/// Ed25519 signature length in bytes
pub const SIGNATURE_LEN: usize = 64;

/// Seed length for the fallback derivation
pub const SEED_LEN: usize = 32;

/// Verify a detached signature against a raw 32-byte public key
///
/// Returns `Ok(false)` for any cryptographic mismatch (including a
/// wrong-length signature); `Err(MalformedKey)` only when the key bytes
/// are not a valid curve point.
pub fn verify(raw_key: &[u8; 32], message: &[u8], signature: &[u8]) -> AuthResult<bool> {
    let verifying_key =
        VerifyingKey::from_bytes(raw_key).map_err(|_| AuthError::MalformedKey)?;

    let Ok(sig_bytes) = <[u8; SIGNATURE_LEN]>::try_from(signature) else {
        return Ok(false);
    };
    let signature = Signature::from_bytes(&sig_bytes);

    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Derive the public key from a raw 32-byte seed
///
/// Reproduces the standard Ed25519 keypair derivation that seed-holding
/// clients (TweetNaCl and friends) use. This exists purely for the
/// compatibility fallback; the bech32-decoded key on file is the
/// authoritative path.
pub fn derive_from_seed(seed: &[u8; SEED_LEN]) -> [u8; 32] {
    SigningKey::from_bytes(seed).verifying_key().to_bytes()
}

/// Parse a stored hex seed into raw bytes
///
/// A malformed stored seed disables the fallback rather than failing the
/// whole verification; the caller logs it.
pub fn parse_seed_hex(seed_hex: &str) -> Option<[u8; SEED_LEN]> {
    let bytes = platform::crypto::from_hex(seed_hex).ok()?;
    bytes.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Signer;

    fn keypair(seed: [u8; 32]) -> (SigningKey, [u8; 32]) {
        let signing_key = SigningKey::from_bytes(&seed);
        let public = signing_key.verifying_key().to_bytes();
        (signing_key, public)
    }

    #[test]
    fn test_verify_accepts_valid_signature() {
        let (signing_key, public) = keypair([3u8; 32]);
        let message = b"auth-challenge:00000000-0000-0000-0000-000000000000";
        let signature = signing_key.sign(message);

        assert!(verify(&public, message, &signature.to_bytes()).unwrap());
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let (signing_key, public) = keypair([3u8; 32]);
        let message = b"auth-challenge:test";
        let mut sig = signing_key.sign(message).to_bytes();

        for i in 0..sig.len() {
            sig[i] ^= 0x01;
            assert!(
                !verify(&public, message, &sig).unwrap(),
                "tampered byte {i} verified"
            );
            sig[i] ^= 0x01;
        }
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let (signing_key, _) = keypair([3u8; 32]);
        let (_, other_public) = keypair([4u8; 32]);
        let message = b"auth-challenge:test";
        let signature = signing_key.sign(message);

        assert!(!verify(&other_public, message, &signature.to_bytes()).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_length_signature() {
        let (_, public) = keypair([3u8; 32]);
        assert!(!verify(&public, b"message", b"short").unwrap());
    }

    #[test]
    fn test_seed_derivation_matches_dalek() {
        let seed = [9u8; 32];
        let (_, expected) = keypair(seed);
        assert_eq!(derive_from_seed(&seed), expected);
    }

    #[test]
    fn test_parse_seed_hex() {
        let seed = [0xabu8; 32];
        let seed_hex = hex::encode(seed);
        assert_eq!(parse_seed_hex(&seed_hex), Some(seed));

        assert_eq!(parse_seed_hex("abc"), None); // odd length
        assert_eq!(parse_seed_hex("ab"), None); // wrong length
        assert_eq!(parse_seed_hex("not hex at all"), None);
    }
}
