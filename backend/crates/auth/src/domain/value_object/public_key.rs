//! Npub Value Object
//!
//! A bech32-encoded Ed25519 public key with the `npub` human-readable
//! part. The encoded form is what accounts and sessions store; the raw
//! 32-byte form is what signature verification consumes.

use bech32::Hrp;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Human-readable part every valid key carries
const NPUB_HRP: &str = "npub";

/// Raw public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Bech32-encoded public key (claimed identity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Npub(String);

impl Npub {
    /// Parse and validate an encoded public key
    ///
    /// Fails with `MalformedKey` when the bech32 decode fails, the
    /// human-readable part is not `npub`, or the payload is not 32 bytes.
    pub fn parse(encoded: &str) -> AuthResult<Self> {
        decode_npub(encoded)?;
        Ok(Self(encoded.to_string()))
    }

    /// The encoded form, as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to the raw 32-byte key
    pub fn to_bytes(&self) -> AuthResult<[u8; PUBLIC_KEY_LEN]> {
        decode_npub(&self.0)
    }

    /// Construct from a raw key (test/tooling helper)
    pub fn from_bytes(raw: &[u8; PUBLIC_KEY_LEN]) -> AuthResult<Self> {
        let hrp = Hrp::parse(NPUB_HRP).map_err(|_| AuthError::MalformedKey)?;
        let encoded =
            bech32::encode::<bech32::Bech32>(hrp, raw).map_err(|_| AuthError::MalformedKey)?;
        Ok(Self(encoded))
    }
}

impl std::fmt::Display for Npub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn decode_npub(encoded: &str) -> AuthResult<[u8; PUBLIC_KEY_LEN]> {
    let (hrp, data) = bech32::decode(encoded).map_err(|_| AuthError::MalformedKey)?;
    if hrp.to_lowercase() != NPUB_HRP {
        return Err(AuthError::MalformedKey);
    }
    data.try_into().map_err(|_| AuthError::MalformedKey)
}
