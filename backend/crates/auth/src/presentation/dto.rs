//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Challenge / Registration
// ============================================================================

/// Response for GET /challenge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub token: Uuid,
    pub challenge: String,
    pub difficulty: u8,
    pub target: String,
    pub expires_at_ms: i64,
}

/// Query for POST /register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterQuery {
    pub token: Uuid,
}

/// Request for POST /register
///
/// `nonce` and `hash` are the proof fields; they gate admission and are
/// never persisted with the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub raw_seed: Option<String>,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Response for POST /register
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub public_id: String,
    pub user_name: String,
}

// ============================================================================
// Signature sessions
// ============================================================================

/// Request for POST /session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionRequest {
    pub public_key: String,
}

/// Response for POST /session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionResponse {
    pub session_id: Uuid,
    pub challenge: String,
    pub expires_at_ms: i64,
}

/// Request for POST /session/{id}/proof
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProofRequest {
    /// Base64-encoded detached signature over the challenge string
    pub signature: String,
}

/// Response for GET /session/{id}/status
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub verified: bool,
}

// ============================================================================
// Login
// ============================================================================

/// Request for POST /login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Response for POST /login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"userName":"alice","password":"pw","nonce":"42","hash":"00ab"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.user_name, "alice");
        assert_eq!(request.nonce.as_deref(), Some("42"));
        assert_eq!(request.hash.as_deref(), Some("00ab"));
        assert!(request.public_key.is_none());
    }

    #[test]
    fn test_register_request_missing_proof_fields() {
        let json = r#"{"userName":"alice","password":"pw"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert!(request.nonce.is_none());
        assert!(request.hash.is_none());
    }

    #[test]
    fn test_challenge_response_serialization() {
        let response = ChallengeResponse {
            token: Uuid::nil(),
            challenge: "abcd".to_string(),
            difficulty: 4,
            target: "0000".to_string(),
            expires_at_ms: 1234567890000,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"challenge\""));
        assert!(json.contains("\"expiresAtMs\""));
        assert!(json.contains("\"target\":\"0000\""));
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"tokenType\":\"bearer\""));
    }
}
