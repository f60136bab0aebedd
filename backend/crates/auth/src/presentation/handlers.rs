//! HTTP Handlers
//!
//! Thin translation between the wire and the admission facade; all
//! decisions live behind the facade.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use pow::domain::repository::ChallengeRepository;

use crate::application::admission::{AdmissionFacade, RegistrationCandidate};
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChallengeResponse, LoginRequest, LoginResponse, OpenSessionRequest, OpenSessionResponse,
    RegisterQuery, RegisterRequest, RegisterResponse, SessionStatusResponse, SubmitProofRequest,
};

/// Shared state for admission handlers
pub struct AdmissionAppState<C, R>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    pub facade: Arc<AdmissionFacade<C, R>>,
}

impl<C, R> Clone for AdmissionAppState<C, R>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            facade: self.facade.clone(),
        }
    }
}

/// GET /challenge
pub async fn issue_challenge<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
) -> AuthResult<Json<ChallengeResponse>>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let output = state.facade.request_challenge().await?;

    Ok(Json(ChallengeResponse {
        token: output.token,
        challenge: output.challenge,
        difficulty: output.difficulty,
        target: output.target,
        expires_at_ms: output.expires_at_ms,
    }))
}

/// POST /register?token=...
pub async fn register<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Query(query): Query<RegisterQuery>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let candidate = RegistrationCandidate {
        user_name: req.user_name,
        password: req.password,
        public_key: req.public_key,
        raw_seed: req.raw_seed,
        nonce: req.nonce,
        hash: req.hash,
    };

    let output = state
        .facade
        .complete_registration(query.token, candidate)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            public_id: output.public_id,
            user_name: output.user_name,
        }),
    ))
}

/// POST /session
pub async fn open_session<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Json(req): Json<OpenSessionRequest>,
) -> AuthResult<Json<OpenSessionResponse>>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let output = state.facade.request_session(&req.public_key).await?;

    Ok(Json(OpenSessionResponse {
        session_id: output.session_id,
        challenge: output.challenge,
        expires_at_ms: output.expires_at_ms,
    }))
}

/// POST /session/{id}/proof
pub async fn submit_proof<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitProofRequest>,
) -> AuthResult<StatusCode>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    // A signature that does not even decode is just a failed proof
    let signature_bytes =
        platform::crypto::from_base64(&req.signature).map_err(|_| AuthError::InvalidSignature)?;

    state
        .facade
        .submit_signature(session_id, &signature_bytes)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /session/{id}/status
pub async fn session_status<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Path(session_id): Path<Uuid>,
) -> AuthResult<Json<SessionStatusResponse>>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let verified = state.facade.check_session(session_id).await?;

    Ok(Json(SessionStatusResponse { verified }))
}

/// DELETE /session/{id}
pub async fn close_session<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Path(session_id): Path<Uuid>,
) -> AuthResult<StatusCode>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    state.facade.close_session(session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /login
pub async fn login<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let output = state.facade.login(req.user_name, req.password).await?;

    Ok(Json(LoginResponse {
        access_token: output.access_token,
        token_type: output.token_type.to_string(),
    }))
}
