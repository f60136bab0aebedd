//! Admission Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use pow::application::config::PowConfig;
use pow::domain::repository::ChallengeRepository;
use pow::infra::postgres::PgChallengeStore;

use crate::application::admission::AdmissionFacade;
use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthStore;
use crate::presentation::handlers::{self, AdmissionAppState};

/// Create the admission router with PostgreSQL stores
pub fn admission_router(
    challenge_store: PgChallengeStore,
    auth_store: PgAuthStore,
    pow_config: PowConfig,
    auth_config: AuthConfig,
) -> Router {
    admission_router_generic(challenge_store, auth_store, pow_config, auth_config)
}

/// Create a generic admission router for any store implementations
pub fn admission_router_generic<C, R>(
    challenge_store: C,
    auth_store: R,
    pow_config: PowConfig,
    auth_config: AuthConfig,
) -> Router
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let facade = AdmissionFacade::new(
        Arc::new(challenge_store),
        Arc::new(auth_store),
        Arc::new(pow_config),
        Arc::new(auth_config),
    );

    let state = AdmissionAppState {
        facade: Arc::new(facade),
    };

    Router::new()
        .route("/challenge", get(handlers::issue_challenge::<C, R>))
        .route("/register", post(handlers::register::<C, R>))
        .route("/session", post(handlers::open_session::<C, R>))
        .route(
            "/session/{id}/proof",
            post(handlers::submit_proof::<C, R>),
        )
        .route(
            "/session/{id}/status",
            get(handlers::session_status::<C, R>),
        )
        .route("/session/{id}", delete(handlers::close_session::<C, R>))
        .route("/login", post(handlers::login::<C, R>))
        .with_state(state)
}
