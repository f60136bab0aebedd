//! Admission Middleware
//!
//! Middleware for routes that require an established bearer credential.
//! The credential is the sole gate after password login; this is where
//! its signature, expiry, and subject-still-active checks run.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use pow::domain::repository::ChallengeRepository;

use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::handlers::AdmissionAppState;

/// Identity of the credential holder, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub public_id: String,
    pub user_name: String,
}

/// Middleware that requires a valid bearer credential
pub async fn require_credential<C, R>(
    State(state): State<AdmissionAppState<C, R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    C: ChallengeRepository + Send + Sync + 'static,
    R: UserRepository + AuthRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let token = match extract_bearer(&req) {
        Some(token) => token,
        None => return Err(AuthError::TokenInvalid.into_response()),
    };

    let user = match state.facade.current_account(&token).await {
        Ok(user) => user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentAccount {
        public_id: user.public_id.to_string(),
        user_name: user.user_name.original().to_string(),
    });

    Ok(next.run(req).await)
}

fn extract_bearer(req: &Request<Body>) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer() {
        let req = request_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_bearer_missing_or_malformed() {
        assert!(extract_bearer(&request_with_auth(None)).is_none());
        assert!(extract_bearer(&request_with_auth(Some("Basic abc"))).is_none());
        assert!(extract_bearer(&request_with_auth(Some("Bearer "))).is_none());
    }
}
