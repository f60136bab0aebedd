//! Admission Facade
//!
//! The single component the HTTP layer talks to. Composes the PoW
//! challenge registry, the signature session registry, the credential
//! service, and the account collaborators into the two admission flows:
//! registration-by-proof-of-work and identity-proof/login.
//!
//! Every admission error is recovered here into a typed outcome; nothing
//! is swallowed, and core admission success is never conflated with
//! unrelated side-effect failures.

use std::sync::Arc;

use pow::application::config::PowConfig;
use pow::application::issue_challenge::{IssueChallengeOutput, IssueChallengeUseCase};
use pow::application::redeem_challenge::{RedeemChallengeInput, RedeemChallengeUseCase};
use pow::domain::repository::ChallengeRepository;
use uuid::Uuid;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::credential::CredentialService;
use crate::application::open_session::{OpenSessionOutput, OpenSessionUseCase};
use crate::application::register::{RegisterInput, RegisterOutput, RegisterUseCase};
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::submit_proof::SubmitProofUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{public_id::PublicId, public_key::Npub};
use crate::error::{AuthError, AuthResult};

/// Candidate record for registration-by-PoW
///
/// Proof fields live beside the account fields on the wire but are
/// consumed by redemption and never persisted.
#[derive(Debug, Clone)]
pub struct RegistrationCandidate {
    pub user_name: String,
    pub password: String,
    pub public_key: Option<String>,
    pub raw_seed: Option<String>,
    pub nonce: Option<String>,
    pub hash: Option<String>,
}

/// Admission facade
pub struct AdmissionFacade<C, R>
where
    C: ChallengeRepository,
    R: UserRepository + AuthRepository + AuthSessionRepository,
{
    challenge_repo: Arc<C>,
    repo: Arc<R>,
    pow_config: Arc<PowConfig>,
    auth_config: Arc<AuthConfig>,
    credentials: CredentialService,
}

impl<C, R> AdmissionFacade<C, R>
where
    C: ChallengeRepository,
    R: UserRepository + AuthRepository + AuthSessionRepository,
{
    pub fn new(
        challenge_repo: Arc<C>,
        repo: Arc<R>,
        pow_config: Arc<PowConfig>,
        auth_config: Arc<AuthConfig>,
    ) -> Self {
        let credentials = CredentialService::new(&auth_config);
        Self {
            challenge_repo,
            repo,
            pow_config,
            auth_config,
            credentials,
        }
    }

    /// The credential service (shared with middleware)
    pub fn credentials(&self) -> &CredentialService {
        &self.credentials
    }

    // ========================================================================
    // Registration by proof of work
    // ========================================================================

    /// Issue a PoW challenge at the configured difficulty
    pub async fn request_challenge(&self) -> AuthResult<IssueChallengeOutput> {
        let use_case =
            IssueChallengeUseCase::new(self.challenge_repo.clone(), self.pow_config.clone());
        Ok(use_case.execute(self.pow_config.difficulty).await?)
    }

    /// Redeem a challenge and, only on success, create the account
    ///
    /// The proof fields are stripped here: `RegisterInput` carries only
    /// account data, so nonce and hash can never reach a store.
    pub async fn complete_registration(
        &self,
        token: Uuid,
        candidate: RegistrationCandidate,
    ) -> AuthResult<RegisterOutput> {
        let redeem = RedeemChallengeUseCase::new(self.challenge_repo.clone());
        redeem
            .execute(RedeemChallengeInput {
                token,
                nonce: candidate.nonce,
                hash: candidate.hash,
            })
            .await?;

        let register = RegisterUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.auth_config.clone(),
        );
        register
            .execute(RegisterInput {
                user_name: candidate.user_name,
                password: candidate.password,
                public_key: candidate.public_key,
                raw_seed: candidate.raw_seed,
            })
            .await
    }

    // ========================================================================
    // Identity proof by signature
    // ========================================================================

    /// Open a signature session for a claimed public key
    pub async fn request_session(&self, public_key: &str) -> AuthResult<OpenSessionOutput> {
        let public_key = Npub::parse(public_key)?;
        let use_case = OpenSessionUseCase::new(self.repo.clone(), self.auth_config.clone());
        use_case.execute(public_key).await
    }

    /// Submit a detached signature over the session's challenge string
    pub async fn submit_signature(
        &self,
        session_id: Uuid,
        signature_bytes: &[u8],
    ) -> AuthResult<()> {
        let use_case = SubmitProofUseCase::new(self.repo.clone(), self.repo.clone());
        use_case.execute(session_id, signature_bytes).await
    }

    /// Whether the session is live and verified
    pub async fn check_session(&self, session_id: Uuid) -> AuthResult<bool> {
        CheckSessionUseCase::new(self.repo.clone())
            .is_verified(session_id)
            .await
    }

    /// The trusted identity behind a verified session, if any
    pub async fn session_identity(&self, session_id: Uuid) -> AuthResult<Option<Npub>> {
        CheckSessionUseCase::new(self.repo.clone())
            .public_key_for(session_id)
            .await
    }

    /// Explicit session teardown
    pub async fn close_session(&self, session_id: Uuid) -> AuthResult<()> {
        CheckSessionUseCase::new(self.repo.clone())
            .close(session_id)
            .await
    }

    // ========================================================================
    // Password login
    // ========================================================================

    /// Password login issuing a bearer credential
    pub async fn login(&self, user_name: String, password: String) -> AuthResult<SignInOutput> {
        let use_case = SignInUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.credentials.clone(),
            self.auth_config.clone(),
        );
        use_case
            .execute(SignInInput {
                user_name,
                password,
            })
            .await
    }

    /// Resolve a bearer credential to its (still active) account
    ///
    /// This is the gate behind every endpoint requiring an established
    /// session after password login: signature, expiry, and the
    /// subject-still-active invariant all checked here.
    pub async fn current_account(&self, bearer_token: &str) -> AuthResult<User> {
        let subject = self.credentials.validate(bearer_token)?;

        let public_id =
            PublicId::parse_str(&subject).map_err(|_| AuthError::TokenInvalid)?;

        let user = self
            .repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        Ok(user)
    }
}
