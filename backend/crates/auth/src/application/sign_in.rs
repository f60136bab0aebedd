//! Sign In Use Case
//!
//! Password login: verifies the stored Argon2id hash and the account's
//! active flag, then issues a bearer credential.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential::CredentialService;
use crate::domain::repository::{AuthRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    /// Bearer credential
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
    /// Public ID of the signed-in account
    pub public_id: String,
}

/// Sign in use case
pub struct SignInUseCase<U, A>
where
    U: UserRepository,
    A: AuthRepository,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    credentials: CredentialService,
    config: Arc<AuthConfig>,
}

impl<U, A> SignInUseCase<U, A>
where
    U: UserRepository,
    A: AuthRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        auth_repo: Arc<A>,
        credentials: CredentialService,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            credentials,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Unknown names and wrong passwords produce the same error
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let auth = self
            .auth_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Auth record missing for user".to_string()))?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = auth
            .password_hash
            .verify(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let mut user = user;
        user.record_login();
        self.user_repo.update(&user).await?;

        let access_token = self.credentials.issue_default(user.public_id.as_str())?;

        tracing::info!(
            public_id = %user.public_id,
            "User signed in"
        );

        Ok(SignInOutput {
            access_token,
            token_type: "bearer",
            public_id: user.public_id.to_string(),
        })
    }
}
