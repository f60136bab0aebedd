//! Register Account Use Case
//!
//! Creates and activates an account once admission (PoW redemption) has
//! already succeeded. Proof fields never reach this layer.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth::Auth, user::User};
use crate::domain::repository::{AuthRepository, UserRepository};
use crate::domain::value_object::{
    public_key::Npub,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
    /// Optional linked public identity (bech32)
    pub public_key: Option<String>,
    /// Optional raw signing seed (hex) for seed-deriving clients
    pub raw_seed: Option<String>,
}

/// Register output
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub public_id: String,
    pub user_name: String,
}

/// Register use case
pub struct RegisterUseCase<U, A>
where
    U: UserRepository,
    A: AuthRepository,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<U, A> RegisterUseCase<U, A>
where
    U: UserRepository,
    A: AuthRepository,
{
    pub fn new(user_repo: Arc<U>, auth_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            auth_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let user_name = UserName::new(input.user_name)?;

        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let public_key = match &input.public_key {
            Some(encoded) => Some(Npub::parse(encoded)?),
            None => None,
        };

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Admission already succeeded, so the account goes live directly
        let mut user = User::new(user_name, public_key);
        user.activate();

        let auth = Auth::new(user.user_id, password_hash).with_raw_seed(input.raw_seed);

        self.user_repo.create(&user).await?;
        self.auth_repo.create(&auth).await?;

        tracing::info!(
            public_id = %user.public_id,
            user_name = %user.user_name,
            "Account registered"
        );

        Ok(RegisterOutput {
            public_id: user.public_id.to_string(),
            user_name: user.user_name.original().to_string(),
        })
    }
}
