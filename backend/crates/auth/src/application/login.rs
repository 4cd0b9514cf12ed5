//! Login Use Case
//!
//! Checks email + password and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::register::AuthenticatedOutput;
use crate::application::token::issue_token;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> LoginUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credential_repo,
            config,
        }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthenticatedOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidLogin)?;
        let raw_password = RawPassword::for_login(input.password);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidLogin)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credential not found".to_string()))?;

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidLogin);
        }

        let token = issue_token(
            &self.config,
            user.identity(),
            chrono::Utc::now().timestamp_millis(),
        )?;

        tracing::info!(user_id = %user.user_id, role = %user.role, "User logged in");

        Ok(AuthenticatedOutput { token, user })
    }
}
