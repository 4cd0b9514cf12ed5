//! Provision Admin Use Case
//!
//! Startup bootstrap of the administrator account. Admins never come from
//! the public register endpoint.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

pub struct ProvisionAdminInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// What provisioning did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyPresent,
}

pub struct ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Idempotent. Refuses to promote an existing student.
    pub async fn execute(&self, input: ProvisionAdminInput) -> AuthResult<ProvisionOutcome> {
        let name = DisplayName::new(&input.name)?;
        let email = Email::new(&input.email)?;

        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            if existing.is_admin() {
                tracing::debug!(user_id = %existing.user_id, "Admin already provisioned");
                return Ok(ProvisionOutcome::AlreadyPresent);
            }
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(name, email, UserRole::Admin);
        let credential = Credential::new(user.user_id, password_hash);
        self.user_repo
            .create_with_credential(&user, &credential)
            .await?;

        tracing::info!(user_id = %user.user_id, email = %user.email, "Admin provisioned");

        Ok(ProvisionOutcome::Created)
    }
}
