//! Register Use Case
//!
//! Creates a student account and signs the caller in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, issue_token};
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Only `"student"` (or nothing) is accepted
    pub role: Option<String>,
}

/// Output shared by register and login
pub struct AuthenticatedOutput {
    pub token: IssuedToken,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthenticatedOutput> {
        let role = match input.role.as_deref().map(str::trim) {
            None | Some("") => UserRole::Student,
            Some(code) if UserRole::from_code(code) == Some(UserRole::Student) => {
                UserRole::Student
            }
            Some(_) => {
                return Err(AuthError::Validation(
                    "Only student accounts can be registered".to_string(),
                ));
            }
        };

        let name = DisplayName::new(&input.name)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(name, email, role);
        let credential = Credential::new(user.user_id, password_hash);

        // The repository re-checks email uniqueness inside the transaction
        self.user_repo
            .create_with_credential(&user, &credential)
            .await?;

        let token = issue_token(
            &self.config,
            user.identity(),
            chrono::Utc::now().timestamp_millis(),
        )?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(AuthenticatedOutput { token, user })
    }
}
