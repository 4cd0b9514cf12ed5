//! Profile Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Current profile of the caller, including the latest point balance
    pub async fn execute(&self, identity: &Identity) -> AuthResult<User> {
        self.user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
