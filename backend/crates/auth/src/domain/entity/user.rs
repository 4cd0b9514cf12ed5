//! User Entity
//!
//! Profile of a student or admin, including the running point balance.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, identity::Identity, user_id::UserId,
    user_role::UserRole,
};

/// User entity
///
/// `points` is only ever increased by approving a point request.
/// Credentials live in [`super::credential::Credential`].
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name, not unique
    pub name: DisplayName,
    /// Login identifier, unique
    pub email: Email,
    /// Fixed at creation
    pub role: UserRole,
    /// Accumulated approved points, never negative
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a zero balance
    pub fn new(name: DisplayName, email: Email, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            role,
            points: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id, self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_zero() {
        let user = User::new(
            DisplayName::new("Test Student").unwrap(),
            Email::new("student@test.com").unwrap(),
            UserRole::Student,
        );

        assert_eq!(user.points, 0);
        assert!(!user.is_admin());
        assert_eq!(user.identity().user_id, user.user_id);
        assert_eq!(user.identity().role, UserRole::Student);
    }
}
