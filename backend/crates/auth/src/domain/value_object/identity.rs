//! Authenticated Identity
//!
//! What a verified bearer credential resolves to, plus the role gate.

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Resolved `{ userId, role }` of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub role: UserRole,
}

impl Identity {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Role gate.
    ///
    /// `Admin` needs an admin identity. `Student` is the self-scoped
    /// requirement and accepts any authenticated identity.
    pub fn require(&self, required: UserRole) -> AuthResult<()> {
        match required {
            UserRole::Student => Ok(()),
            UserRole::Admin if self.role.is_admin() => Ok(()),
            UserRole::Admin => Err(AuthError::Forbidden { required }),
        }
    }

    /// Gate for data owned by `owner`: the owner or an admin.
    pub fn require_self_or_admin(&self, owner: &UserId) -> AuthResult<()> {
        if self.user_id == *owner || self.role.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden {
                required: UserRole::Admin,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gate() {
        let student = Identity::new(UserId::new(), UserRole::Student);
        let admin = Identity::new(UserId::new(), UserRole::Admin);

        assert!(matches!(
            student.require(UserRole::Admin),
            Err(AuthError::Forbidden { .. })
        ));
        assert!(admin.require(UserRole::Admin).is_ok());
    }

    #[test]
    fn test_student_gate_accepts_any_identity() {
        let student = Identity::new(UserId::new(), UserRole::Student);
        let admin = Identity::new(UserId::new(), UserRole::Admin);

        assert!(student.require(UserRole::Student).is_ok());
        assert!(admin.require(UserRole::Student).is_ok());
    }

    #[test]
    fn test_self_or_admin() {
        let owner = UserId::new();
        let me = Identity::new(owner, UserRole::Student);
        let other = Identity::new(UserId::new(), UserRole::Student);
        let admin = Identity::new(UserId::new(), UserRole::Admin);

        assert!(me.require_self_or_admin(&owner).is_ok());
        assert!(admin.require_self_or_admin(&owner).is_ok());
        assert!(matches!(
            other.require_self_or_admin(&owner),
            Err(AuthError::Forbidden { .. })
        ));
    }
}
