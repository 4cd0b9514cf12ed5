//! List Requests Use Case

use auth::{Identity, UserId, UserRole};
use std::sync::Arc;

use crate::domain::entities::PointRequestView;
use crate::domain::repository::PointRequestRepository;
use crate::error::PointsResult;

/// List Requests Use Case
pub struct ListRequestsUseCase<R>
where
    R: PointRequestRepository,
{
    repo: Arc<R>,
}

impl<R> ListRequestsUseCase<R>
where
    R: PointRequestRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Caller's own requests, newest first
    pub async fn list_own(&self, identity: &Identity) -> PointsResult<Vec<PointRequestView>> {
        self.list_for_student(identity, &identity.user_id).await
    }

    /// Requests owned by `student_id`. The caller must be that student or an admin.
    pub async fn list_for_student(
        &self,
        identity: &Identity,
        student_id: &UserId,
    ) -> PointsResult<Vec<PointRequestView>> {
        identity.require_self_or_admin(student_id)?;
        self.repo.list_by_student(student_id).await
    }

    /// Every request, newest first. Admin only.
    pub async fn list_all(&self, identity: &Identity) -> PointsResult<Vec<PointRequestView>> {
        identity.require(UserRole::Admin)?;
        self.repo.list_all().await
    }
}
