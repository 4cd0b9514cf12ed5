//! Resolve Request Use Case

use auth::{Identity, UserRole};
use kernel::id::PointRequestId;
use std::sync::Arc;

use crate::domain::entities::PointRequestView;
use crate::domain::repository::PointRequestRepository;
use crate::domain::value_objects::Decision;
use crate::error::PointsResult;

/// Resolve Request Use Case
pub struct ResolveRequestUseCase<R>
where
    R: PointRequestRepository,
{
    repo: Arc<R>,
}

impl<R> ResolveRequestUseCase<R>
where
    R: PointRequestRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Approve or reject a pending request. Admin only.
    ///
    /// The status change and the credit commit together or not at all.
    pub async fn execute(
        &self,
        identity: &Identity,
        request_id: PointRequestId,
        decision: Decision,
    ) -> PointsResult<PointRequestView> {
        identity.require(UserRole::Admin)?;

        let view = self.repo.resolve(&request_id, decision).await?;
        let credited = if decision.credits() {
            view.request.points_requested.value()
        } else {
            0
        };

        tracing::info!(
            request_id = %request_id,
            student_id = %view.student.id,
            decision = %decision,
            credited,
            acting_admin = %identity.user_id,
            "Point request resolved"
        );

        Ok(view)
    }
}
