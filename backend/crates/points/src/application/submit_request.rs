//! Submit Request Use Case

use auth::{Identity, UserRole};
use std::sync::Arc;

use crate::application::config::PointsConfig;
use crate::domain::entities::{PointRequest, PointRequestView};
use crate::domain::repository::PointRequestRepository;
use crate::domain::value_objects::{Description, PointsRequested, RequestTitle};
use crate::error::PointsResult;

/// Input DTO for submit request
#[derive(Debug, Clone)]
pub struct SubmitRequestInput {
    pub title: String,
    pub description: Option<String>,
    pub points_requested: i64,
}

/// Submit Request Use Case
pub struct SubmitRequestUseCase<R>
where
    R: PointRequestRepository,
{
    repo: Arc<R>,
    config: Arc<PointsConfig>,
}

impl<R> SubmitRequestUseCase<R>
where
    R: PointRequestRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PointsConfig>) -> Self {
        Self { repo, config }
    }

    /// Create a pending request owned by the caller
    pub async fn execute(
        &self,
        identity: &Identity,
        input: SubmitRequestInput,
    ) -> PointsResult<PointRequestView> {
        identity.require(UserRole::Student)?;

        let title = RequestTitle::new(&input.title)?;
        let description = Description::new(input.description.as_deref())?;
        let points =
            PointsRequested::new(input.points_requested, self.config.max_points_per_request)?;

        let request = PointRequest::new(identity.user_id, title, description, points);
        let view = self.repo.create(&request).await?;

        tracing::info!(
            request_id = %view.request.id,
            student_id = %view.student.id,
            points_requested = view.request.points_requested.value(),
            "Point request submitted"
        );

        Ok(view)
    }
}
