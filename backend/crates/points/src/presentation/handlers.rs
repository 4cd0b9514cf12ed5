//! HTTP Handlers

use auth::{Identity, UserId, UserRole};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use kernel::id::PointRequestId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::PointsConfig;
use crate::application::get_leaderboard::GetLeaderboardUseCase;
use crate::application::list_requests::ListRequestsUseCase;
use crate::application::resolve_request::ResolveRequestUseCase;
use crate::application::submit_request::{SubmitRequestInput, SubmitRequestUseCase};
use crate::domain::entities::PointRequestView;
use crate::domain::repository::{LeaderboardRepository, PointRequestRepository};
use crate::domain::value_objects::Decision;
use crate::error::{PointsError, PointsResult};
use crate::presentation::dto::{
    LeaderboardEntryResponse, PointRequestResponse, ResolveRequestBody, SubmitRequestBody,
};

/// Shared state for points handlers
pub struct PointsAppState<R>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PointsConfig>,
}

impl<R> Clone for PointsAppState<R>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

fn to_responses(views: Vec<PointRequestView>) -> Json<Vec<PointRequestResponse>> {
    Json(views.into_iter().map(PointRequestResponse::from).collect())
}

/// GET /api/points/leaderboard
pub async fn leaderboard<R>(
    State(state): State<PointsAppState<R>>,
) -> PointsResult<Json<Vec<LeaderboardEntryResponse>>>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let entries = GetLeaderboardUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(
        entries
            .into_iter()
            .map(LeaderboardEntryResponse::from)
            .collect(),
    ))
}

/// POST /api/points/request
pub async fn submit_request<R>(
    State(state): State<PointsAppState<R>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Json(req), _): WithRejection<Json<SubmitRequestBody>, PointsError>,
) -> PointsResult<(StatusCode, Json<PointRequestResponse>)>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let use_case = SubmitRequestUseCase::new(state.repo.clone(), state.config.clone());

    let view = use_case
        .execute(
            &identity,
            SubmitRequestInput {
                title: req.title,
                description: req.description,
                points_requested: req.points_requested,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// GET /api/points/requests
pub async fn my_requests<R>(
    State(state): State<PointsAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> PointsResult<Json<Vec<PointRequestResponse>>>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let views = ListRequestsUseCase::new(state.repo.clone())
        .list_own(&identity)
        .await?;

    Ok(to_responses(views))
}

/// GET /api/points/students/{id}/requests
pub async fn student_requests<R>(
    State(state): State<PointsAppState<R>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Path(student_id), _): WithRejection<Path<Uuid>, PointsError>,
) -> PointsResult<Json<Vec<PointRequestResponse>>>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let views = ListRequestsUseCase::new(state.repo.clone())
        .list_for_student(&identity, &UserId::from_uuid(student_id))
        .await?;

    Ok(to_responses(views))
}

/// GET /api/points/all-requests
pub async fn all_requests<R>(
    State(state): State<PointsAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> PointsResult<Json<Vec<PointRequestResponse>>>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let views = ListRequestsUseCase::new(state.repo.clone())
        .list_all(&identity)
        .await?;

    Ok(to_responses(views))
}

/// PATCH /api/points/request/{id}
pub async fn resolve_request<R>(
    State(state): State<PointsAppState<R>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Path(request_id), _): WithRejection<Path<Uuid>, PointsError>,
    WithRejection(Json(req), _): WithRejection<Json<ResolveRequestBody>, PointsError>,
) -> PointsResult<Json<PointRequestResponse>>
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    // Gate before the status value is checked; malformed JSON or ids are
    // already rejected with 400 by the extractors
    identity.require(UserRole::Admin)?;
    let decision = Decision::parse(&req.status)?;

    let view = ResolveRequestUseCase::new(state.repo.clone())
        .execute(&identity, PointRequestId::from_uuid(request_id), decision)
        .await?;

    Ok(Json(view.into()))
}
