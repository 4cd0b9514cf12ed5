//! Points Router

use auth::{AuthConfig, AuthMiddlewareState, require_identity};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::PointsConfig;
use crate::domain::repository::{LeaderboardRepository, PointRequestRepository};
use crate::infra::postgres::PgPointsRepository;
use crate::presentation::handlers::{self, PointsAppState};

/// Create the points router with PostgreSQL repository
pub fn points_router(
    repo: PgPointsRepository,
    config: Arc<PointsConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router {
    points_router_generic(repo, config, auth_config)
}

/// Create a generic points router for any repository implementation
///
/// Everything except the leaderboard sits behind `require_identity`.
pub fn points_router_generic<R>(
    repo: R,
    config: Arc<PointsConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    points_router_shared(Arc::new(repo), config, auth_config)
}

/// Same as [`points_router_generic`], for callers that keep a handle on the repository
pub fn points_router_shared<R>(
    repo: Arc<R>,
    config: Arc<PointsConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: PointRequestRepository + LeaderboardRepository + Send + Sync + 'static,
{
    let state = PointsAppState { repo, config };

    let protected = Router::new()
        .route("/request", post(handlers::submit_request::<R>))
        .route("/request/{id}", patch(handlers::resolve_request::<R>))
        .route("/requests", get(handlers::my_requests::<R>))
        .route("/students/{id}/requests", get(handlers::student_requests::<R>))
        .route("/all-requests", get(handlers::all_requests::<R>))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(auth_config),
            require_identity,
        ));

    Router::new()
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .merge(protected)
        .with_state(state)
}
