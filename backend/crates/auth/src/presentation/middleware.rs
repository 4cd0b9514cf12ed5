//! Auth Middleware
//!
//! Middleware for requiring a bearer identity on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::ResolveIdentityUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Resolve the bearer token and insert the [`Identity`] into request
/// extensions. Handlers read it with `Extension<Identity>`.
///
/// [`Identity`]: crate::domain::value_object::identity::Identity
pub async fn require_identity(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = ResolveIdentityUseCase::new(state.config).execute(req.headers())?;

    tracing::debug!(user_id = %identity.user_id, role = %identity.role, "Identity resolved");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
