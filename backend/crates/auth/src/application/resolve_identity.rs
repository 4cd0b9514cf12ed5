//! Resolve Identity Use Case
//!
//! Turns an `Authorization: Bearer` header into an [`Identity`].
//! Pure verification, no storage access.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::token::verify_token;
use crate::domain::value_object::identity::Identity;
use crate::error::AuthResult;

pub struct ResolveIdentityUseCase {
    config: Arc<AuthConfig>,
}

impl ResolveIdentityUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let token = extract_bearer(headers)?;
        self.resolve_token(token)
    }

    pub fn resolve_token(&self, token: &str) -> AuthResult<Identity> {
        verify_token(&self.config, token, chrono::Utc::now().timestamp_millis())
    }
}
