//! Bearer Token
//!
//! Stateless signed token:
//! `base64url(claims_json) "." base64url(HMAC-SHA256(secret, first_segment))`.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{identity::Identity, user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Token claims. Times are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at_ms: i64,
}

/// Sign a token for `identity`, valid for `config.token_ttl` from `now_ms`.
pub fn issue_token(config: &AuthConfig, identity: Identity, now_ms: i64) -> AuthResult<IssuedToken> {
    let claims = TokenClaims {
        sub: identity.user_id.into_uuid(),
        role: identity.role.code().to_string(),
        iat: now_ms,
        exp: now_ms.saturating_add(config.token_ttl_ms()),
    };

    let json = serde_json::to_vec(&claims)
        .map_err(|e| AuthError::Internal(format!("Token serialization failed: {e}")))?;
    let payload = to_base64url(&json);
    let tag = hmac_sha256(&config.token_secret, payload.as_bytes())
        .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))?;
    let signature = to_base64url(&tag);

    Ok(IssuedToken {
        token: format!("{payload}.{signature}"),
        expires_at_ms: claims.exp,
    })
}

/// Verify signature and expiry, then resolve the claims to an identity.
///
/// The signature is checked before the payload is parsed.
pub fn verify_token(config: &AuthConfig, token: &str, now_ms: i64) -> AuthResult<Identity> {
    let (payload, signature) = token
        .split_once('.')
        .ok_or(AuthError::InvalidCredential)?;
    if payload.is_empty() || signature.contains('.') {
        return Err(AuthError::InvalidCredential);
    }

    let signature = from_base64url(signature).map_err(|_| AuthError::InvalidCredential)?;
    if !verify_hmac_sha256(&config.token_secret, payload.as_bytes(), &signature) {
        return Err(AuthError::InvalidCredential);
    }

    let json = from_base64url(payload).map_err(|_| AuthError::InvalidCredential)?;
    let claims: TokenClaims =
        serde_json::from_slice(&json).map_err(|_| AuthError::InvalidCredential)?;

    let role = UserRole::from_code(&claims.role).ok_or(AuthError::InvalidCredential)?;

    if claims.exp <= now_ms {
        return Err(AuthError::CredentialExpired);
    }

    Ok(Identity::new(UserId::from_uuid(claims.sub), role))
}
