//! Bearer Credential Extraction
//!
//! Parses `Authorization: Bearer <token>` headers (RFC 6750).

use http::{HeaderMap, HeaderValue, header};
use thiserror::Error;

/// Why a bearer credential could not be read from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Authorization header is missing")]
    Missing,

    #[error("Authorization header is not a Bearer credential")]
    WrongScheme,

    #[error("Bearer token is empty")]
    Empty,
}

/// Extract the bearer token from request headers.
///
/// The scheme is matched case-insensitively, as RFC 7235 requires.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::WrongScheme)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::WrongScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Empty);
    }

    Ok(token)
}

/// `WWW-Authenticate` challenge sent with 401 responses
pub fn www_authenticate_challenge(error: Option<&str>) -> HeaderValue {
    match error {
        Some(code) => HeaderValue::from_str(&format!("Bearer error=\"{code}\""))
            .unwrap_or_else(|_| HeaderValue::from_static("Bearer")),
        None => HeaderValue::from_static("Bearer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Ok("abc.def"));

        let headers = headers_with("bearer   abc.def ");
        assert_eq!(extract_bearer(&headers), Ok("abc.def"));
    }

    #[test]
    fn test_extract_bearer_missing() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_extract_bearer_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), Err(BearerError::WrongScheme));

        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer(&headers), Err(BearerError::WrongScheme));
    }

    #[test]
    fn test_extract_bearer_empty() {
        let headers = headers_with("Bearer    ");
        assert_eq!(extract_bearer(&headers), Err(BearerError::Empty));
    }

    #[test]
    fn test_www_authenticate_challenge() {
        assert_eq!(www_authenticate_challenge(None), "Bearer");
        assert_eq!(
            www_authenticate_challenge(Some("invalid_token")),
            "Bearer error=\"invalid_token\""
        );
    }
}
