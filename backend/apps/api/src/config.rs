//! Server Configuration
//!
//! Everything the binary reads from the environment, parsed once at startup.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use platform::crypto::SECRET_LEN;
use points::PointsConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 3600;
const DEFAULT_ADMIN_NAME: &str = "Admin";

/// Bootstrap admin credentials
#[derive(Clone)]
pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub points: PointsConfig,
    pub admin: Option<AdminBootstrap>,
}

impl ServerConfig {
    /// Read from process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `allow_random_secret` lets debug builds run without `AUTH_TOKEN_SECRET`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        allow_random_secret: bool,
    ) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR must look like 0.0.0.0:5001")?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let token_ttl = match get("AUTH_TOKEN_TTL_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .context("AUTH_TOKEN_TTL_SECS must be a number of seconds")?,
            ),
            None => Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
        };

        let mut auth = match get("AUTH_TOKEN_SECRET") {
            Some(secret_b64) => AuthConfig::new(decode_secret(&secret_b64)?, token_ttl),
            None if allow_random_secret => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig {
                    token_ttl,
                    ..AuthConfig::development()
                }
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };
        if let Some(pepper) = get("AUTH_PASSWORD_PEPPER") {
            auth = auth.with_pepper(pepper.into_bytes());
        }

        let points = match get("POINTS_MAX_PER_REQUEST") {
            Some(v) => {
                let max: i64 = v
                    .trim()
                    .parse()
                    .context("POINTS_MAX_PER_REQUEST must be an integer")?;
                if max < 1 {
                    bail!("POINTS_MAX_PER_REQUEST must be at least 1");
                }
                PointsConfig::new(max)
            }
            None => PointsConfig::default(),
        };

        let admin = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                name: get("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                email,
                password,
            }),
            (None, None) => None,
            _ => bail!("ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
            points,
            admin,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; SECRET_LEN]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!(
            "AUTH_TOKEN_SECRET must decode to {SECRET_LEN} bytes (got {})",
            bytes.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]), true).unwrap();

        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bind_addr.port(), 5001);
        assert_eq!(
            config.frontend_origins,
            ["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert_eq!(config.auth.token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.points.max_points_per_request, 10_000);
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(ServerConfig::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_secret_required_without_fallback() {
        let env = [("DATABASE_URL", "postgres://x")];
        assert!(ServerConfig::from_lookup(lookup(&env), false).is_err());
    }

    #[test]
    fn test_secret_decoding() {
        let secret = general_purpose::STANDARD.encode([9u8; 32]);
        let config = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://x"), ("AUTH_TOKEN_SECRET", &secret)]),
            false,
        )
        .unwrap();
        assert_eq!(config.auth.token_secret, [9u8; 32]);

        let short = general_purpose::STANDARD.encode([9u8; 16]);
        assert!(
            ServerConfig::from_lookup(
                lookup(&[("DATABASE_URL", "postgres://x"), ("AUTH_TOKEN_SECRET", &short)]),
                false,
            )
            .is_err()
        );
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://x"),
                ("DATABASE_MAX_CONNECTIONS", "12"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("FRONTEND_ORIGINS", "https://a.example, https://b.example"),
                ("AUTH_TOKEN_TTL_SECS", "60"),
                ("AUTH_PASSWORD_PEPPER", "pepper"),
                ("POINTS_MAX_PER_REQUEST", "500"),
            ]),
            true,
        )
        .unwrap();

        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.frontend_origins, ["https://a.example", "https://b.example"]);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.points.max_points_per_request, 500);
    }

    #[test]
    fn test_admin_bootstrap() {
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://x"),
                ("ADMIN_EMAIL", "admin@test.com"),
                ("ADMIN_PASSWORD", "admin pass 123"),
            ]),
            true,
        )
        .unwrap();
        let admin = config.admin.unwrap();
        assert_eq!(admin.name, "Admin");
        assert!(!format!("{admin:?}").contains("admin pass"));

        assert!(
            ServerConfig::from_lookup(
                lookup(&[("DATABASE_URL", "postgres://x"), ("ADMIN_EMAIL", "a@b.com")]),
                true,
            )
            .is_err()
        );
        assert!(
            ServerConfig::from_lookup(
                lookup(&[("DATABASE_URL", "postgres://x"), ("POINTS_MAX_PER_REQUEST", "0")]),
                true,
            )
            .is_err()
        );
    }
}
