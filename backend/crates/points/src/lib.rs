//! Points Backend Module
//!
//! Point request ledger and leaderboard projection.
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - A request moves `pending -> approved` or `pending -> rejected`, exactly once
//! - Approval credits exactly `pointsRequested` to the owner in the same transaction
//! - The leaderboard is read straight from current totals, never cached

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PointsConfig;
pub use error::{PointsError, PointsResult};
pub use infra::postgres::PgPointsRepository;
pub use presentation::router::points_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
