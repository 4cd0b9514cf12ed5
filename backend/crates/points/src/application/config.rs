//! Application Configuration
//!
//! Configuration for the points application layer.

/// Points application configuration
#[derive(Debug, Clone)]
pub struct PointsConfig {
    /// Upper bound for `pointsRequested` on a single request
    pub max_points_per_request: i64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            max_points_per_request: 10_000,
        }
    }
}

impl PointsConfig {
    pub fn new(max_points_per_request: i64) -> Self {
        Self {
            max_points_per_request,
        }
    }
}
