//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (PointRequest, LeaderboardEntry)
//! - Domain value objects (RequestStatus, Decision, PointsRequested, ...)
//! - Domain services (leaderboard ordering)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
