//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Every use case takes the caller's resolved `Identity` and applies the
//! role gate before touching storage.

pub mod config;
pub mod get_leaderboard;
pub mod list_requests;
pub mod resolve_request;
pub mod submit_request;
