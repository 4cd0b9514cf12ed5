//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::UserId;
use kernel::id::PointRequestId;

use crate::domain::entities::{LeaderboardEntry, PointRequest, PointRequestView};
use crate::domain::value_objects::Decision;
use crate::error::PointsResult;

/// Point request ledger
#[trait_variant::make(PointRequestRepository: Send)]
pub trait LocalPointRequestRepository {
    /// Store a new pending request and return it with its requester.
    ///
    /// Fails with `StudentNotFound` when the owner does not exist.
    async fn create(&self, request: &PointRequest) -> PointsResult<PointRequestView>;

    /// Atomically move a pending request to its terminal status and, when
    /// approved, credit the owner.
    ///
    /// - absent request: `RequestNotFound`
    /// - already terminal: `InvalidState`
    /// - owner missing on approval: `InconsistentState`, nothing changed
    async fn resolve(
        &self,
        id: &PointRequestId,
        decision: Decision,
    ) -> PointsResult<PointRequestView>;

    /// Requests owned by `student_id`, newest first
    async fn list_by_student(&self, student_id: &UserId) -> PointsResult<Vec<PointRequestView>>;

    /// All requests, newest first
    async fn list_all(&self) -> PointsResult<Vec<PointRequestView>>;
}

/// Leaderboard projection over user totals
#[trait_variant::make(LeaderboardRepository: Send)]
pub trait LocalLeaderboardRepository {
    /// Students only, points descending, then name, then id
    async fn leaderboard(&self) -> PointsResult<Vec<LeaderboardEntry>>;
}
