//! Domain Entities
//!
//! Core business entities for the points ledger.

use auth::{UserId, UserRole};
use chrono::{DateTime, Utc};
use kernel::id::PointRequestId;

use crate::domain::value_objects::{
    Decision, Description, PointsRequested, RequestStatus, RequestTitle,
};
use crate::error::{PointsError, PointsResult};

/// PointRequest entity - a student's claim for points
#[derive(Debug, Clone)]
pub struct PointRequest {
    pub id: PointRequestId,
    pub student_id: UserId,
    pub title: RequestTitle,
    pub description: Description,
    pub points_requested: PointsRequested,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PointRequest {
    /// Create a new pending request
    pub fn new(
        student_id: UserId,
        title: RequestTitle,
        description: Description,
        points_requested: PointsRequested,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PointRequestId::new(),
            student_id,
            title,
            description,
            points_requested,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a decision. Only `pending` requests can be resolved.
    ///
    /// Returns the amount to credit to the owner (zero on rejection).
    pub fn resolve(&mut self, decision: Decision) -> PointsResult<i64> {
        if self.status.is_terminal() {
            return Err(PointsError::InvalidState {
                current: self.status,
            });
        }

        self.status = decision.status();
        self.updated_at = Utc::now();

        Ok(if decision.credits() {
            self.points_requested.value()
        } else {
            0
        })
    }
}

/// Requester embedded in every listed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRef {
    pub id: UserId,
    pub name: String,
}

/// A request together with its requester
#[derive(Debug, Clone)]
pub struct PointRequestView {
    pub request: PointRequest,
    pub student: StudentRef,
}

/// One row of the leaderboard projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub name: String,
    pub points: i64,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(points: i64) -> PointRequest {
        PointRequest::new(
            UserId::new(),
            RequestTitle::new("Won the hackathon").unwrap(),
            Description::default(),
            PointsRequested::new(points, 10_000).unwrap(),
        )
    }

    #[test]
    fn test_new_request_is_pending() {
        let request = pending(50);
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.points_requested.value(), 50);
        assert_eq!(request.created_at, request.updated_at);
    }

    #[test]
    fn test_resolve_once() {
        let mut request = pending(50);
        assert_eq!(request.resolve(Decision::Approved).unwrap(), 50);
        assert_eq!(request.status, RequestStatus::Approved);

        assert!(matches!(
            request.resolve(Decision::Rejected),
            Err(PointsError::InvalidState {
                current: RequestStatus::Approved
            })
        ));
        assert_eq!(request.status, RequestStatus::Approved);
    }

    #[test]
    fn test_reject_credits_nothing() {
        let mut request = pending(10);
        assert_eq!(request.resolve(Decision::Rejected).unwrap(), 0);
        assert_eq!(request.status, RequestStatus::Rejected);
    }
}
