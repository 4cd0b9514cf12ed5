//! Domain Value Objects
//!
//! Immutable value types for the ledger.

use std::fmt;

use crate::error::{PointsError, PointsResult};

pub const TITLE_MAX_LENGTH: usize = 200;
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// Lifecycle of a point request. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    /// Wire and storage code
    pub const fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Admin decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub const ALL: [Decision; 2] = [Decision::Approved, Decision::Rejected];

    /// Same code as the status the decision leads to
    pub const fn code(&self) -> &'static str {
        self.status().code()
    }

    /// Only the two terminal statuses are decisions; `"pending"` is not.
    pub fn parse(raw: &str) -> PointsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|decision| decision.code() == raw)
            .ok_or_else(|| {
                PointsError::Validation(format!(
                    "Invalid status '{raw}': expected \"approved\" or \"rejected\""
                ))
            })
    }

    pub const fn status(&self) -> RequestStatus {
        match self {
            Decision::Approved => RequestStatus::Approved,
            Decision::Rejected => RequestStatus::Rejected,
        }
    }

    pub fn credits(&self) -> bool {
        matches!(self, Decision::Approved)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Requested amount, `1..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRequested(i64);

impl PointsRequested {
    pub fn new(value: i64, max: i64) -> PointsResult<Self> {
        if value < 1 {
            return Err(PointsError::Validation(
                "pointsRequested must be a positive integer".to_string(),
            ));
        }
        if value > max {
            return Err(PointsError::Validation(format!(
                "pointsRequested must be at most {max}"
            )));
        }
        Ok(Self(value))
    }

    /// Create from database value (CHECK constraint already holds)
    pub fn from_db(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Trimmed, non-empty title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTitle(String);

impl RequestTitle {
    pub fn new(raw: &str) -> PointsResult<Self> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(PointsError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(PointsError::Validation(format!(
                "Title must be at most {TITLE_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(title.to_string()))
    }

    pub fn from_db(title: String) -> Self {
        Self(title)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free text, may be empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description(String);

impl Description {
    pub fn new(raw: Option<&str>) -> PointsResult<Self> {
        let description = raw.map(str::trim).unwrap_or_default();
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(PointsError::Validation(format!(
                "Description must be at most {DESCRIPTION_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(description.to_string()))
    }

    pub fn from_db(description: String) -> Self {
        Self(description)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in RequestStatus::ALL {
            assert_eq!(RequestStatus::from_code(status.code()), Some(status));
            assert_eq!(status.to_string(), status.code());
        }
        assert_eq!(RequestStatus::from_code("Approved"), None);
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(Decision::parse("approved").unwrap(), Decision::Approved);
        assert_eq!(Decision::parse("rejected").unwrap(), Decision::Rejected);
        assert!(matches!(
            Decision::parse("pending"),
            Err(PointsError::Validation(_))
        ));
        assert!(Decision::parse("APPROVED").is_err());
        assert!(Decision::parse("").is_err());
        assert!(Decision::Approved.credits());
        assert!(!Decision::Rejected.credits());
    }

    #[test]
    fn test_decision_codes_follow_status() {
        for decision in Decision::ALL {
            assert_eq!(decision.code(), decision.status().code());
            assert_eq!(decision.to_string(), decision.code());
            assert_eq!(Decision::parse(decision.code()).unwrap(), decision);
            assert_eq!(
                RequestStatus::from_code(decision.code()),
                Some(decision.status())
            );
        }
        assert_eq!(
            RequestStatus::ALL.map(|s| s.code()),
            ["pending", "approved", "rejected"]
        );
    }

    #[test]
    fn test_points_requested_bounds() {
        assert_eq!(PointsRequested::new(1, 10_000).unwrap().value(), 1);
        assert_eq!(PointsRequested::new(10_000, 10_000).unwrap().value(), 10_000);
        assert!(PointsRequested::new(0, 10_000).is_err());
        assert!(PointsRequested::new(-5, 10_000).is_err());
        assert!(PointsRequested::new(10_001, 10_000).is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(RequestTitle::new("  Hackathon win ").unwrap().as_str(), "Hackathon win");
        assert!(RequestTitle::new("   ").is_err());
        assert!(RequestTitle::new(&"t".repeat(TITLE_MAX_LENGTH)).is_ok());
        assert!(RequestTitle::new(&"t".repeat(TITLE_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_description() {
        assert_eq!(Description::new(None).unwrap().as_str(), "");
        assert!(Description::new(Some(&"d".repeat(DESCRIPTION_MAX_LENGTH))).is_ok());
        assert!(Description::new(Some(&"d".repeat(DESCRIPTION_MAX_LENGTH + 1))).is_err());
    }
}
