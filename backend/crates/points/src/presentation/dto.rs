//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{LeaderboardEntry, PointRequestView};

/// Request for POST /api/points/request
///
/// `pointsRequested` is an integer on the wire; `12.5` or `"50"` fail to
/// deserialize and are reported as validation errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub points_requested: i64,
}

/// Request for PATCH /api/points/request/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequestBody {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRequestResponse {
    pub id: String,
    pub student: StudentResponse,
    pub title: String,
    pub description: String,
    pub points_requested: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PointRequestView> for PointRequestResponse {
    fn from(view: PointRequestView) -> Self {
        let PointRequestView { request, student } = view;
        Self {
            id: request.id.to_string(),
            student: StudentResponse {
                id: student.id.to_string(),
                name: student.name,
            },
            title: request.title.as_str().to_string(),
            description: request.description.as_str().to_string(),
            points_requested: request.points_requested.value(),
            status: request.status.code().to_string(),
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Row of GET /api/points/leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryResponse {
    pub id: String,
    pub name: String,
    pub points: i64,
    pub role: String,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.user_id.to_string(),
            name: entry.name,
            points: entry.points,
            role: entry.role.code().to_string(),
        }
    }
}
