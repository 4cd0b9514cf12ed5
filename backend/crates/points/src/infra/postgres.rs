//! PostgreSQL Repository Implementations

use auth::{UserId, UserRole};
use chrono::{DateTime, Utc};
use kernel::id::PointRequestId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{LeaderboardEntry, PointRequest, PointRequestView, StudentRef};
use crate::domain::repository::{LeaderboardRepository, PointRequestRepository};
use crate::domain::value_objects::{
    Decision, Description, PointsRequested, RequestStatus, RequestTitle,
};
use crate::error::{PointsError, PointsResult};

/// PostgreSQL-backed points repository
#[derive(Clone)]
pub struct PgPointsRepository {
    pool: PgPool,
}

impl PgPointsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ============================================================================
// Point Request Repository Implementation
// ============================================================================

impl PointRequestRepository for PgPointsRepository {
    async fn create(&self, request: &PointRequest) -> PointsResult<PointRequestView> {
        let row = sqlx::query_as::<_, PointRequestRow>(
            r#"
            WITH inserted AS (
                INSERT INTO point_requests (
                    request_id,
                    student_id,
                    title,
                    description,
                    points_requested,
                    status,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
            )
            SELECT
                i.request_id,
                i.student_id,
                u.display_name AS student_name,
                i.title,
                i.description,
                i.points_requested,
                i.status,
                i.created_at,
                i.updated_at
            FROM inserted i
            JOIN users u ON u.user_id = i.student_id
            "#,
        )
        .bind(request.id.as_uuid())
        .bind(request.student_id.as_uuid())
        .bind(request.title.as_str())
        .bind(request.description.as_str())
        .bind(request.points_requested.value())
        .bind(request.status.code())
        .bind(request.created_at)
        .bind(request.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                PointsError::StudentNotFound
            } else {
                PointsError::Database(e)
            }
        })?;

        row.into_view()
    }

    async fn resolve(
        &self,
        id: &PointRequestId,
        decision: Decision,
    ) -> PointsResult<PointRequestView> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        // Row lock: a concurrent resolve waits here, then matches nothing
        let updated = sqlx::query_as::<_, (Uuid, i64)>(
            r#"
            UPDATE point_requests
            SET status = $2, updated_at = $3
            WHERE request_id = $1 AND status = 'pending'
            RETURNING student_id, points_requested
            "#,
        )
        .bind(id.as_uuid())
        .bind(decision.status().code())
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((student_id, points_requested)) = updated else {
            let current = sqlx::query_scalar::<_, String>(
                "SELECT status FROM point_requests WHERE request_id = $1",
            )
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await?;
            tx.rollback().await?;

            return match current {
                None => Err(PointsError::RequestNotFound),
                Some(code) => Err(PointsError::InvalidState {
                    current: parse_status(&code)?,
                }),
            };
        };

        if decision.credits() {
            let credited = sqlx::query(
                r#"
                UPDATE users
                SET points = points + $2, updated_at = $3
                WHERE user_id = $1
                "#,
            )
            .bind(student_id)
            .bind(points_requested)
            .bind(now)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if credited == 0 {
                tx.rollback().await?;
                return Err(PointsError::InconsistentState(format!(
                    "owner {student_id} of request {id} does not exist"
                )));
            }
        }

        let row = sqlx::query_as::<_, PointRequestRow>(
            r#"
            SELECT
                r.request_id,
                r.student_id,
                u.display_name AS student_name,
                r.title,
                r.description,
                r.points_requested,
                r.status,
                r.created_at,
                r.updated_at
            FROM point_requests r
            JOIN users u ON u.user_id = r.student_id
            WHERE r.request_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        row.into_view()
    }

    async fn list_by_student(&self, student_id: &UserId) -> PointsResult<Vec<PointRequestView>> {
        let rows = sqlx::query_as::<_, PointRequestRow>(
            r#"
            SELECT
                r.request_id,
                r.student_id,
                u.display_name AS student_name,
                r.title,
                r.description,
                r.points_requested,
                r.status,
                r.created_at,
                r.updated_at
            FROM point_requests r
            JOIN users u ON u.user_id = r.student_id
            WHERE r.student_id = $1
            ORDER BY r.created_at DESC, r.request_id DESC
            "#,
        )
        .bind(student_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PointRequestRow::into_view).collect()
    }

    async fn list_all(&self) -> PointsResult<Vec<PointRequestView>> {
        let rows = sqlx::query_as::<_, PointRequestRow>(
            r#"
            SELECT
                r.request_id,
                r.student_id,
                u.display_name AS student_name,
                r.title,
                r.description,
                r.points_requested,
                r.status,
                r.created_at,
                r.updated_at
            FROM point_requests r
            JOIN users u ON u.user_id = r.student_id
            ORDER BY r.created_at DESC, r.request_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PointRequestRow::into_view).collect()
    }
}

// ============================================================================
// Leaderboard Repository Implementation
// ============================================================================

impl LeaderboardRepository for PgPointsRepository {
    async fn leaderboard(&self) -> PointsResult<Vec<LeaderboardEntry>> {
        // COLLATE "C" keeps name ties in byte order, same as the domain ordering
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT user_id, display_name, points, user_role
            FROM users
            WHERE user_role = $1
            ORDER BY points DESC, display_name COLLATE "C" ASC, user_id ASC
            "#,
        )
        .bind(UserRole::Student.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LeaderboardRow::into_entry).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

fn parse_status(code: &str) -> PointsResult<RequestStatus> {
    RequestStatus::from_code(code)
        .ok_or_else(|| PointsError::Internal(format!("Unknown request status: {code}")))
}

#[derive(sqlx::FromRow)]
struct PointRequestRow {
    request_id: Uuid,
    student_id: Uuid,
    student_name: String,
    title: String,
    description: String,
    points_requested: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PointRequestRow {
    fn into_view(self) -> PointsResult<PointRequestView> {
        let student_id = UserId::from_uuid(self.student_id);

        Ok(PointRequestView {
            request: PointRequest {
                id: PointRequestId::from_uuid(self.request_id),
                student_id,
                title: RequestTitle::from_db(self.title),
                description: Description::from_db(self.description),
                points_requested: PointsRequested::from_db(self.points_requested),
                status: parse_status(&self.status)?,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            student: StudentRef {
                id: student_id,
                name: self.student_name,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    user_id: Uuid,
    display_name: String,
    points: i64,
    user_role: i16,
}

impl LeaderboardRow {
    fn into_entry(self) -> PointsResult<LeaderboardEntry> {
        let role = UserRole::from_id(self.user_role).ok_or_else(|| {
            PointsError::Internal(format!("Unknown user_role id: {}", self.user_role))
        })?;

        Ok(LeaderboardEntry {
            user_id: UserId::from_uuid(self.user_id),
            name: self.display_name,
            points: self.points,
            role,
        })
    }
}
