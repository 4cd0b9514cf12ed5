//! In-memory repository for tests
//!
//! One `RwLock` over users and requests; `resolve` runs under the write lock
//! so the status change and the credit are a single step.

use auth::{UserId, UserRole};
use kernel::id::PointRequestId;
use tokio::sync::RwLock;

use crate::domain::entities::{LeaderboardEntry, PointRequest, PointRequestView, StudentRef};
use crate::domain::repository::{LeaderboardRepository, PointRequestRepository};
use crate::domain::services::rank_leaderboard;
use crate::domain::value_objects::{Decision, RequestStatus};
use crate::error::{PointsError, PointsResult};

#[derive(Debug, Clone)]
struct StoredUser {
    id: UserId,
    name: String,
    role: UserRole,
    points: i64,
}

#[derive(Default)]
struct State {
    users: Vec<StoredUser>,
    /// Insertion order; listing walks it backwards
    requests: Vec<PointRequest>,
}

impl State {
    fn view(&self, request: &PointRequest) -> PointsResult<PointRequestView> {
        let student = self
            .users
            .iter()
            .find(|u| u.id == request.student_id)
            .ok_or(PointsError::StudentNotFound)?;

        Ok(PointRequestView {
            request: request.clone(),
            student: StudentRef {
                id: student.id,
                name: student.name.clone(),
            },
        })
    }

    fn views<'a>(
        &self,
        requests: impl Iterator<Item = &'a PointRequest>,
    ) -> PointsResult<Vec<PointRequestView>> {
        requests.map(|r| self.view(r)).collect()
    }
}

#[derive(Default)]
pub struct InMemoryPointsRepository {
    state: RwLock<State>,
}

impl InMemoryPointsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_user(&self, name: &str, role: UserRole) -> UserId {
        self.seed_user_with_points(name, role, 0).await
    }

    pub async fn seed_user_with_points(&self, name: &str, role: UserRole, points: i64) -> UserId {
        let id = UserId::new();
        self.state.write().await.users.push(StoredUser {
            id,
            name: name.to_string(),
            role,
            points,
        });
        id
    }

    /// Drop a user while leaving their requests behind
    pub async fn remove_user(&self, id: &UserId) {
        self.state.write().await.users.retain(|u| &u.id != id);
    }

    pub async fn points_of(&self, id: &UserId) -> Option<i64> {
        self.state
            .read()
            .await
            .users
            .iter()
            .find(|u| &u.id == id)
            .map(|u| u.points)
    }

    pub async fn status_of(&self, id: &PointRequestId) -> Option<RequestStatus> {
        self.state
            .read()
            .await
            .requests
            .iter()
            .find(|r| &r.id == id)
            .map(|r| r.status)
    }

    pub async fn request_count(&self) -> usize {
        self.state.read().await.requests.len()
    }
}

impl PointRequestRepository for InMemoryPointsRepository {
    async fn create(&self, request: &PointRequest) -> PointsResult<PointRequestView> {
        let mut state = self.state.write().await;
        let view = state.view(request)?;
        state.requests.push(request.clone());
        Ok(view)
    }

    async fn resolve(
        &self,
        id: &PointRequestId,
        decision: Decision,
    ) -> PointsResult<PointRequestView> {
        let mut state = self.state.write().await;

        let index = state
            .requests
            .iter()
            .position(|r| &r.id == id)
            .ok_or(PointsError::RequestNotFound)?;

        // Work on a copy so a failed step leaves nothing behind
        let mut request = state.requests[index].clone();
        let credit = request.resolve(decision)?;

        if credit > 0 && !state.users.iter().any(|u| u.id == request.student_id) {
            return Err(PointsError::InconsistentState(format!(
                "owner {} of request {} does not exist",
                request.student_id, request.id
            )));
        }
        let view = state.view(&request)?;

        if let Some(owner) = state.users.iter_mut().find(|u| u.id == request.student_id) {
            owner.points += credit;
        }
        state.requests[index] = request;

        Ok(view)
    }

    async fn list_by_student(&self, student_id: &UserId) -> PointsResult<Vec<PointRequestView>> {
        let state = self.state.read().await;
        state.views(
            state
                .requests
                .iter()
                .rev()
                .filter(|r| &r.student_id == student_id),
        )
    }

    async fn list_all(&self) -> PointsResult<Vec<PointRequestView>> {
        let state = self.state.read().await;
        state.views(state.requests.iter().rev())
    }
}

impl LeaderboardRepository for InMemoryPointsRepository {
    async fn leaderboard(&self) -> PointsResult<Vec<LeaderboardEntry>> {
        let state = self.state.read().await;
        Ok(rank_leaderboard(state.users.iter().map(|u| LeaderboardEntry {
            user_id: u.id,
            name: u.name.clone(),
            points: u.points,
            role: u.role,
        })))
    }
}
