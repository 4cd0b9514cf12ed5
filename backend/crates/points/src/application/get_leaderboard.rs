//! Get Leaderboard Use Case
//!
//! Public, uncached read of current student totals.

use std::sync::Arc;

use crate::domain::entities::LeaderboardEntry;
use crate::domain::repository::LeaderboardRepository;
use crate::error::PointsResult;

pub struct GetLeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    repo: Arc<L>,
}

impl<L> GetLeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> PointsResult<Vec<LeaderboardEntry>> {
        self.repo.leaderboard().await
    }
}
