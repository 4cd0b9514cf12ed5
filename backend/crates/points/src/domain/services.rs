//! Domain Services
//!
//! Pure ordering rules for ledger reads.

use std::cmp::Ordering;

use crate::domain::entities::{LeaderboardEntry, PointRequest};

/// Points descending, then name ascending, then id ascending.
pub fn leaderboard_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

/// Keep students only and sort them for display
pub fn rank_leaderboard(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<_> = entries
        .into_iter()
        .filter(|entry| !entry.role.is_admin())
        .collect();
    ranked.sort_by(leaderboard_order);
    ranked
}

/// Newest first: `created_at` descending, then id descending.
pub fn newest_first(a: &PointRequest, b: &PointRequest) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}
