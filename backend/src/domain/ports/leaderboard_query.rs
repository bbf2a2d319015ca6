//! Driving port for reading the public leaderboard.

use async_trait::async_trait;

use crate::domain::{Error, LeaderboardEntry};

/// Use-case port serving the top-ranked entries.
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Return the leaderboard, best score first.
    async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, Error>;
}
