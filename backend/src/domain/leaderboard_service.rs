//! Leaderboard domain service.
//!
//! Implements the [`LeaderboardQuery`] and [`ScoreSubmission`] driving ports
//! on top of a [`ScoreRepository`], owning name normalisation and timestamp
//! assignment so adapters never touch either.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    LeaderboardQuery, ScoreRepository, ScoreRepositoryError, ScoreSubmission, SubmitScoreRequest,
};
use crate::domain::{Error, LEADERBOARD_SIZE, LeaderboardEntry, NewScore, PlayerName, ScoreRecord};

fn map_repository_error(error: ScoreRepositoryError) -> Error {
    match error {
        ScoreRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("score repository unavailable: {message}"))
        }
        ScoreRepositoryError::Query { message } => {
            Error::internal(format!("score repository error: {message}"))
        }
    }
}

/// Leaderboard service implementing both score driving ports.
#[derive(Clone)]
pub struct LeaderboardService<R> {
    score_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> LeaderboardService<R> {
    /// Create a service over a score repository and a clock.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use scoreboard::domain::LeaderboardService;
    /// use scoreboard::domain::ports::FixtureScoreRepository;
    ///
    /// let service = LeaderboardService::new(
    ///     Arc::new(FixtureScoreRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(score_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { score_repo, clock }
    }
}

#[async_trait]
impl<R> LeaderboardQuery for LeaderboardService<R>
where
    R: ScoreRepository,
{
    async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        let records = self
            .score_repo
            .list_top(LEADERBOARD_SIZE)
            .await
            .map_err(map_repository_error)?;

        Ok(records.into_iter().map(LeaderboardEntry::from).collect())
    }
}

#[async_trait]
impl<R> ScoreSubmission for LeaderboardService<R>
where
    R: ScoreRepository,
{
    async fn submit(&self, request: SubmitScoreRequest) -> Result<ScoreRecord, Error> {
        let new_score = NewScore {
            name: PlayerName::normalise(&request.name),
            score: request.score,
            created_at: self.clock.utc(),
        };

        let record = self
            .score_repo
            .insert(&new_score)
            .await
            .map_err(map_repository_error)?;

        debug!(
            score_id = %record.id(),
            name = %record.name(),
            score = record.score(),
            "score recorded"
        );
        Ok(record)
    }
}

#[cfg(test)]
#[path = "leaderboard_service_tests.rs"]
mod tests;
