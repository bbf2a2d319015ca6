//! Driven port for the append-only score store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{NewScore, ScoreId, ScoreRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by score repository adapters.
    pub enum ScoreRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "score repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "score repository query failed: {message}",
    }
}

/// Append-only store of score records.
///
/// Implementations must order [`ScoreRepository::list_top`] by score
/// descending, breaking ties by earliest insertion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Return at most `limit` records with the highest scores.
    async fn list_top(&self, limit: u32) -> Result<Vec<ScoreRecord>, ScoreRepositoryError>;

    /// Append a record, returning it with its assigned identifier.
    async fn insert(&self, score: &NewScore) -> Result<ScoreRecord, ScoreRepositoryError>;
}

/// In-memory repository used as a test double by handler and service tests.
#[derive(Debug, Default)]
pub struct FixtureScoreRepository {
    records: Mutex<Vec<ScoreRecord>>,
}

impl FixtureScoreRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ScoreRecord>>, ScoreRepositoryError> {
        self.records
            .lock()
            .map_err(|_| ScoreRepositoryError::query("fixture score store poisoned"))
    }
}

#[async_trait]
impl ScoreRepository for FixtureScoreRepository {
    async fn list_top(&self, limit: u32) -> Result<Vec<ScoreRecord>, ScoreRepositoryError> {
        let mut records = self.lock()?.clone();
        // Records are appended in id order; a stable sort keeps earlier ids first.
        records.sort_by(|a, b| b.score().cmp(&a.score()));
        records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(records)
    }

    async fn insert(&self, score: &NewScore) -> Result<ScoreRecord, ScoreRepositoryError> {
        let mut records = self.lock()?;
        let next_id = records.last().map_or(1, |last| last.id().get() + 1);
        let record = ScoreRecord::new(
            ScoreId::new(next_id),
            score.name.clone(),
            score.score,
            score.created_at,
        );
        records.push(record.clone());
        Ok(record)
    }
}
