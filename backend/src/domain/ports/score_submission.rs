//! Driving port for recording a new score.

use async_trait::async_trait;

use crate::domain::{Error, ScoreRecord};

/// Raw submission as received from a client, before name normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub score: i64,
}

/// Use-case port appending a score to the leaderboard.
#[async_trait]
pub trait ScoreSubmission: Send + Sync {
    /// Normalise and persist the submission.
    async fn submit(&self, request: SubmitScoreRequest) -> Result<ScoreRecord, Error>;
}
