//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod leaderboard_query;
mod score_repository;
mod score_submission;

pub use leaderboard_query::LeaderboardQuery;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
pub use score_repository::{FixtureScoreRepository, ScoreRepository, ScoreRepositoryError};
pub use score_submission::{ScoreSubmission, SubmitScoreRequest};
