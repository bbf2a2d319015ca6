//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LeaderboardQuery, ScoreSubmission};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub leaderboard: Arc<dyn LeaderboardQuery>,
    pub submissions: Arc<dyn ScoreSubmission>,
}

impl HttpState {
    /// Construct state from the leaderboard ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use scoreboard::domain::LeaderboardService;
    /// use scoreboard::domain::ports::FixtureScoreRepository;
    /// use scoreboard::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(LeaderboardService::new(
    ///     Arc::new(FixtureScoreRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _leaderboard = state.leaderboard.clone();
    /// ```
    pub fn new(
        leaderboard: Arc<dyn LeaderboardQuery>,
        submissions: Arc<dyn ScoreSubmission>,
    ) -> Self {
        Self {
            leaderboard,
            submissions,
        }
    }
}
