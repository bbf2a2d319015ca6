//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use scoreboard::domain::LeaderboardService;
use scoreboard::inbound::http::state::HttpState;
use scoreboard::outbound::persistence::{DbPool, DieselScoreRepository};

/// Build the shared HTTP state: one SQLite-backed leaderboard service
/// exposed through both driving ports.
pub(super) fn build_http_state(db_pool: &DbPool) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let repo = Arc::new(DieselScoreRepository::new(db_pool.clone()));
    let service = Arc::new(LeaderboardService::new(repo, clock));

    web::Data::new(HttpState::new(service.clone(), service))
}
