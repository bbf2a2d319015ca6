//! Domain primitives, ports and services.
//!
//! Purpose: Define the strongly typed leaderboard model used by the HTTP and
//! persistence adapters, plus the service that owns submission rules.
//!
//! Public surface:
//! - Error (alias to `error::Error`): domain failure with a stable code.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - PlayerName, ScoreRecord, LeaderboardEntry: leaderboard data.
//! - LeaderboardService: implements the score driving ports.
//! - TraceId: per-request correlation identifier.

pub mod error;
pub mod leaderboard_service;
pub mod ports;
pub mod score;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::leaderboard_service::LeaderboardService;
pub use self::score::{
    ANONYMOUS_PLAYER_NAME, LEADERBOARD_SIZE, LeaderboardEntry, NewScore, PLAYER_NAME_MAX,
    PlayerName, PlayerNameValidationError, ScoreId, ScoreRecord,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
