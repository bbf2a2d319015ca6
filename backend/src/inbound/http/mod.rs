//! HTTP inbound adapter exposing the leaderboard endpoints.

pub mod error;
pub mod health;
pub mod landing;
pub mod schemas;
pub mod scores;
pub mod state;

pub use error::ApiResult;
