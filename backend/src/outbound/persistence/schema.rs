//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Append-only leaderboard submissions.
    ///
    /// `scores_score_id_idx (score DESC, id ASC)` serves the top-N query.
    scores (id) {
        /// Autoincrement key; increases with insertion order.
        id -> BigInt,
        /// Normalised player name, 1 to 20 characters.
        name -> Text,
        score -> BigInt,
        /// Submission time in UTC.
        created_at -> Timestamp,
    }
}
