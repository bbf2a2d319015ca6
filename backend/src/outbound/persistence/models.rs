//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::scores;

/// Row struct for reading from the scores table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = scores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ScoreRow {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub created_at: NaiveDateTime,
}

/// Insertable struct for appending score records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = scores)]
pub(crate) struct NewScoreRow<'a> {
    pub name: &'a str,
    pub score: i64,
    pub created_at: NaiveDateTime,
}
