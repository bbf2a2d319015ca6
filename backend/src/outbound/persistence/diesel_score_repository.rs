//! SQLite-backed `ScoreRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ScoreRepository, ScoreRepositoryError};
use crate::domain::{NewScore, PlayerName, ScoreId, ScoreRecord};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewScoreRow, ScoreRow};
use super::pool::{DbPool, PoolError};
use super::schema::scores;

/// Diesel-backed implementation of the score repository port.
#[derive(Clone)]
pub struct DieselScoreRepository {
    pool: DbPool,
}

impl DieselScoreRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ScoreRepositoryError {
    map_basic_pool_error(error, ScoreRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ScoreRepositoryError {
    map_basic_diesel_error(
        error,
        ScoreRepositoryError::query,
        ScoreRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain record.
fn row_to_record(row: ScoreRow) -> Result<ScoreRecord, ScoreRepositoryError> {
    let ScoreRow {
        id,
        name,
        score,
        created_at,
    } = row;
    let name = PlayerName::new(name)
        .map_err(|err| ScoreRepositoryError::query(format!("stored score {id}: {err}")))?;
    Ok(ScoreRecord::new(
        ScoreId::new(id),
        name,
        score,
        DateTime::<Utc>::from_naive_utc_and_offset(created_at, Utc),
    ))
}

#[async_trait]
impl ScoreRepository for DieselScoreRepository {
    async fn list_top(&self, limit: u32) -> Result<Vec<ScoreRecord>, ScoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ScoreRow> = scores::table
            .select(ScoreRow::as_select())
            .order((scores::score.desc(), scores::id.asc()))
            .limit(i64::from(limit))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn insert(&self, score: &NewScore) -> Result<ScoreRecord, ScoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewScoreRow {
            name: score.name.as_ref(),
            score: score.score,
            created_at: score.created_at.naive_utc(),
        };

        let row: ScoreRow = diesel::insert_into(scores::table)
            .values(&new_row)
            .returning(ScoreRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(score_id = row.id, "score row inserted");
        row_to_record(row)
    }
}
