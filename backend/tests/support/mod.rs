//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module gives them one place to provision throwaway SQLite stores.

use scoreboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use tempfile::TempDir;

/// SQLite file in a temporary directory, removed on drop.
pub struct TempStore {
    _dir: TempDir,
    url: String,
}

impl TempStore {
    /// Create an empty, migrated store.
    pub async fn migrated() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir.path().join("scores.db").to_string_lossy().into_owned();
        run_migrations(&url).await.expect("migrations apply");
        Self { _dir: dir, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open a fresh pool over the store.
    pub async fn pool(&self) -> DbPool {
        let config = PoolConfig::new(self.url.as_str())
            .with_max_size(4)
            .with_min_idle(Some(1));
        DbPool::new(config).await.expect("pool builds")
    }
}
