//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the score repository
//! port backed by a local SQLite file via Diesel, with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: all database errors are mapped to
//!   `ScoreRepositoryError`.
//!
//! # Example
//!
//! ```ignore
//! use scoreboard::outbound::persistence::{
//!     DbPool, DieselScoreRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("scores.db").await?;
//! let pool = DbPool::new(PoolConfig::new("scores.db")).await?;
//! let repo = DieselScoreRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_score_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_score_repository::DieselScoreRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
