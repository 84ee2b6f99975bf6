//! Repository Module
//!
//! Free-function CRUD over SQLite. Every function takes
//! `impl SqliteExecutor<'_>` so the same query runs against the pool
//! (plain reads) or against a transaction connection (unit-of-work
//! writes) — each function is a single SQL statement for that reason.

pub mod pickup_point;
pub mod product;
pub mod reception;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // 唯一约束冲突单独分类，服务层靠它识别并发开单竞争
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
