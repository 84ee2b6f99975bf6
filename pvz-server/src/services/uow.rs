//! Unit of Work (工作单元)
//!
//! Every mutating sequence in the service layer runs through
//! [`UnitOfWork::run`]: begin a transaction, hand the transaction connection
//! to the operation, then commit on success or roll back on failure.
//! Concurrent observers see all of the sequence's writes or none of them
//! (SQLite WAL isolation; no in-process locks).
//!
//! Failure modes:
//! - begin 失败 → [`ServiceError::Storage`]
//! - commit 失败 → [`ServiceError::CommitFailed`]（效果不保证已生效）
//! - rollback 失败 → [`ServiceError::RollbackFailed`]，带上原始业务错误；
//!   存储状态未知，按 `error!` 级别记录
//! - rollback 成功 → 原始业务错误原样返回

use futures::future::BoxFuture;
use sqlx::{SqliteConnection, SqlitePool};

use super::error::ServiceError;
use crate::db::repository::RepoError;

/// Transaction coordinator over the shared SQLite pool
#[derive(Debug, Clone)]
pub struct UnitOfWork {
    pool: SqlitePool,
}

impl UnitOfWork {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run `op` inside a single transaction.
    ///
    /// `op` receives the transaction connection and must route every read
    /// and write of the sequence through it. The business error returned by
    /// `op` survives rollback unchanged, so callers can still match on it.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, ServiceError>>,
    {
        let mut tx = self.pool.begin().await.map_err(RepoError::from)?;

        match op(&mut *tx).await {
            Ok(value) => match tx.commit().await {
                Ok(()) => Ok(value),
                Err(e) => Err(ServiceError::CommitFailed(e.to_string())),
            },
            Err(op_err) => match tx.rollback().await {
                Ok(()) => Err(op_err),
                Err(rollback_err) => {
                    tracing::error!(
                        target: "uow",
                        rollback_error = %rollback_err,
                        original_error = %op_err,
                        "Rollback failed, storage state unknown"
                    );
                    Err(ServiceError::RollbackFailed {
                        rollback: rollback_err.to_string(),
                        original: Box::new(op_err),
                    })
                }
            },
        }
    }
}
