//! Reception Repository (收货单)
//!
//! `create` relies on the partial unique index on
//! `reception(pickup_point_id) WHERE status = 'IN_PROGRESS'`: a second
//! concurrent open surfaces as [`RepoError::Duplicate`] instead of a
//! second open row.
//!
//! [`RepoError::Duplicate`]: super::RepoError::Duplicate

use super::RepoResult;
use shared::models::Reception;
use sqlx::SqliteExecutor;

pub async fn find_by_id(db: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Reception>> {
    let reception = sqlx::query_as::<_, Reception>(
        "SELECT id, pickup_point_id, status, created_at, closed_at FROM reception WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(reception)
}

pub async fn find_all(
    db: impl SqliteExecutor<'_>,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<Reception>> {
    let receptions = sqlx::query_as::<_, Reception>(
        "SELECT id, pickup_point_id, status, created_at, closed_at FROM reception ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(receptions)
}

pub async fn find_by_pickup_point(
    db: impl SqliteExecutor<'_>,
    pickup_point_id: i64,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<Reception>> {
    let receptions = sqlx::query_as::<_, Reception>(
        "SELECT id, pickup_point_id, status, created_at, closed_at FROM reception WHERE pickup_point_id = ? ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )
    .bind(pickup_point_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(receptions)
}

pub async fn find_open_by_pickup_point(
    db: impl SqliteExecutor<'_>,
    pickup_point_id: i64,
) -> RepoResult<Option<Reception>> {
    let reception = sqlx::query_as::<_, Reception>(
        "SELECT id, pickup_point_id, status, created_at, closed_at FROM reception WHERE pickup_point_id = ? AND status = 'IN_PROGRESS' LIMIT 1",
    )
    .bind(pickup_point_id)
    .fetch_optional(db)
    .await?;
    Ok(reception)
}

pub async fn create(db: impl SqliteExecutor<'_>, pickup_point_id: i64) -> RepoResult<Reception> {
    let now = shared::util::now_millis();
    let reception = sqlx::query_as::<_, Reception>(
        "INSERT INTO reception (id, pickup_point_id, status, created_at) VALUES (?1, ?2, 'IN_PROGRESS', ?3) RETURNING id, pickup_point_id, status, created_at, closed_at",
    )
    .bind(shared::util::snowflake_id())
    .bind(pickup_point_id)
    .bind(now)
    .fetch_one(db)
    .await?;
    Ok(reception)
}

/// Guarded close: only flips `IN_PROGRESS` rows. Returns `None` when the
/// reception does not exist or is already closed — the caller decides
/// which of the two it was.
pub async fn close(db: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Reception>> {
    let now = shared::util::now_millis();
    let reception = sqlx::query_as::<_, Reception>(
        "UPDATE reception SET status = 'CLOSED', closed_at = ?1 WHERE id = ?2 AND status = 'IN_PROGRESS' RETURNING id, pickup_point_id, status, created_at, closed_at",
    )
    .bind(now)
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(reception)
}

pub async fn count_by_pickup_point(
    db: impl SqliteExecutor<'_>,
    pickup_point_id: i64,
) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM reception WHERE pickup_point_id = ?",
    )
    .bind(pickup_point_id)
    .fetch_one(db)
    .await?;
    Ok(count)
}
