//! Pickup Point Repository (自提点)

use super::RepoResult;
use shared::models::{PickupPoint, PickupPointCreate, PickupPointUpdate};
use sqlx::SqliteExecutor;

pub async fn find_all(
    db: impl SqliteExecutor<'_>,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<PickupPoint>> {
    let points = sqlx::query_as::<_, PickupPoint>(
        "SELECT id, label, created_at, updated_at FROM pickup_point ORDER BY label, id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(points)
}

pub async fn find_by_id(db: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<PickupPoint>> {
    let point = sqlx::query_as::<_, PickupPoint>(
        "SELECT id, label, created_at, updated_at FROM pickup_point WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(point)
}

pub async fn create(
    db: impl SqliteExecutor<'_>,
    data: PickupPointCreate,
) -> RepoResult<PickupPoint> {
    let now = shared::util::now_millis();
    let point = sqlx::query_as::<_, PickupPoint>(
        "INSERT INTO pickup_point (id, label, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING id, label, created_at, updated_at",
    )
    .bind(shared::util::snowflake_id())
    .bind(data.label)
    .bind(now)
    .fetch_one(db)
    .await?;
    Ok(point)
}

/// Returns `None` when the pickup point does not exist.
pub async fn update(
    db: impl SqliteExecutor<'_>,
    id: i64,
    data: PickupPointUpdate,
) -> RepoResult<Option<PickupPoint>> {
    let now = shared::util::now_millis();
    let point = sqlx::query_as::<_, PickupPoint>(
        "UPDATE pickup_point SET label = COALESCE(?1, label), updated_at = ?2 WHERE id = ?3 RETURNING id, label, created_at, updated_at",
    )
    .bind(data.label)
    .bind(now)
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(point)
}

pub async fn delete(db: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM pickup_point WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(rows.rows_affected() > 0)
}
