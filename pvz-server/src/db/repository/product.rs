//! Product Repository (货品)
//!
//! Removal order is the explicit key `(created_at, seq)` — newest first,
//! `seq` breaking same-millisecond ties. No query here depends on rowid
//! or physical row order.

use super::RepoResult;
use shared::models::{Product, ProductType};
use sqlx::SqliteExecutor;

pub async fn find_by_id(db: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT seq, id, reception_id, type, created_at FROM product WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(product)
}

/// Products of a reception in registration order (oldest first).
pub async fn find_by_reception(
    db: impl SqliteExecutor<'_>,
    reception_id: i64,
) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT seq, id, reception_id, type, created_at FROM product WHERE reception_id = ? ORDER BY created_at, seq",
    )
    .bind(reception_id)
    .fetch_all(db)
    .await?;
    Ok(products)
}

/// The product that `delete_last` would remove next.
pub async fn find_last_in_reception(
    db: impl SqliteExecutor<'_>,
    reception_id: i64,
) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT seq, id, reception_id, type, created_at FROM product WHERE reception_id = ? ORDER BY created_at DESC, seq DESC LIMIT 1",
    )
    .bind(reception_id)
    .fetch_optional(db)
    .await?;
    Ok(product)
}

pub async fn create(
    db: impl SqliteExecutor<'_>,
    reception_id: i64,
    product_type: ProductType,
) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (id, reception_id, type, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING seq, id, reception_id, type, created_at",
    )
    .bind(shared::util::snowflake_id())
    .bind(reception_id)
    .bind(product_type)
    .bind(now)
    .fetch_one(db)
    .await?;
    Ok(product)
}

/// Insert a batch of products as one multi-row INSERT. All rows share one
/// timestamp; `seq` orders them within it.
pub async fn create_batch(
    db: impl SqliteExecutor<'_>,
    reception_id: i64,
    types: &[ProductType],
) -> RepoResult<Vec<Product>> {
    if types.is_empty() {
        return Ok(Vec::new());
    }

    let now = shared::util::now_millis();
    let mut builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
        "INSERT INTO product (id, reception_id, type, created_at) ",
    );
    builder.push_values(types.iter(), |mut row, product_type| {
        row.push_bind(shared::util::snowflake_id())
            .push_bind(reception_id)
            .push_bind(*product_type)
            .push_bind(now);
    });
    builder.push(" RETURNING seq, id, reception_id, type, created_at");

    let mut products: Vec<Product> = builder.build_query_as().fetch_all(db).await?;
    // RETURNING does not promise row order
    products.sort_by_key(|p| p.seq);
    Ok(products)
}

/// Remove the newest product of a reception. Returns `None` when the
/// reception holds no products.
pub async fn delete_last(
    db: impl SqliteExecutor<'_>,
    reception_id: i64,
) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "DELETE FROM product WHERE seq = (SELECT seq FROM product WHERE reception_id = ?1 ORDER BY created_at DESC, seq DESC LIMIT 1) RETURNING seq, id, reception_id, type, created_at",
    )
    .bind(reception_id)
    .fetch_optional(db)
    .await?;
    Ok(product)
}
