use sqlx::Row;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{Result, db::Db};

/// Single-blob entries live under this page so they share the table shape
/// with paginated search results.
pub const BLOB_PAGE: u32 = 0;

pub async fn fetch_page(
	db: &Db,
	key: &str,
	page: u32,
	now: OffsetDateTime,
) -> Result<Option<String>> {
	let row = sqlx::query(
		"SELECT payload FROM result_cache WHERE cache_key = $1 AND page = $2 AND expires_at > $3",
	)
	.bind(key)
	.bind(page as i32)
	.bind(now)
	.fetch_optional(&db.pool)
	.await?;
	let Some(row) = row else {
		return Ok(None);
	};

	let payload: String = row.try_get("payload")?;

	sqlx::query(
		"UPDATE result_cache \
         SET last_accessed_at = $1, hit_count = hit_count + 1 \
         WHERE cache_key = $2 AND page = $3",
	)
	.bind(now)
	.bind(key)
	.bind(page as i32)
	.execute(&db.pool)
	.await?;

	Ok(Some(payload))
}

/// Writes every page of a key and its expiry in one transaction. Partially
/// written cache state for a key is worse than a miss.
pub async fn store_pages(
	db: &Db,
	key: &str,
	pages: &[(u32, String)],
	ttl: Duration,
	now: OffsetDateTime,
) -> Result<()> {
	let expires_at = now + ttl;
	let mut tx = db.pool.begin().await?;

	for (page, payload) in pages {
		sqlx::query(
			"INSERT INTO result_cache \
             (cache_id, cache_key, page, payload, stored_at, last_accessed_at, expires_at, hit_count) \
             VALUES ($1,$2,$3,$4,$5,$5,$6,0) \
             ON CONFLICT (cache_key, page) DO UPDATE SET \
             payload = EXCLUDED.payload, \
             stored_at = EXCLUDED.stored_at, \
             last_accessed_at = EXCLUDED.last_accessed_at, \
             expires_at = EXCLUDED.expires_at, \
             hit_count = 0",
		)
		.bind(Uuid::new_v4())
		.bind(key)
		.bind(*page as i32)
		.bind(payload)
		.bind(now)
		.bind(expires_at)
		.execute(&mut *tx)
		.await?;
	}

	tx.commit().await?;

	Ok(())
}

pub async fn fetch_blob(db: &Db, key: &str, now: OffsetDateTime) -> Result<Option<String>> {
	fetch_page(db, key, BLOB_PAGE, now).await
}

pub async fn store_blob(
	db: &Db,
	key: &str,
	payload: String,
	ttl: Duration,
	now: OffsetDateTime,
) -> Result<()> {
	store_pages(db, key, &[(BLOB_PAGE, payload)], ttl, now).await
}
