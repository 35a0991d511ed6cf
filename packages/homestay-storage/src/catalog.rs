use sqlx::{Postgres, QueryBuilder};

use homestay_domain::{paging, sort::SortKey, window::DateWindow};

use crate::{
	Error, Result,
	db::Db,
	models::{AreaRow, BookingSpan, HouseDetail, HousePage, HouseRow, HouseSummaryRow},
};

const SUMMARY_SELECT: &str = "\
SELECT
	h.house_id,
	h.title,
	h.price,
	a.name AS area_name,
	h.cover_image,
	h.order_count,
	h.address,
	h.room_count,
	h.created_at::date AS created_on
FROM houses h
JOIN areas a ON a.area_id = h.area_id";

/// Predicate set for the paginated search. An empty exclusion list means no
/// availability filter applies.
#[derive(Debug, Clone, Default)]
pub struct HouseFilter {
	pub area_id: Option<i64>,
	pub exclude_ids: Vec<i64>,
}

pub async fn find_areas(db: &Db) -> Result<Vec<AreaRow>> {
	let areas = sqlx::query_as::<_, AreaRow>("SELECT area_id, name FROM areas ORDER BY area_id")
		.fetch_all(&db.pool)
		.await?;

	Ok(areas)
}

pub async fn find_house(db: &Db, house_id: i64) -> Result<Option<HouseRow>> {
	let house = sqlx::query_as::<_, HouseRow>(
		"\
SELECT
	house_id,
	area_id,
	title,
	price,
	address,
	room_count,
	acreage,
	unit,
	capacity,
	beds,
	deposit,
	min_days,
	max_days,
	order_count,
	cover_image,
	created_at,
	updated_at
FROM houses
WHERE house_id = $1",
	)
	.bind(house_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(house)
}

pub async fn find_house_images(db: &Db, house_id: i64) -> Result<Vec<String>> {
	let urls = sqlx::query_scalar::<_, String>(
		"SELECT url FROM house_images WHERE house_id = $1 ORDER BY image_id",
	)
	.bind(house_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(urls)
}

pub async fn find_house_facility_ids(db: &Db, house_id: i64) -> Result<Vec<i64>> {
	let ids = sqlx::query_scalar::<_, i64>(
		"SELECT facility_id FROM house_facilities WHERE house_id = $1 ORDER BY facility_id",
	)
	.bind(house_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(ids)
}

pub async fn load_house_detail(db: &Db, house_id: i64) -> Result<Option<HouseDetail>> {
	let Some(house) = find_house(db, house_id).await? else {
		return Ok(None);
	};

	let image_urls = find_house_images(db, house_id).await?;
	let facility_ids = find_house_facility_ids(db, house_id).await?;

	Ok(Some(HouseDetail { house, image_urls, facility_ids }))
}

pub async fn find_houses(
	db: &Db,
	filter: &HouseFilter,
	sort: SortKey,
	page: u32,
	page_size: u32,
) -> Result<HousePage> {
	if page == 0 {
		return Err(Error::InvalidArgument("Pages are 1-based.".to_string()));
	}
	if page_size == 0 {
		return Err(Error::InvalidArgument("Page size must be greater than zero.".to_string()));
	}

	let mut count_builder: QueryBuilder<Postgres> =
		QueryBuilder::new("SELECT count(*) FROM houses h WHERE TRUE");

	push_filter(&mut count_builder, filter);

	let total: i64 = count_builder.build_query_scalar().fetch_one(&db.pool).await?;
	let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SUMMARY_SELECT);

	builder.push(" WHERE TRUE");
	push_filter(&mut builder, filter);
	builder.push(order_clause(sort));
	builder.push(" LIMIT ");
	builder.push_bind(page_size as i64);
	builder.push(" OFFSET ");
	builder.push_bind(paging::page_offset(page, page_size) as i64);

	let items: Vec<HouseSummaryRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(HousePage { items, total_pages: paging::total_pages(total.max(0) as u64, page_size) })
}

pub async fn find_top_houses(db: &Db, limit: u32) -> Result<Vec<HouseSummaryRow>> {
	let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SUMMARY_SELECT);

	builder.push(" WHERE h.cover_image IS NOT NULL");
	builder.push(" ORDER BY h.order_count DESC, h.house_id ASC");
	builder.push(" LIMIT ");
	builder.push_bind(limit as i64);

	let items = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(items)
}

pub async fn find_bookings_overlapping(db: &Db, window: &DateWindow) -> Result<Vec<BookingSpan>> {
	if window.is_unbounded() {
		return Ok(Vec::new());
	}

	let mut builder: QueryBuilder<Postgres> =
		QueryBuilder::new("SELECT o.house_id, o.begin_date, o.end_date FROM orders o WHERE TRUE");

	// Inclusive overlap with the requested window; either bound may be open.
	if let Some(end) = window.end {
		builder.push(" AND o.begin_date <= ");
		builder.push_bind(end);
	}
	if let Some(start) = window.start {
		builder.push(" AND o.end_date >= ");
		builder.push_bind(start);
	}

	let spans = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(spans)
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &HouseFilter) {
	if let Some(area_id) = filter.area_id {
		builder.push(" AND h.area_id = ");
		builder.push_bind(area_id);
	}
	if !filter.exclude_ids.is_empty() {
		builder.push(" AND h.house_id <> ALL(");
		builder.push_bind(filter.exclude_ids.clone());
		builder.push(")");
	}
}

fn order_clause(sort: SortKey) -> &'static str {
	match sort {
		SortKey::Newest => " ORDER BY h.created_at DESC, h.house_id ASC",
		SortKey::BookingCount => " ORDER BY h.order_count DESC, h.house_id ASC",
		SortKey::PriceAsc => " ORDER BY h.price ASC, h.house_id ASC",
		SortKey::PriceDesc => " ORDER BY h.price DESC, h.house_id ASC",
	}
}
