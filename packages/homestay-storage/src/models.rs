use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AreaRow {
	pub area_id: i64,
	pub name: String,
}

/// List-view projection of a house, joined with its area name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HouseSummaryRow {
	pub house_id: i64,
	pub title: String,
	pub price: i64,
	pub area_name: String,
	pub cover_image: Option<String>,
	pub order_count: i64,
	pub address: String,
	pub room_count: i32,
	pub created_on: Date,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HouseRow {
	pub house_id: i64,
	pub area_id: i64,
	pub title: String,
	pub price: i64,
	pub address: String,
	pub room_count: i32,
	pub acreage: i32,
	pub unit: String,
	pub capacity: i32,
	pub beds: String,
	pub deposit: i64,
	pub min_days: i32,
	pub max_days: i32,
	pub order_count: i64,
	pub cover_image: Option<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// A house row together with the gallery and facility links the detail view
/// renders.
#[derive(Debug, Clone)]
pub struct HouseDetail {
	pub house: HouseRow,
	pub image_urls: Vec<String>,
	pub facility_ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct BookingSpan {
	pub house_id: i64,
	pub begin_date: Date,
	pub end_date: Date,
}

#[derive(Debug, Clone)]
pub struct HousePage {
	pub items: Vec<HouseSummaryRow>,
	pub total_pages: u32,
}
