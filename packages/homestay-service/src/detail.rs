use serde::{Deserialize, Serialize};
use time::Date;

use homestay_storage::models::HouseDetail;

use crate::{
	Error, ListingService, Result,
	cache::{self, CacheClass},
	encode_json,
};

/// Everything the detail view renders for one house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseFullRecord {
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
	pub image_urls: Vec<String>,
	pub facility_ids: Vec<i64>,
	#[serde(with = "crate::date_serde")]
	pub created_on: Date,
}

impl From<HouseDetail> for HouseFullRecord {
	fn from(detail: HouseDetail) -> Self {
		let HouseDetail { house, image_urls, facility_ids } = detail;

		Self {
			house_id: house.house_id,
			area_id: house.area_id,
			title: house.title,
			price: house.price,
			address: house.address,
			room_count: house.room_count,
			acreage: house.acreage,
			unit: house.unit,
			capacity: house.capacity,
			beds: house.beds,
			deposit: house.deposit,
			min_days: house.min_days,
			max_days: house.max_days,
			order_count: house.order_count,
			cover_image: house.cover_image,
			image_urls,
			facility_ids,
			created_on: house.created_at.date(),
		}
	}
}

impl ListingService {
	/// Cache-aside detail read. Missing houses are `NotFound` and never
	/// cached.
	pub async fn house_detail(&self, house_id: i64) -> Result<String> {
		let key = cache::house_detail_key(house_id);

		if let Some(body) = cache::read_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::HouseDetail,
			&key,
		)
		.await
		{
			return Ok(body);
		}

		let Some(detail) = self.stores.catalog.find_house(house_id).await? else {
			return Err(Error::NotFound { message: format!("House {house_id} does not exist.") });
		};
		let record = HouseFullRecord::from(detail);
		let body = encode_json(&record)?;

		cache::write_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::HouseDetail,
			&key,
			body.clone(),
		)
		.await;

		Ok(body)
	}
}
