use serde::{Deserialize, Serialize};

use homestay_storage::models::AreaRow;

use crate::{
	ListingService, Result,
	cache::{self, AREA_INFO_KEY, CacheClass},
	encode_json,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaItem {
	pub area_id: i64,
	pub name: String,
}

impl From<AreaRow> for AreaItem {
	fn from(row: AreaRow) -> Self {
		Self { area_id: row.area_id, name: row.name }
	}
}

impl ListingService {
	/// Cache-aside area list. An empty catalog is a valid empty list.
	pub async fn areas(&self) -> Result<String> {
		if let Some(body) = cache::read_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::AreaInfo,
			AREA_INFO_KEY,
		)
		.await
		{
			return Ok(body);
		}

		let areas: Vec<AreaItem> =
			self.stores.catalog.find_areas().await?.into_iter().map(AreaItem::from).collect();
		let body = encode_json(&areas)?;

		cache::write_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::AreaInfo,
			AREA_INFO_KEY,
			body.clone(),
		)
		.await;

		Ok(body)
	}
}
