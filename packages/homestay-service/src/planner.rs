use serde::{Deserialize, Serialize};
use time::Date;

use homestay_storage::{catalog::HouseFilter, models::HouseSummaryRow};

use crate::{ConflictSet, Error, ListingService, Result, search::FilterSpec};

/// List-view projection served to clients. Prices are integer minor currency
/// units; no floating point travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseSummary {
	pub house_id: i64,
	pub title: String,
	pub price: i64,
	pub area_name: String,
	pub cover_image: Option<String>,
	pub order_count: i64,
	pub address: String,
	pub room_count: i32,
	#[serde(with = "crate::date_serde")]
	pub created_on: Date,
}

impl From<HouseSummaryRow> for HouseSummary {
	fn from(row: HouseSummaryRow) -> Self {
		Self {
			house_id: row.house_id,
			title: row.title,
			price: row.price,
			area_name: row.area_name,
			cover_image: row.cover_image,
			order_count: row.order_count,
			address: row.address,
			room_count: row.room_count,
			created_on: row.created_on,
		}
	}
}

impl ListingService {
	/// Turns the normalized spec plus the conflict exclusion set into the
	/// sorted, paginated catalog query. Pages past the end come back empty
	/// with the real page count.
	pub(crate) async fn plan_and_execute(
		&self,
		spec: &FilterSpec,
		conflicts: &ConflictSet,
	) -> Result<(Vec<HouseSummary>, u32)> {
		// The orchestrator validates before calling; re-check anyway.
		if spec.page == 0 {
			return Err(Error::InvalidFilter { message: "Pages are 1-based.".to_string() });
		}

		spec.window.validate().map_err(|err| Error::InvalidFilter { message: err.to_string() })?;

		let mut exclude_ids: Vec<i64> = conflicts.iter().copied().collect();

		// Deterministic predicate order regardless of set iteration.
		exclude_ids.sort_unstable();

		let filter = HouseFilter { area_id: spec.area_id, exclude_ids };
		let page = self
			.stores
			.catalog
			.find_houses(&filter, spec.sort, spec.page, self.cfg.listing.page_size)
			.await?;

		Ok((page.items.into_iter().map(HouseSummary::from).collect(), page.total_pages))
	}

	/// The landing-widget path: most-booked houses that have a cover image.
	pub(crate) async fn top_houses_by_bookings(&self, limit: u32) -> Result<Vec<HouseSummary>> {
		let rows = self.stores.catalog.find_top_houses(limit).await?;

		Ok(rows.into_iter().map(HouseSummary::from).collect())
	}
}
