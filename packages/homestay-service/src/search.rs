use serde::{Deserialize, Serialize};

use homestay_domain::{sort::SortKey, window::DateWindow};

use crate::{
	Error, HouseSummary, ListingService, Result,
	cache::{self, CacheClass},
	encode_json,
};

/// Raw search parameters as they arrive from the HTTP layer. Everything is a
/// string until normalization proves otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
	pub area_id: Option<String>,
	pub start_date: Option<String>,
	pub end_date: Option<String>,
	pub sort_key: Option<String>,
	pub page: Option<String>,
}

/// Canonical form of a search request. Logically identical requests
/// normalize to the same spec and therefore the same cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
	pub area_id: Option<i64>,
	pub window: DateWindow,
	pub sort: SortKey,
	pub page: u32,
}

impl FilterSpec {
	pub fn normalize(req: &SearchRequest) -> Result<Self> {
		let area_id = match req.area_id.as_deref().map(str::trim) {
			None | Some("") => None,
			Some(raw) => Some(raw.parse::<i64>().map_err(|_| Error::InvalidFilter {
				message: format!("Area id is not an integer: {raw}"),
			})?),
		};
		let window = DateWindow::from_raw(req.start_date.as_deref(), req.end_date.as_deref())
			.map_err(|err| Error::InvalidFilter { message: err.to_string() })?;
		let sort = SortKey::parse(req.sort_key.as_deref());
		let page = match req.page.as_deref().map(str::trim) {
			None | Some("") => 1,
			Some(raw) => raw.parse::<u32>().map_err(|_| Error::InvalidFilter {
				message: format!("Page is not a positive integer: {raw}"),
			})?,
		};

		if page == 0 {
			return Err(Error::InvalidFilter { message: "Pages are 1-based.".to_string() });
		}

		Ok(Self { area_id, window, sort, page })
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage {
	pub houses: Vec<HouseSummary>,
	pub total_page: u32,
	pub current_page: u32,
}

impl ListingService {
	/// Cache-aside search. Returns the serialized result page so a cache hit
	/// replays the stored body byte for byte.
	pub async fn search(&self, req: &SearchRequest) -> Result<String> {
		let spec = FilterSpec::normalize(req)?;
		let key = cache::search_page_key(&spec);

		if let Some(body) = cache::read_page(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::SearchPage,
			&key,
			spec.page,
		)
		.await
		{
			return Ok(body);
		}

		let conflicts = self.resolve_conflicts(&spec.window).await?;
		let (houses, total_page) = self.plan_and_execute(&spec, &conflicts).await?;
		let page = ResultPage { houses, total_page, current_page: spec.page };
		let body = encode_json(&page)?;

		// Only pages inside the currently known range are reusable. The page
		// count is live data, so entries can go stale within one TTL; that
		// window is accepted instead of invalidating on catalog writes.
		if spec.page <= total_page {
			cache::write_pages(
				self.stores.cache.as_ref(),
				&self.cfg.cache,
				CacheClass::SearchPage,
				&key,
				vec![(spec.page, body.clone())],
			)
			.await;
		}

		Ok(body)
	}
}
