use time::Duration;
use tracing::{info, warn};

use crate::{ResultCache, search::FilterSpec};

pub const HOME_PAGE_KEY: &str = "home_page_data";
pub const AREA_INFO_KEY: &str = "area_info";

/// One entry per cache class; each owns its expiry constant.
#[derive(Debug, Clone, Copy)]
pub enum CacheClass {
	SearchPage,
	HouseDetail,
	HomePage,
	AreaInfo,
}
impl CacheClass {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::SearchPage => "search_page",
			Self::HouseDetail => "house_detail",
			Self::HomePage => "home_page",
			Self::AreaInfo => "area_info",
		}
	}

	pub fn ttl(self, cfg: &homestay_config::Cache) -> Duration {
		let secs = match self {
			Self::SearchPage => cfg.search_page_ttl_secs,
			Self::HouseDetail => cfg.house_detail_ttl_secs,
			Self::HomePage => cfg.home_page_ttl_secs,
			Self::AreaInfo => cfg.area_info_ttl_secs,
		};

		Duration::seconds(secs)
	}
}

/// Key for one search result set; the page number addresses entries within
/// it. Rendered from the normalized spec so logically identical requests
/// share a key, with absent fields left empty.
pub fn search_page_key(spec: &FilterSpec) -> String {
	format!(
		"houses_{}_{}_{}_{}",
		spec.area_id.map(|id| id.to_string()).unwrap_or_default(),
		spec.window.start_label(),
		spec.window.end_label(),
		spec.sort.as_str(),
	)
}

pub fn house_detail_key(house_id: i64) -> String {
	format!("house_info_{house_id}")
}

pub(crate) async fn read_page(
	cache: &dyn ResultCache,
	cfg: &homestay_config::Cache,
	class: CacheClass,
	key: &str,
	page: u32,
) -> Option<String> {
	if !cfg.enabled {
		return None;
	}

	match cache.get_page(key, page).await {
		Ok(Some(payload)) => {
			info!(cache_class = class.as_str(), cache_key = key, page, hit = true, "Cache hit.");

			Some(payload)
		},
		Ok(None) => {
			info!(cache_class = class.as_str(), cache_key = key, page, hit = false, "Cache miss.");

			None
		},
		Err(err) => {
			warn!(
				error = %err,
				cache_class = class.as_str(),
				cache_key = key,
				page,
				"Cache read failed."
			);

			None
		},
	}
}

pub(crate) async fn read_blob(
	cache: &dyn ResultCache,
	cfg: &homestay_config::Cache,
	class: CacheClass,
	key: &str,
) -> Option<String> {
	if !cfg.enabled {
		return None;
	}

	match cache.get_blob(key).await {
		Ok(Some(payload)) => {
			info!(cache_class = class.as_str(), cache_key = key, hit = true, "Cache hit.");

			Some(payload)
		},
		Ok(None) => {
			info!(cache_class = class.as_str(), cache_key = key, hit = false, "Cache miss.");

			None
		},
		Err(err) => {
			warn!(error = %err, cache_class = class.as_str(), cache_key = key, "Cache read failed.");

			None
		},
	}
}

pub(crate) async fn write_pages(
	cache: &dyn ResultCache,
	cfg: &homestay_config::Cache,
	class: CacheClass,
	key: &str,
	pages: Vec<(u32, String)>,
) {
	if !cfg.enabled {
		return;
	}

	let ttl = class.ttl(cfg);

	match cache.put_pages(key, &pages, ttl).await {
		Ok(()) => {
			info!(
				cache_class = class.as_str(),
				cache_key = key,
				ttl_secs = ttl.whole_seconds(),
				"Cache stored."
			);
		},
		Err(err) => {
			warn!(error = %err, cache_class = class.as_str(), cache_key = key, "Cache write failed.");
		},
	}
}

pub(crate) async fn write_blob(
	cache: &dyn ResultCache,
	cfg: &homestay_config::Cache,
	class: CacheClass,
	key: &str,
	payload: String,
) {
	if !cfg.enabled {
		return;
	}

	let ttl = class.ttl(cfg);

	match cache.put_blob(key, payload, ttl).await {
		Ok(()) => {
			info!(
				cache_class = class.as_str(),
				cache_key = key,
				ttl_secs = ttl.whole_seconds(),
				"Cache stored."
			);
		},
		Err(err) => {
			warn!(error = %err, cache_class = class.as_str(), cache_key = key, "Cache write failed.");
		},
	}
}
