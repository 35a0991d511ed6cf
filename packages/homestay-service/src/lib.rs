pub mod areas;
pub mod cache;
pub mod conflict;
pub mod date_serde;
pub mod detail;
pub mod home;
pub mod planner;
pub mod search;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

pub use areas::AreaItem;
pub use conflict::ConflictSet;
pub use detail::HouseFullRecord;
pub use planner::HouseSummary;
pub use search::{FilterSpec, ResultPage, SearchRequest};

use homestay_config::Config;
use homestay_domain::{sort::SortKey, window::DateWindow};
use homestay_storage::{
	cache as result_cache, catalog,
	catalog::HouseFilter,
	db::Db,
	models::{AreaRow, BookingSpan, HouseDetail, HousePage, HouseSummaryRow},
};
use time::{Duration, OffsetDateTime};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type StoreResult<T> = homestay_storage::Result<T>;

/// Authoritative catalog reads. The catalog owns the durable truth; every
/// cache miss must be fully answerable through this seam alone.
pub trait CatalogStore
where
	Self: Send + Sync,
{
	fn find_areas<'a>(&'a self) -> BoxFuture<'a, StoreResult<Vec<AreaRow>>>;

	fn find_house<'a>(&'a self, house_id: i64) -> BoxFuture<'a, StoreResult<Option<HouseDetail>>>;

	fn find_houses<'a>(
		&'a self,
		filter: &'a HouseFilter,
		sort: SortKey,
		page: u32,
		page_size: u32,
	) -> BoxFuture<'a, StoreResult<HousePage>>;

	fn find_top_houses<'a>(&'a self, limit: u32)
	-> BoxFuture<'a, StoreResult<Vec<HouseSummaryRow>>>;

	fn find_bookings_overlapping<'a>(
		&'a self,
		window: &'a DateWindow,
	) -> BoxFuture<'a, StoreResult<Vec<BookingSpan>>>;
}

/// Derived, time-bounded copies of rendered responses. The cache is advisory:
/// callers treat every failure as a miss and never propagate it.
pub trait ResultCache
where
	Self: Send + Sync,
{
	fn get_page<'a>(&'a self, key: &'a str, page: u32)
	-> BoxFuture<'a, StoreResult<Option<String>>>;

	fn put_pages<'a>(
		&'a self,
		key: &'a str,
		pages: &'a [(u32, String)],
		ttl: Duration,
	) -> BoxFuture<'a, StoreResult<()>>;

	fn get_blob<'a>(&'a self, key: &'a str) -> BoxFuture<'a, StoreResult<Option<String>>>;

	fn put_blob<'a>(
		&'a self,
		key: &'a str,
		payload: String,
		ttl: Duration,
	) -> BoxFuture<'a, StoreResult<()>>;
}

#[derive(Clone)]
pub struct Stores {
	pub catalog: Arc<dyn CatalogStore>,
	pub cache: Arc<dyn ResultCache>,
}

impl Stores {
	pub fn new(catalog: Arc<dyn CatalogStore>, cache: Arc<dyn ResultCache>) -> Self {
		Self { catalog, cache }
	}

	pub fn postgres(db: Arc<Db>) -> Self {
		Self { catalog: Arc::new(PgCatalog { db: db.clone() }), cache: Arc::new(PgCache { db }) }
	}
}

pub struct ListingService {
	pub cfg: Config,
	pub stores: Stores,
}

impl ListingService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self::with_stores(cfg, Stores::postgres(Arc::new(db)))
	}

	pub fn with_stores(cfg: Config, stores: Stores) -> Self {
		Self { cfg, stores }
	}
}

struct PgCatalog {
	db: Arc<Db>,
}

struct PgCache {
	db: Arc<Db>,
}

impl CatalogStore for PgCatalog {
	fn find_areas<'a>(&'a self) -> BoxFuture<'a, StoreResult<Vec<AreaRow>>> {
		Box::pin(catalog::find_areas(&self.db))
	}

	fn find_house<'a>(&'a self, house_id: i64) -> BoxFuture<'a, StoreResult<Option<HouseDetail>>> {
		Box::pin(catalog::load_house_detail(&self.db, house_id))
	}

	fn find_houses<'a>(
		&'a self,
		filter: &'a HouseFilter,
		sort: SortKey,
		page: u32,
		page_size: u32,
	) -> BoxFuture<'a, StoreResult<HousePage>> {
		Box::pin(catalog::find_houses(&self.db, filter, sort, page, page_size))
	}

	fn find_top_houses<'a>(
		&'a self,
		limit: u32,
	) -> BoxFuture<'a, StoreResult<Vec<HouseSummaryRow>>> {
		Box::pin(catalog::find_top_houses(&self.db, limit))
	}

	fn find_bookings_overlapping<'a>(
		&'a self,
		window: &'a DateWindow,
	) -> BoxFuture<'a, StoreResult<Vec<BookingSpan>>> {
		Box::pin(catalog::find_bookings_overlapping(&self.db, window))
	}
}

impl ResultCache for PgCache {
	fn get_page<'a>(
		&'a self,
		key: &'a str,
		page: u32,
	) -> BoxFuture<'a, StoreResult<Option<String>>> {
		Box::pin(result_cache::fetch_page(&self.db, key, page, OffsetDateTime::now_utc()))
	}

	fn put_pages<'a>(
		&'a self,
		key: &'a str,
		pages: &'a [(u32, String)],
		ttl: Duration,
	) -> BoxFuture<'a, StoreResult<()>> {
		Box::pin(result_cache::store_pages(&self.db, key, pages, ttl, OffsetDateTime::now_utc()))
	}

	fn get_blob<'a>(&'a self, key: &'a str) -> BoxFuture<'a, StoreResult<Option<String>>> {
		Box::pin(result_cache::fetch_blob(&self.db, key, OffsetDateTime::now_utc()))
	}

	fn put_blob<'a>(
		&'a self,
		key: &'a str,
		payload: String,
		ttl: Duration,
	) -> BoxFuture<'a, StoreResult<()>> {
		Box::pin(result_cache::store_blob(&self.db, key, payload, ttl, OffsetDateTime::now_utc()))
	}
}

pub(crate) fn encode_json<T>(value: &T) -> Result<String>
where
	T: serde::Serialize,
{
	serde_json::to_string(value)
		.map_err(|err| Error::StoreUnavailable { message: format!("Failed to encode response: {err}") })
}
