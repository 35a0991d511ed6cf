use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub listing: Listing,
	pub cache: Cache,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Listing {
	pub page_size: u32,
	pub home_page_max_houses: u32,
}

/// Expiry per cache class. Search pages and the home widget track live
/// availability and stay short; area metadata rarely changes.
#[derive(Debug, Deserialize)]
pub struct Cache {
	pub enabled: bool,
	pub search_page_ttl_secs: i64,
	pub house_detail_ttl_secs: i64,
	pub home_page_ttl_secs: i64,
	pub area_info_ttl_secs: i64,
}
