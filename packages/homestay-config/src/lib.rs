mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Cache, Config, Listing, Postgres, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.page_size == 0 {
		return Err(Error::Validation {
			message: "listing.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.home_page_max_houses == 0 {
		return Err(Error::Validation {
			message: "listing.home_page_max_houses must be greater than zero.".to_string(),
		});
	}

	for (label, ttl) in [
		("cache.search_page_ttl_secs", cfg.cache.search_page_ttl_secs),
		("cache.house_detail_ttl_secs", cfg.cache.house_detail_ttl_secs),
		("cache.home_page_ttl_secs", cfg.cache.home_page_ttl_secs),
		("cache.area_info_ttl_secs", cfg.cache.area_info_ttl_secs),
	] {
		if ttl <= 0 {
			return Err(Error::Validation { message: format!("{label} must be greater than zero.") });
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let log_level = cfg.service.log_level.trim();

	cfg.service.log_level =
		if log_level.is_empty() { "info".to_string() } else { log_level.to_string() };
}
