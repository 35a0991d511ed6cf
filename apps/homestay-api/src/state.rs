use std::sync::Arc;

use homestay_service::ListingService;
use homestay_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ListingService>,
}
impl AppState {
	pub async fn new(config: homestay_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = ListingService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
