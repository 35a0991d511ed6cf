use crate::{
	ListingService, Result,
	cache::{self, CacheClass, HOME_PAGE_KEY},
	encode_json,
};

impl ListingService {
	/// Cache-aside landing widget: the most-booked houses that have a cover
	/// image, capped by configuration.
	pub async fn home_widget(&self) -> Result<String> {
		if let Some(body) = cache::read_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::HomePage,
			HOME_PAGE_KEY,
		)
		.await
		{
			return Ok(body);
		}

		let houses =
			self.top_houses_by_bookings(self.cfg.listing.home_page_max_houses).await?;
		let body = encode_json(&houses)?;

		cache::write_blob(
			self.stores.cache.as_ref(),
			&self.cfg.cache,
			CacheClass::HomePage,
			HOME_PAGE_KEY,
			body.clone(),
		)
		.await;

		Ok(body)
	}
}
