use std::collections::HashSet;

use homestay_domain::window::DateWindow;

use crate::{ListingService, Result};

/// House ids with a booking overlapping the requested window.
pub type ConflictSet = HashSet<i64>;

impl ListingService {
	/// Derived fresh per query and never cached standalone. An unbounded
	/// window excludes nothing and issues no catalog query; a catalog failure
	/// fails the whole search, because answering from an unfiltered result
	/// set would break the availability guarantee.
	pub(crate) async fn resolve_conflicts(&self, window: &DateWindow) -> Result<ConflictSet> {
		if window.is_unbounded() {
			return Ok(ConflictSet::new());
		}

		let spans = self.stores.catalog.find_bookings_overlapping(window).await?;

		Ok(spans.into_iter().map(|span| span.house_id).collect())
	}
}
