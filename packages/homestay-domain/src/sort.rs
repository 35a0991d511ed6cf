use serde::{Deserialize, Serialize};

/// Search result ordering. Every ordering carries a secondary sort by house
/// id ascending so pagination stays deterministic across ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
	#[default]
	#[serde(rename = "new")]
	Newest,
	#[serde(rename = "booking")]
	BookingCount,
	#[serde(rename = "price-inc")]
	PriceAsc,
	#[serde(rename = "price-des")]
	PriceDesc,
}

impl SortKey {
	/// Unknown or missing labels fall back to the newest-first default.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw.map(str::trim) {
			Some("booking") => Self::BookingCount,
			Some("price-inc") => Self::PriceAsc,
			Some("price-des") => Self::PriceDesc,
			_ => Self::Newest,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Newest => "new",
			Self::BookingCount => "booking",
			Self::PriceAsc => "price-inc",
			Self::PriceDesc => "price-des",
		}
	}
}
