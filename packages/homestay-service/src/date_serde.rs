use serde::{Deserialize, Deserializer, Serializer};
use time::Date;

use homestay_domain::window;

pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&window::format_date(*value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	window::parse_date(&raw).map_err(serde::de::Error::custom)
}
