use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
	#[error("Invalid calendar date: {raw}")]
	InvalidDate { raw: String },
	#[error("The start date must not be after the end date.")]
	Inverted,
}

/// Requested stay window. Either bound may be open; a window with both
/// bounds present keeps start <= end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
	pub start: Option<Date>,
	pub end: Option<Date>,
}

impl DateWindow {
	pub fn new(start: Option<Date>, end: Option<Date>) -> Result<Self, WindowError> {
		let window = Self { start, end };

		window.validate()?;

		Ok(window)
	}

	/// Builds a window from raw request strings. Blank strings count as an
	/// absent bound.
	pub fn from_raw(start: Option<&str>, end: Option<&str>) -> Result<Self, WindowError> {
		Self::new(parse_optional_date(start)?, parse_optional_date(end)?)
	}

	pub fn validate(&self) -> Result<(), WindowError> {
		if let (Some(start), Some(end)) = (self.start, self.end)
			&& start > end
		{
			return Err(WindowError::Inverted);
		}

		Ok(())
	}

	pub fn is_unbounded(&self) -> bool {
		self.start.is_none() && self.end.is_none()
	}

	/// Inclusive overlap: a booking that merely touches the window on either
	/// boundary day still makes the house unavailable.
	pub fn conflicts_with(&self, begin: Date, end: Date) -> bool {
		match (self.start, self.end) {
			(Some(start), Some(window_end)) => begin <= window_end && end >= start,
			(Some(start), None) => end >= start,
			(None, Some(window_end)) => begin <= window_end,
			(None, None) => false,
		}
	}

	pub fn start_label(&self) -> String {
		self.start.map(format_date).unwrap_or_default()
	}

	pub fn end_label(&self) -> String {
		self.end.map(format_date).unwrap_or_default()
	}
}

pub fn parse_date(raw: &str) -> Result<Date, WindowError> {
	Date::parse(raw, DATE_FORMAT).map_err(|_| WindowError::InvalidDate { raw: raw.to_string() })
}

pub fn format_date(date: Date) -> String {
	date.format(DATE_FORMAT).unwrap_or_default()
}

fn parse_optional_date(raw: Option<&str>) -> Result<Option<Date>, WindowError> {
	match raw.map(str::trim) {
		None | Some("") => Ok(None),
		Some(raw) => parse_date(raw).map(Some),
	}
}
