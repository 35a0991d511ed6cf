pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid filter: {message}")]
	InvalidFilter { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Store unavailable: {message}")]
	StoreUnavailable { message: String },
}

impl From<homestay_storage::Error> for Error {
	fn from(err: homestay_storage::Error) -> Self {
		match err {
			homestay_storage::Error::InvalidArgument(message) => Self::InvalidFilter { message },
			err => Self::StoreUnavailable { message: err.to_string() },
		}
	}
}
