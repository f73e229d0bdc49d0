pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Qdrant error: {message}")]
	Qdrant { message: String },
	#[error("Candidate search failed: {message}")]
	Retrieval { message: String },
}
impl From<cadence_providers::Error> for Error {
	fn from(err: cadence_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

impl From<cadence_storage::Error> for Error {
	fn from(err: cadence_storage::Error) -> Self {
		match err {
			cadence_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			cadence_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			cadence_storage::Error::Qdrant(inner) => Self::Qdrant { message: inner.to_string() },
		}
	}
}
