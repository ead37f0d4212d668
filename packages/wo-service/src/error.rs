use wo_domain::ValidationError;

use crate::search::{ERROR_TYPE_SOURCE, ERROR_TYPE_VALIDATION};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	Source(#[from] wo_source::Error),
	#[error("Invalid source configuration: {message}")]
	Config { message: String },
}
impl Error {
	/// Wire category reported in `SearchResponse::error_type`.
	pub fn error_type(&self) -> &'static str {
		match self {
			Self::InvalidRequest { .. } | Self::Validation(_) => ERROR_TYPE_VALIDATION,
			Self::Source(_) | Self::Config { .. } => ERROR_TYPE_SOURCE,
		}
	}
}
