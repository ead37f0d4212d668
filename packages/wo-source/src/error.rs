use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(
		"SAP backend is not accessible. Please check your network connection and SAP server status."
	)]
	Unreachable { source: reqwest::Error },
	#[error("SAP request timed out. The SAP server may be experiencing high load.")]
	Timeout { source: reqwest::Error },
	#[error("SAP server returned error {status}: {body}")]
	Status { status: u16, body: String },
	#[error("Invalid response format from SAP server: {message}")]
	InvalidResponse { message: String },
	#[error("Unexpected error connecting to SAP: {source}")]
	Http { source: reqwest::Error },
	#[error("Failed to read work-order table at {path:?}.")]
	ReadTable { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse work-order table at {path:?}: {source}")]
	ParseTable { path: PathBuf, source: serde_json::Error },
	#[error("{message}")]
	InvalidConfig { message: String },
}
impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout { source: err }
		} else if err.is_connect() {
			Self::Unreachable { source: err }
		} else if err.is_decode() {
			Self::InvalidResponse { message: err.to_string() }
		} else {
			Self::Http { source: err }
		}
	}
}
