use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read work-order service config at {path:?}.")]
	ReadConfig { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse work-order service config at {path:?}.")]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	/// `key` is the dotted TOML path of the offending setting, e.g. `source.odata.top`.
	#[error("{key} {message}")]
	Validation { key: &'static str, message: &'static str },
}
impl Error {
	/// Dotted key of the setting that failed validation, if any.
	pub fn key(&self) -> Option<&'static str> {
		match self {
			Self::Validation { key, .. } => Some(*key),
			Self::ReadConfig { .. } | Self::ParseConfig { .. } => None,
		}
	}
}
