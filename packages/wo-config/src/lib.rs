mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, MockSource, ODataSource, RequestDefaults, Service, Source, Strategy};

use std::{fs, path::Path};

pub const SOURCE_KINDS: [&str; 2] = ["mock", "odata"];

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (key, value) in [
		("service.http_bind", &cfg.service.http_bind),
		("service.log_level", &cfg.service.log_level),
		("request.lang", &cfg.request.lang),
		("request.usercode", &cfg.request.usercode),
		("strategy.default", &cfg.strategy.default),
	] {
		if value.trim().is_empty() {
			return Err(invalid(key, "must be non-empty."));
		}
	}

	if !SOURCE_KINDS.contains(&cfg.source.kind.as_str()) {
		return Err(invalid("source.kind", "must be one of mock or odata."));
	}
	if cfg.source.kind == "odata" {
		let Some(odata) = cfg.source.odata.as_ref() else {
			return Err(invalid("source.odata", "is required when source.kind is odata."));
		};

		validate_odata(odata)?;
	}

	Ok(())
}

fn validate_odata(odata: &types::ODataSource) -> Result<()> {
	if !(odata.base_url.starts_with("http://") || odata.base_url.starts_with("https://")) {
		return Err(invalid("source.odata.base_url", "must start with http:// or https://."));
	}
	if odata.entity_set.trim().is_empty() {
		return Err(invalid("source.odata.entity_set", "must be non-empty."));
	}
	if odata.timeout_ms == 0 {
		return Err(invalid("source.odata.timeout_ms", "must be greater than zero."));
	}

	if let Some(top) = odata.top
		&& top == 0
	{
		return Err(invalid("source.odata.top", "must be greater than zero."));
	}

	match (&odata.username, &odata.password) {
		(Some(_), None) => Err(invalid(
			"source.odata.password",
			"must be set when source.odata.username is set.",
		)),
		(None, Some(_)) => Err(invalid(
			"source.odata.username",
			"must be set when source.odata.password is set.",
		)),
		_ => Ok(()),
	}
}

fn invalid(key: &'static str, message: &'static str) -> Error {
	Error::Validation { key, message }
}

fn normalize(cfg: &mut Config, config_dir: Option<&Path>) {
	cfg.source.kind = cfg.source.kind.trim().to_ascii_lowercase();

	if let Some(mock) = cfg.source.mock.as_mut()
		&& let (Some(path), Some(dir)) = (mock.path.as_ref(), config_dir)
		&& path.is_relative()
	{
		mock.path = Some(dir.join(path));
	}
	if let Some(odata) = cfg.source.odata.as_mut() {
		odata.base_url = odata.base_url.trim().trim_end_matches('/').to_string();

		for value in [&mut odata.sap_client, &mut odata.username, &mut odata.password] {
			if value.as_deref().map(|raw| raw.trim().is_empty()).unwrap_or(false) {
				*value = None;
			}
		}
	}
}
