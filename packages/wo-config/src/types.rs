use std::{collections::HashMap, path::PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub request: RequestDefaults,
	pub source: Source,
	#[serde(default)]
	pub strategy: Strategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Identity used when a search request omits `i_lang` or `i_usercode`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDefaults {
	#[serde(default = "default_lang")]
	pub lang: String,
	#[serde(default = "default_usercode")]
	pub usercode: String,
}
impl Default for RequestDefaults {
	fn default() -> Self {
		Self { lang: default_lang(), usercode: default_usercode() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
	/// One of `mock` or `odata`.
	pub kind: String,
	pub mock: Option<MockSource>,
	pub odata: Option<ODataSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MockSource {
	/// JSON array of work-order records. Relative paths resolve against the config file.
	pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ODataSource {
	pub base_url: String,
	#[serde(default = "default_service_path")]
	pub service_path: String,
	#[serde(default = "default_entity_set")]
	pub entity_set: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	pub top: Option<u32>,
	pub sap_client: Option<String>,
	pub username: Option<String>,
	pub password: Option<String>,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Strategy {
	/// Strategy for records whose country has no entry in `countries`.
	#[serde(default = "default_strategy")]
	pub default: String,
	/// Country display text to strategy name, e.g. `"Germany" = "GERMANY"`.
	#[serde(default = "default_countries")]
	pub countries: HashMap<String, String>,
}
impl Default for Strategy {
	fn default() -> Self {
		Self { default: default_strategy(), countries: default_countries() }
	}
}

fn default_lang() -> String {
	"EN".to_string()
}

fn default_usercode() -> String {
	"TESTUSER".to_string()
}

fn default_service_path() -> String {
	"/sap/opu/odata/sap/ZTEM_TEST_CATS_SRV".to_string()
}

fn default_entity_set() -> String {
	"WOHeaderSet".to_string()
}

fn default_timeout_ms() -> u64 {
	30_000
}

fn default_strategy() -> String {
	"TEMSA_GLOBAL".to_string()
}

fn default_countries() -> HashMap<String, String> {
	[
		("Turkey", "TEMSA_GLOBAL"),
		("Germany", "GERMANY"),
		("France", "FRANCE"),
		("United States", "NORTH_AMERICA"),
		("Canada", "NORTH_AMERICA"),
	]
	.into_iter()
	.map(|(country, strategy)| (country.to_string(), strategy.to_string()))
	.collect()
}
