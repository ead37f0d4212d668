//! SAP Gateway OData v2 work-order feed.
//!
//! The entity set is read whole (optionally capped by `$top`) in JSON format. No `$filter` is
//! sent; matching happens in the filter engine so results do not depend on the backend's query
//! support.

use std::time::Duration as StdDuration;

use reqwest::{
	Client,
	header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Map, Value};
use time::{Date, OffsetDateTime};

use wo_domain::{WorkOrderRecord, date_serde};

use crate::{Error, Result, classify::StrategyClassifier};

pub struct ODataClient {
	client: Client,
	url: String,
	headers: HeaderMap,
	top: Option<u32>,
	sap_client: Option<String>,
	credentials: Option<(String, String)>,
	classifier: StrategyClassifier,
}
impl ODataClient {
	pub fn new(cfg: &wo_config::ODataSource, classifier: StrategyClassifier) -> Result<Self> {
		let client = Client::builder()
			.timeout(StdDuration::from_millis(cfg.timeout_ms))
			.build()
			.map_err(|err| Error::InvalidConfig { message: err.to_string() })?;
		let url = format!(
			"{}/{}/{}",
			cfg.base_url.trim_end_matches('/'),
			cfg.service_path.trim_matches('/'),
			cfg.entity_set.trim_matches('/')
		);
		let credentials = cfg.username.clone().zip(cfg.password.clone());

		Ok(Self {
			client,
			url,
			headers: request_headers(&cfg.default_headers)?,
			top: cfg.top,
			sap_client: cfg.sap_client.clone(),
			credentials,
			classifier,
		})
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn query(&self, lang: &str) -> Vec<(&'static str, String)> {
		let mut query = vec![("$format", "json".to_string())];

		if let Some(top) = self.top {
			query.push(("$top", top.to_string()));
		}
		if let Some(sap_client) = &self.sap_client {
			query.push(("sap-client", sap_client.clone()));
		}

		query.push(("sap-language", lang.to_string()));

		query
	}

	/// Reads the JSON representation only; an Atom XML feed fails as `Error::InvalidResponse`.
	pub async fn fetch_work_orders(&self, lang: &str) -> Result<Vec<WorkOrderRecord>> {
		let mut request =
			self.client.get(&self.url).headers(self.headers.clone()).query(&self.query(lang));

		if let Some((username, password)) = &self.credentials {
			request = request.basic_auth(username, Some(password));
		}

		let res = request.send().await?;
		let status = res.status();

		if !status.is_success() {
			let body = res.text().await.unwrap_or_default();

			return Err(Error::Status { status: status.as_u16(), body });
		}

		let json: Value = res.json().await?;
		let records = parse_entity_set(&json, &self.classifier)?;

		tracing::debug!(url = %self.url, records = records.len(), "Fetched work orders from SAP.");

		Ok(records)
	}
}

fn request_headers(default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: "source.odata.default_headers values must be strings.".to_string(),
			});
		};
		let name = HeaderName::from_bytes(key.as_bytes())
			.map_err(|err| Error::InvalidConfig { message: format!("Header {key}: {err}") })?;
		let value = raw
			.parse::<HeaderValue>()
			.map_err(|err| Error::InvalidConfig { message: format!("Header {key}: {err}") })?;

		headers.insert(name, value);
	}

	Ok(headers)
}

/// Accepts both `{"d": {"results": [...]}}` and the older `{"d": [...]}` envelope.
fn parse_entity_set(json: &Value, classifier: &StrategyClassifier) -> Result<Vec<WorkOrderRecord>> {
	let d = json.get("d").ok_or_else(|| Error::InvalidResponse {
		message: "response is missing the \"d\" envelope.".to_string(),
	})?;
	let entries = d
		.get("results")
		.unwrap_or(d)
		.as_array()
		.ok_or_else(|| Error::InvalidResponse { message: "entity set is not an array.".to_string() })?;

	entries
		.iter()
		.enumerate()
		.map(|(index, entry)| {
			let entry = entry.as_object().ok_or_else(|| Error::InvalidResponse {
				message: format!("entry {index} is not an object."),
			})?;

			map_entry(entry, classifier)
		})
		.collect()
}

fn map_entry(entry: &Map<String, Value>, classifier: &StrategyClassifier) -> Result<WorkOrderRecord> {
	let country = text(entry, "Landx");

	Ok(WorkOrderRecord {
		credate: parse_credate(&text(entry, "Credate"))?,
		dealer_code: text(entry, "DealerCode"),
		vin: text(entry, "Vin"),
		wo_status: text(entry, "WoStatus"),
		wo_status_text: text(entry, "WoStatusText"),
		wo_type: text(entry, "WoType"),
		wo_type_text: text(entry, "WoTypeText"),
		// Not exposed by WOHeaderSet.
		fg_status_text: String::new(),
		pds: String::new(),
		demo: String::new(),
		wono: text(entry, "Wono"),
		creuser: text(entry, "Creuser"),
		strategy: classifier.classify(&country),
		ra_country_text: country,
		wo_onay_text: text(entry, "Wonaytext"),
		reject_note: text(entry, "Wonot"),
		enability_button: text(entry, "Wonay") == "X",
	})
}

fn text(entry: &Map<String, Value>, key: &str) -> String {
	match entry.get(key) {
		Some(Value::String(value)) => value.trim().to_string(),
		Some(Value::Null) | None => String::new(),
		Some(other) => other.to_string(),
	}
}

/// Reads `/Date(<millis>[+-offset])/` or an ISO date/datetime.
fn parse_credate(raw: &str) -> Result<Option<Date>> {
	let raw = raw.trim();

	if raw.is_empty() {
		return Ok(None);
	}

	let invalid = || Error::InvalidResponse { message: format!("invalid Credate {raw:?}.") };

	if let Some(inner) = raw.strip_prefix("/Date(").and_then(|rest| rest.strip_suffix(")/")) {
		let end = inner
			.char_indices()
			.skip(1)
			.find(|(_, ch)| *ch == '+' || *ch == '-')
			.map(|(index, _)| index)
			.unwrap_or(inner.len());
		let millis: i128 = inner[..end].parse().map_err(|_| invalid())?;
		let nanos = millis.checked_mul(1_000_000).ok_or_else(invalid)?;
		let at = OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| invalid())?;

		return Ok(Some(at.date()));
	}

	let date_part = raw.split('T').next().unwrap_or(raw);

	date_serde::parse(date_part).map(Some).map_err(|_| invalid())
}
