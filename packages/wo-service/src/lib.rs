pub mod form_data;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use form_data::{DropdownOption, SearchFormData};
pub use search::{ERROR_TYPE_SOURCE, ERROR_TYPE_VALIDATION, SearchRequest, SearchResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use wo_config::Config;
use wo_domain::WorkOrderRecord;
use wo_source::{MockTable, ODataClient, StrategyClassifier};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Caller identity forwarded to the source on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
	pub lang: String,
	pub usercode: String,
}

/// Read-only enumeration of the candidate work orders for one request.
///
/// Implementations report their own failures; the service neither retries nor masks them.
pub trait WorkOrderSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(
		&'a self,
		ctx: &'a RequestContext,
	) -> BoxFuture<'a, wo_source::Result<Vec<WorkOrderRecord>>>;
}

pub struct WorkOrderService {
	pub cfg: Config,
	pub source: Arc<dyn WorkOrderSource>,
}
impl WorkOrderService {
	pub fn new(cfg: Config) -> Result<Self> {
		let source = build_source(&cfg)?;

		Ok(Self::with_source(cfg, source))
	}

	pub fn with_source(cfg: Config, source: Arc<dyn WorkOrderSource>) -> Self {
		Self { cfg, source }
	}
}

impl WorkOrderSource for MockTable {
	fn fetch<'a>(
		&'a self,
		_: &'a RequestContext,
	) -> BoxFuture<'a, wo_source::Result<Vec<WorkOrderRecord>>> {
		Box::pin(async move { Ok(self.snapshot()) })
	}
}

impl WorkOrderSource for ODataClient {
	fn fetch<'a>(
		&'a self,
		ctx: &'a RequestContext,
	) -> BoxFuture<'a, wo_source::Result<Vec<WorkOrderRecord>>> {
		Box::pin(self.fetch_work_orders(&ctx.lang))
	}
}

fn build_source(cfg: &Config) -> Result<Arc<dyn WorkOrderSource>> {
	match cfg.source.kind.as_str() {
		"mock" => Ok(Arc::new(MockTable::from_config(cfg.source.mock.as_ref())?)),
		"odata" => {
			let odata = cfg.source.odata.as_ref().ok_or_else(|| Error::Config {
				message: "source.odata is required when source.kind is odata.".to_string(),
			})?;
			let classifier = StrategyClassifier::from_config(&cfg.strategy)?;

			tracing::info!(base_url = %odata.base_url, "Using SAP OData work-order source.");

			Ok(Arc::new(ODataClient::new(odata, classifier)?))
		},
		other => Err(Error::Config { message: format!("Unsupported source kind {other:?}.") }),
	}
}
