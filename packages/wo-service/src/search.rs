use serde::{Deserialize, Serialize};

use wo_domain::{
	DateRange, SearchCriteria, StrategyId, ValidationError, WorkOrderRecord, criteria, filter,
};

use crate::{Error, RequestContext, Result, WorkOrderService};

pub const ERROR_TYPE_VALIDATION: &str = "validation_error";
pub const ERROR_TYPE_SOURCE: &str = "source_error";

/// Body of `POST /api/sap/work-orders/search`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
	pub i_lang: Option<String>,
	pub i_usercode: Option<String>,
	pub vin: Option<String>,
	pub dealer_code: Option<String>,
	pub wo_no: Option<String>,
	pub date_from: Option<String>,
	pub date_to: Option<String>,
	pub temsa_global: Option<bool>,
	pub temsa_global_gwk: Option<bool>,
	pub germany: Option<bool>,
	pub france: Option<bool>,
	pub north_america: Option<bool>,
}
impl SearchRequest {
	/// Validates and canonicalizes the request into matchable criteria.
	pub fn criteria(&self) -> Result<SearchCriteria, ValidationError> {
		let from = criteria::parse_calendar_date("date_from", self.date_from.as_deref())?;
		let to = criteria::parse_calendar_date("date_to", self.date_to.as_deref())?;
		let criteria = SearchCriteria::default()
			.with_vin(self.vin.as_deref())
			.with_dealer_code(self.dealer_code.as_deref())
			.with_wo_no(self.wo_no.as_deref())
			.with_dates(DateRange::new(from, to)?);

		Ok(self.selected_strategies().fold(criteria, SearchCriteria::with_strategy))
	}

	fn selected_strategies(&self) -> impl Iterator<Item = StrategyId> {
		[
			(self.temsa_global, StrategyId::TemsaGlobal),
			(self.temsa_global_gwk, StrategyId::TemsaGlobalGwtk),
			(self.germany, StrategyId::Germany),
			(self.france, StrategyId::France),
			(self.north_america, StrategyId::NorthAmerica),
		]
		.into_iter()
		.filter_map(|(flag, strategy)| flag.unwrap_or(false).then_some(strategy))
	}
}

/// Search envelope. A failure never carries work orders, and "no matches" is a success with an
/// empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
	pub success: bool,
	pub message: String,
	pub work_orders: Vec<WorkOrderRecord>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
}
impl SearchResponse {
	pub fn found(work_orders: Vec<WorkOrderRecord>) -> Self {
		Self {
			success: true,
			message: "Search completed successfully".to_string(),
			work_orders,
			error_type: None,
			error_message: None,
		}
	}

	pub fn failed(err: &Error) -> Self {
		let reason = err.to_string();

		Self {
			success: false,
			message: format!("Search failed: {reason}"),
			work_orders: Vec::new(),
			error_type: Some(err.error_type().to_string()),
			error_message: Some(reason),
		}
	}
}

impl WorkOrderService {
	pub async fn search(&self, req: SearchRequest) -> SearchResponse {
		match self.find_work_orders(&req).await {
			Ok(work_orders) => SearchResponse::found(work_orders),
			Err(err) => {
				tracing::warn!(error_type = err.error_type(), error = %err, "Work-order search failed.");

				SearchResponse::failed(&err)
			},
		}
	}

	/// Normalizes the request, enumerates the source and filters the snapshot.
	///
	/// Criteria are validated before the source is touched, so a malformed request never costs
	/// a backend round trip.
	pub async fn find_work_orders(&self, req: &SearchRequest) -> Result<Vec<WorkOrderRecord>> {
		let criteria = req.criteria()?;
		let ctx = self.request_context(req);
		let candidates = self.source.fetch(&ctx).await?;
		let candidate_count = candidates.len();
		let work_orders = filter::search(&criteria, candidates);

		tracing::info!(
			usercode = %ctx.usercode,
			lang = %ctx.lang,
			candidates = candidate_count,
			matched = work_orders.len(),
			"Work-order search completed."
		);

		Ok(work_orders)
	}

	/// Blank or missing identity fields fall back to the configured defaults.
	pub fn request_context(&self, req: &SearchRequest) -> RequestContext {
		RequestContext {
			lang: identity_or(req.i_lang.as_deref(), &self.cfg.request.lang),
			usercode: identity_or(req.i_usercode.as_deref(), &self.cfg.request.usercode),
		}
	}
}

fn identity_or(raw: Option<&str>, default: &str) -> String {
	raw.map(str::trim).filter(|value| !value.is_empty()).unwrap_or(default).to_string()
}
