use serde::{Deserialize, Serialize};
use time::Date;

use crate::strategy::StrategyId;

/// One work order as enumerated by a source.
///
/// Only `credate`, `dealer_code`, `vin`, `wono` and `strategy` take part in matching. The
/// remaining fields are carried through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderRecord {
	#[serde(default, with = "crate::date_serde::option")]
	pub credate: Option<Date>,
	#[serde(default)]
	pub dealer_code: String,
	#[serde(default)]
	pub vin: String,
	#[serde(default)]
	pub wo_status: String,
	#[serde(default)]
	pub wo_status_text: String,
	#[serde(default)]
	pub wo_type: String,
	#[serde(default)]
	pub wo_type_text: String,
	#[serde(default)]
	pub fg_status_text: String,
	#[serde(default)]
	pub pds: String,
	#[serde(default)]
	pub demo: String,
	#[serde(default)]
	pub wono: String,
	#[serde(default)]
	pub creuser: String,
	#[serde(default)]
	pub ra_country_text: String,
	#[serde(default)]
	pub wo_onay_text: String,
	#[serde(default)]
	pub reject_note: String,
	#[serde(default)]
	pub enability_button: bool,
	pub strategy: StrategyId,
}
