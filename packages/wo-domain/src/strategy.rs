use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ParseStrategyError, record::WorkOrderRecord};

pub type StrategySet = BTreeSet<StrategyId>;

/// Business grouping a work order belongs to. Every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyId {
	TemsaGlobal,
	TemsaGlobalGwtk,
	Germany,
	France,
	NorthAmerica,
}
impl StrategyId {
	pub const ALL: [Self; 5] =
		[Self::TemsaGlobal, Self::TemsaGlobalGwtk, Self::Germany, Self::France, Self::NorthAmerica];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::TemsaGlobal => "TEMSA_GLOBAL",
			Self::TemsaGlobalGwtk => "TEMSA_GLOBAL_GWTK",
			Self::Germany => "GERMANY",
			Self::France => "FRANCE",
			Self::NorthAmerica => "NORTH_AMERICA",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::TemsaGlobal => "TEMSA Global",
			Self::TemsaGlobalGwtk => "TEMSA Global GWTK",
			Self::Germany => "Germany",
			Self::France => "France",
			Self::NorthAmerica => "North America",
		}
	}
}
impl fmt::Display for StrategyId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for StrategyId {
	type Err = ParseStrategyError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let normalized = raw.trim().to_ascii_uppercase();

		Self::ALL
			.into_iter()
			.find(|strategy| strategy.as_str() == normalized)
			.ok_or_else(|| ParseStrategyError(raw.to_string()))
	}
}

/// An empty selection places no constraint; otherwise the record's strategy must be one of
/// the selected ones.
pub fn matches(record: &WorkOrderRecord, selected: &StrategySet) -> bool {
	selected.is_empty() || selected.contains(&record.strategy)
}
