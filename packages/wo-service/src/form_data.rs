use serde::{Deserialize, Serialize};

use wo_domain::StrategyId;

use crate::WorkOrderService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
	pub value: String,
	pub text: String,
}

/// Option lists for the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFormData {
	pub wo_types: Vec<DropdownOption>,
	pub wo_statuses: Vec<DropdownOption>,
	pub fg_statuses: Vec<DropdownOption>,
	pub countries: Vec<DropdownOption>,
	pub approval_statuses: Vec<DropdownOption>,
	pub ra_countries: Vec<DropdownOption>,
	pub strategies: Vec<DropdownOption>,
}

impl WorkOrderService {
	// TODO: Source these lists from the SAP value-help entity sets once the OData service
	// exposes them.
	pub fn form_data(&self) -> SearchFormData {
		SearchFormData {
			wo_types: options(&[
				("10", "Warranty Repair"),
				("20", "Customer Paid Repair"),
				("30", "Internal Repair"),
				("40", "Recall"),
			]),
			wo_statuses: options(&[
				("10", "Created"),
				("20", "Released"),
				("30", "In Progress"),
				("40", "Completed"),
				("41", "Pending Approval"),
				("50", "Closed"),
			]),
			fg_statuses: options(&[("10", "Not Started"), ("20", "In Progress"), ("30", "Completed")]),
			countries: options(&[
				("TR", "Turkey"),
				("DE", "Germany"),
				("FR", "France"),
				("EG", "Egypt"),
				("US", "United States"),
			]),
			approval_statuses: options(&[("A", "Approved"), ("R", "Rejected"), ("P", "Pending")]),
			ra_countries: options(&[("TR", "Turkey"), ("DE", "Germany"), ("EG", "Egypt")]),
			strategies: StrategyId::ALL
				.into_iter()
				.map(|strategy| DropdownOption {
					value: strategy.as_str().to_string(),
					text: strategy.label().to_string(),
				})
				.collect(),
		}
	}
}

fn options(pairs: &[(&str, &str)]) -> Vec<DropdownOption> {
	pairs
		.iter()
		.map(|(value, text)| DropdownOption { value: value.to_string(), text: text.to_string() })
		.collect()
}
