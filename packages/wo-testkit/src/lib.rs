use time::{Date, macros::date};

use wo_domain::{StrategyId, WorkOrderRecord};

pub struct WorkOrderBuilder {
	record: WorkOrderRecord,
}
impl WorkOrderBuilder {
	pub fn new(wono: &str) -> Self {
		Self {
			record: WorkOrderRecord {
				credate: None,
				dealer_code: String::new(),
				vin: String::new(),
				wo_status: "10".to_string(),
				wo_status_text: "Created".to_string(),
				wo_type: "10".to_string(),
				wo_type_text: "Warranty Repair".to_string(),
				fg_status_text: String::new(),
				pds: String::new(),
				demo: String::new(),
				wono: wono.to_string(),
				creuser: "TESTUSER".to_string(),
				ra_country_text: String::new(),
				wo_onay_text: String::new(),
				reject_note: String::new(),
				enability_button: false,
				strategy: StrategyId::TemsaGlobal,
			},
		}
	}

	pub fn vin(mut self, vin: &str) -> Self {
		self.record.vin = vin.to_string();

		self
	}

	pub fn dealer_code(mut self, dealer_code: &str) -> Self {
		self.record.dealer_code = dealer_code.to_string();

		self
	}

	pub fn credate(mut self, credate: Date) -> Self {
		self.record.credate = Some(credate);

		self
	}

	pub fn country(mut self, country: &str) -> Self {
		self.record.ra_country_text = country.to_string();

		self
	}

	pub fn strategy(mut self, strategy: StrategyId) -> Self {
		self.record.strategy = strategy;

		self
	}

	pub fn enabled(mut self) -> Self {
		self.record.enability_button = true;

		self
	}

	pub fn build(self) -> WorkOrderRecord {
		self.record
	}
}

/// Five work orders, one per strategy, spread over March 2024.
pub fn sample_records() -> Vec<WorkOrderRecord> {
	vec![
		WorkOrderBuilder::new("WO-1001")
			.vin("ABC123XYZ")
			.dealer_code("D001")
			.credate(date!(2024 - 03 - 10))
			.country("Germany")
			.strategy(StrategyId::Germany)
			.build(),
		WorkOrderBuilder::new("WO-1002")
			.vin("TMS900FR1")
			.dealer_code("D014")
			.credate(date!(2024 - 03 - 01))
			.country("France")
			.strategy(StrategyId::France)
			.enabled()
			.build(),
		WorkOrderBuilder::new("WO-1003")
			.vin("TMS777TR4")
			.dealer_code("TR-221")
			.credate(date!(2024 - 03 - 31))
			.country("Turkey")
			.strategy(StrategyId::TemsaGlobal)
			.build(),
		WorkOrderBuilder::new("WO-1004")
			.vin("gwk555tr9")
			.dealer_code("tr-300")
			.credate(date!(2024 - 02 - 28))
			.country("Turkey")
			.strategy(StrategyId::TemsaGlobalGwtk)
			.build(),
		WorkOrderBuilder::new("WO-2001")
			.vin("NA1234US0")
			.dealer_code("US-77")
			.credate(date!(2024 - 04 - 02))
			.country("United States")
			.strategy(StrategyId::NorthAmerica)
			.build(),
	]
}
