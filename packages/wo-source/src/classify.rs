use std::collections::HashMap;

use wo_domain::StrategyId;

use crate::{Error, Result};

/// Assigns each record exactly one strategy from its country display text.
#[derive(Debug, Clone)]
pub struct StrategyClassifier {
	default: StrategyId,
	countries: HashMap<String, StrategyId>,
}
impl StrategyClassifier {
	pub fn from_config(cfg: &wo_config::Strategy) -> Result<Self> {
		let default = parse_strategy("strategy.default", &cfg.default)?;
		let mut countries = HashMap::with_capacity(cfg.countries.len());

		for (country, strategy) in &cfg.countries {
			let label = format!("strategy.countries.{country}");

			countries.insert(country_key(country), parse_strategy(&label, strategy)?);
		}

		Ok(Self { default, countries })
	}

	pub fn classify(&self, country: &str) -> StrategyId {
		self.countries.get(&country_key(country)).copied().unwrap_or(self.default)
	}
}

fn parse_strategy(label: &str, raw: &str) -> Result<StrategyId> {
	raw.parse().map_err(|err| Error::InvalidConfig { message: format!("{label}: {err}") })
}

fn country_key(country: &str) -> String {
	country.trim().to_lowercase()
}
