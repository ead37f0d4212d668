use time::{Date, PrimitiveDateTime, macros::format_description};

use crate::{
	error::ValidationError,
	strategy::{StrategyId, StrategySet},
};

/// Inclusive calendar-date range. An unset bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
	from: Option<Date>,
	to: Option<Date>,
}
impl DateRange {
	pub fn new(from: Option<Date>, to: Option<Date>) -> Result<Self, ValidationError> {
		if let (Some(from), Some(to)) = (from, to)
			&& from > to
		{
			return Err(ValidationError::DateRangeInverted { from, to });
		}

		Ok(Self { from, to })
	}

	pub fn start(&self) -> Option<Date> {
		self.from
	}

	pub fn end(&self) -> Option<Date> {
		self.to
	}

	pub fn is_open(&self) -> bool {
		self.from.is_none() && self.to.is_none()
	}

	/// A record without a creation date only passes a fully open range.
	pub fn contains(&self, date: Option<Date>) -> bool {
		if self.is_open() {
			return true;
		}

		let Some(date) = date else {
			return false;
		};

		self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
	}
}

/// Normalized search query.
///
/// Text criteria are stored trimmed and uppercased, so the filter compares them without
/// re-normalizing per record. Blank input is the same as no input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
	vin: Option<String>,
	dealer_code: Option<String>,
	wo_no: Option<String>,
	dates: DateRange,
	strategies: StrategySet,
}
impl SearchCriteria {
	pub fn with_vin(mut self, raw: Option<&str>) -> Self {
		self.vin = canonical_text(raw);

		self
	}

	pub fn with_dealer_code(mut self, raw: Option<&str>) -> Self {
		self.dealer_code = canonical_text(raw);

		self
	}

	pub fn with_wo_no(mut self, raw: Option<&str>) -> Self {
		self.wo_no = canonical_text(raw);

		self
	}

	pub fn with_dates(mut self, dates: DateRange) -> Self {
		self.dates = dates;

		self
	}

	pub fn with_strategy(mut self, strategy: StrategyId) -> Self {
		self.strategies.insert(strategy);

		self
	}

	pub fn vin(&self) -> Option<&str> {
		self.vin.as_deref()
	}

	pub fn dealer_code(&self) -> Option<&str> {
		self.dealer_code.as_deref()
	}

	pub fn wo_no(&self) -> Option<&str> {
		self.wo_no.as_deref()
	}

	pub fn dates(&self) -> &DateRange {
		&self.dates
	}

	pub fn strategies(&self) -> &StrategySet {
		&self.strategies
	}

	pub fn is_unconstrained(&self) -> bool {
		self.vin.is_none()
			&& self.dealer_code.is_none()
			&& self.wo_no.is_none()
			&& self.dates.is_open()
			&& self.strategies.is_empty()
	}
}

/// Parses a request date in `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` form. Blank input is
/// treated as absent.
pub fn parse_calendar_date(field: &str, raw: Option<&str>) -> Result<Option<Date>, ValidationError> {
	let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
		return Ok(None);
	};
	let parsed = if value.contains('T') {
		PrimitiveDateTime::parse(
			value,
			format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
		)
		.map(PrimitiveDateTime::date)
	} else {
		crate::date_serde::parse(value)
	};

	parsed.map(Some).map_err(|_| ValidationError::InvalidDate {
		field: field.to_string(),
		value: value.to_string(),
	})
}

fn canonical_text(raw: Option<&str>) -> Option<String> {
	raw.map(str::trim).filter(|value| !value.is_empty()).map(str::to_uppercase)
}
