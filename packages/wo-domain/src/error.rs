use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("{field} is not a valid calendar date: {value:?}.")]
	InvalidDate { field: String, value: String },
	#[error("date_from {from} is after date_to {to}.")]
	DateRangeInverted { from: Date, to: Date },
}
impl ValidationError {
	pub fn code(&self) -> &'static str {
		match self {
			Self::InvalidDate { .. } => "invalid_date",
			Self::DateRangeInverted { .. } => "date_range_inverted",
		}
	}

	pub fn field(&self) -> &str {
		match self {
			Self::InvalidDate { field, .. } => field,
			Self::DateRangeInverted { .. } => "date_from",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown strategy '{0}'.")]
pub struct ParseStrategyError(pub String);
