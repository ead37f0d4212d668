//! Conjunctive record filter.
//!
//! A single pass over the candidates. Predicates run in a fixed order (VIN, dealer code,
//! work-order number, date range, strategy) and stop at the first miss. Survivors keep their
//! input order, so the same criteria over the same snapshot always produce the same result.

use std::borrow::Borrow;

use crate::{criteria::SearchCriteria, record::WorkOrderRecord, strategy};

/// Returns the records accepted by `criteria`, in input order.
///
/// Works over owned records or borrowed ones; the records themselves are never modified.
pub fn search<I, R>(criteria: &SearchCriteria, records: I) -> Vec<R>
where
	I: IntoIterator<Item = R>,
	R: Borrow<WorkOrderRecord>,
{
	records
		.into_iter()
		.filter(|record| accepts(criteria, Borrow::<WorkOrderRecord>::borrow(record)))
		.collect()
}

pub fn accepts(criteria: &SearchCriteria, record: &WorkOrderRecord) -> bool {
	contains_text(&record.vin, criteria.vin())
		&& contains_text(&record.dealer_code, criteria.dealer_code())
		&& contains_text(&record.wono, criteria.wo_no())
		&& criteria.dates().contains(record.credate)
		&& strategy::matches(record, criteria.strategies())
}

// `needle` is already uppercased by `SearchCriteria`.
fn contains_text(value: &str, needle: Option<&str>) -> bool {
	match needle {
		Some(needle) => value.to_uppercase().contains(needle),
		None => true,
	}
}
