use serde::{Deserialize as _, Deserializer, Serializer};
use time::Date;

pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	match value {
		Some(value) => crate::date_serde::serialize(value, serializer),
		None => serializer.serialize_none(),
	}
}

/// Blank strings read as `None`, matching how SAP exports unset dates.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<String>::deserialize(deserializer)?;

	match raw.as_deref().map(str::trim) {
		Some(value) if !value.is_empty() =>
			crate::date_serde::parse(value).map(Some).map_err(serde::de::Error::custom),
		_ => Ok(None),
	}
}
