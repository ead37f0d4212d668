//! Serde helpers for `YYYY-MM-DD` calendar dates.

pub mod option;

use serde::{Deserialize, Deserializer, Serializer};
use time::{Date, macros::format_description};

pub fn parse(raw: &str) -> Result<Date, time::error::Parse> {
	Date::parse(raw, format_description!("[year]-[month]-[day]"))
}

pub fn format(value: &Date) -> Result<String, time::error::Format> {
	value.format(format_description!("[year]-[month]-[day]"))
}

pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let formatted = format(value).map_err(serde::ser::Error::custom)?;

	serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	parse(raw.trim()).map_err(serde::de::Error::custom)
}
