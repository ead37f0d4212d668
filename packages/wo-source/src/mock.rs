use std::{fs, path::Path};

use wo_domain::WorkOrderRecord;

use crate::{Error, Result};

/// Immutable in-memory work-order table.
#[derive(Debug, Clone, Default)]
pub struct MockTable {
	records: Vec<WorkOrderRecord>,
}
impl MockTable {
	pub fn new(records: Vec<WorkOrderRecord>) -> Self {
		Self { records }
	}

	/// Reads a JSON array of records.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadTable { path: path.to_path_buf(), source: err })?;
		let records: Vec<WorkOrderRecord> = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseTable { path: path.to_path_buf(), source: err })?;

		tracing::info!(path = %path.display(), records = records.len(), "Loaded mock work-order table.");

		Ok(Self { records })
	}

	pub fn from_config(cfg: Option<&wo_config::MockSource>) -> Result<Self> {
		match cfg.and_then(|mock| mock.path.as_deref()) {
			Some(path) => Self::load(path),
			None => {
				tracing::warn!("No mock table path configured; serving an empty table.");

				Ok(Self::default())
			},
		}
	}

	pub fn records(&self) -> &[WorkOrderRecord] {
		&self.records
	}

	/// Owned copy of the table in table order.
	pub fn snapshot(&self) -> Vec<WorkOrderRecord> {
		self.records.clone()
	}
}
