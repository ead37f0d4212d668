pub mod criteria;
pub mod date_serde;
pub mod filter;
pub mod record;
pub mod strategy;

mod error;

pub use criteria::{DateRange, SearchCriteria};
pub use error::{ParseStrategyError, ValidationError};
pub use record::WorkOrderRecord;
pub use strategy::{StrategyId, StrategySet};
