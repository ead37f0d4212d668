pub mod classify;
pub mod mock;
pub mod odata;

mod error;

pub use classify::StrategyClassifier;
pub use error::{Error, Result};
pub use mock::MockTable;
pub use odata::ODataClient;
