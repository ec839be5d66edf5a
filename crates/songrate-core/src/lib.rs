pub mod aggregator;
pub mod domain;
pub mod errors;
pub mod ports;

pub use aggregator::{HighestRated, RecordAggregator};
pub use errors::{CoreError, InputError};
