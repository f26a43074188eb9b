#[macro_use]
extern crate serde;

mod error;
pub use error::{Result, SleepError};

mod segment;
pub use segment::Segment;

mod labels;
pub use labels::{QualityLabel, Trend};

mod summary;
pub use summary::SleepSummary;

pub mod config;
pub use config::{AnalyticsConfig, RestfulThresholds};
