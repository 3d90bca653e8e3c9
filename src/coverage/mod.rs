//! Time-coverage validation for survey spans.

mod timeline;

pub use timeline::{check_time_coverage, TimeSpanRecord};
