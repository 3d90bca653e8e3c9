//! Proximity queries over edge tables.
//!
//! - [`within_threshold`] — Stops whose distances fall within ±10% of a
//!   reference stop's mean outbound distance

mod threshold;

pub use threshold::{
    reference_stats, within_threshold, within_threshold_with, ReferenceStats, ThresholdConfig,
};
