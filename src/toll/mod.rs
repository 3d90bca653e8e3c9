//! Toll tables derived from edge tables.
//!
//! - [`calculate_toll_rates`] — Per-vehicle toll columns from distances
//! - [`calculate_time_based_toll_rates`] — Weekly time windows with discounts

mod rates;
mod schedule;

pub use rates::{calculate_toll_rates, TollRates, TollRecord, VehicleClass};
pub use schedule::{
    calculate_time_based_toll_rates, DiscountBand, DiscountSchedule, TimedTollRecord,
};
