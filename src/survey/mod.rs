//! Statistics over vehicle-count survey records.
//!
//! - [`car_type_counts`] — Binned counts of the `car` column
//! - [`bus_indexes`] — Rows with unusually high `bus` counts
//! - [`filter_routes`] — Routes with a high mean `truck` count
//! - [`car_matrix`] — `car` counts pivoted into an id-by-id matrix
//! - [`multiply_matrix`] — Cutoff-based scaling of a car matrix

mod car_matrix;
mod stats;

pub use car_matrix::{car_matrix, multiply_matrix};
pub use stats::{bus_indexes, car_type_counts, filter_routes, CarBand, SurveyRecord};
