//! Distance matrix construction and flattening.
//!
//! - [`build`] — Edge table to dense symmetric matrix with chain propagation
//! - [`unroll`] — Matrix back to an edge table of every ordered pair

mod builder;
mod matrix;
mod unroll;

pub use builder::build;
pub use matrix::DistanceMatrix;
pub use unroll::unroll;
