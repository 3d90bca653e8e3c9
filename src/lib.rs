//! # u-tollnet
//!
//! Toll network distance tables: builds a symmetric distance matrix from
//! measured stop-to-stop distances, flattens it back into an edge list, and
//! answers proximity queries and toll-rate questions over it.
//!
//! ## Modules
//!
//! - [`models`] — Location ids, edges and edge tables
//! - [`distance`] — Matrix construction with chain propagation, and unrolling
//! - [`query`] — Threshold queries against a reference stop
//! - [`toll`] — Per-vehicle toll rates and time-of-week discounts
//! - [`coverage`] — Weekly time-coverage validation
//! - [`survey`] — Vehicle-count survey statistics
//! - [`config`] — JSON pipeline configuration
//! - [`cli`] — Command handlers behind the `u-tollnet` binary
//!
//! ## Pipeline
//!
//! ```
//! use u_tollnet::distance::{build, unroll};
//! use u_tollnet::models::{Edge, EdgeTable, LocationId};
//! use u_tollnet::query::within_threshold;
//!
//! let edges = EdgeTable::from_edges(vec![
//!     Edge::new(1001400, 1001402, 9.7),
//!     Edge::new(1001402, 1001404, 20.2),
//!     Edge::new(1001404, 1001406, 16.0),
//! ]);
//! let matrix = build(&edges).unwrap();
//! let flat = unroll(&matrix);
//! assert_eq!(flat.len(), 4 * 3);
//!
//! let near = within_threshold(&flat, LocationId::new(1001400)).unwrap();
//! assert!(near.contains(&LocationId::new(1001400)));
//! ```

pub mod cli;
pub mod config;
pub mod coverage;
pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod query;
pub mod survey;
pub mod toll;
pub mod week;

pub use error::{NetError, Result};
