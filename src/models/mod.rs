//! Domain model types for toll network tables.
//!
//! Provides the typed location identifier and the edge table that every
//! pipeline stage consumes or produces.

mod edge;
mod location;

pub use edge::{Edge, EdgeTable};
pub use location::LocationId;
