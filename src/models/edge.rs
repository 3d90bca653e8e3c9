//! Edge records and the edge table.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LocationId;
use crate::error::Result;
use crate::io;

/// A measured distance from one stop to another.
///
/// Serialized with the column names `id_start`, `id_end`, `distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Origin stop.
    #[serde(rename = "id_start")]
    pub start: LocationId,
    /// Destination stop.
    #[serde(rename = "id_end")]
    pub end: LocationId,
    /// Distance between the two stops.
    pub distance: f64,
}

impl Edge {
    /// Creates an edge from raw ids.
    pub fn new(start: i64, end: i64, distance: f64) -> Self {
        Self {
            start: LocationId::new(start),
            end: LocationId::new(end),
            distance,
        }
    }

    /// Returns `true` if the edge starts and ends at the same stop.
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

/// An ordered list of edges, the tabular input and output of the pipeline.
///
/// Rows are kept exactly as supplied. Repeated `(start, end)` pairs are only
/// merged (by summing) when [`aggregate`](EdgeTable::aggregate) is called.
///
/// # Examples
///
/// ```
/// use u_tollnet::models::{Edge, EdgeTable, LocationId};
///
/// let table: EdgeTable = vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(1, 2, 5.0),
///     Edge::new(2, 3, 15.0),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.len(), 3);
/// let sums = table.aggregate();
/// assert_eq!(sums[&(LocationId::new(1), LocationId::new(2))], 15.0);
/// assert_eq!(table.location_ids().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates a table from existing rows.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Appends a row.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Rows in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Rows whose start is `id`.
    pub fn outbound(&self, id: LocationId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.start == id)
    }

    /// Sums distances of rows sharing the same `(start, end)` pair.
    pub fn aggregate(&self) -> BTreeMap<(LocationId, LocationId), f64> {
        let mut sums = BTreeMap::new();
        for e in &self.edges {
            *sums.entry((e.start, e.end)).or_insert(0.0) += e.distance;
        }
        sums
    }

    /// Sorted, duplicate-free union of every start and end id.
    pub fn location_ids(&self) -> Vec<LocationId> {
        let mut ids: Vec<LocationId> = self
            .edges
            .iter()
            .flat_map(|e| [e.start, e.end])
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Reads a table from CSV with an `id_start,id_end,distance` header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        io::read_records(reader).map(Self::from_edges)
    }

    /// Reads a table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        io::read_records_from_path(path).map(Self::from_edges)
    }

    /// Writes the table as CSV, header included.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        io::write_records(writer, &self.edges)
    }

    /// Writes the table to a CSV file.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        io::write_records_to_path(path, &self.edges)
    }
}

impl FromIterator<Edge> for EdgeTable {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for EdgeTable {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
