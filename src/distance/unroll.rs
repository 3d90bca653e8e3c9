//! Distance matrix to edge table.

use crate::models::{Edge, EdgeTable};

use super::DistanceMatrix;

/// Flattens a matrix into one edge per ordered pair of distinct ids.
///
/// Rows are emitted row-major in matrix order, so an n×n matrix yields
/// `n × (n - 1)` edges. Feeding the result back into
/// [`build`](crate::distance::build) reproduces the matrix, since every entry
/// is now a direct measurement given identically in both directions.
///
/// # Examples
///
/// ```
/// use u_tollnet::distance::{build, unroll};
/// use u_tollnet::models::{Edge, EdgeTable};
///
/// let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0), Edge::new(2, 3, 15.0)]);
/// let dm = build(&edges).unwrap();
/// let flat = unroll(&dm);
///
/// assert_eq!(flat.len(), 6);
/// assert_eq!(flat.edges()[1], Edge::new(1, 3, 25.0));
/// assert_eq!(build(&flat).unwrap(), dm);
/// ```
pub fn unroll(matrix: &DistanceMatrix) -> EdgeTable {
    let n = matrix.size();
    let ids = matrix.ids();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));

    for (i, &start) in ids.iter().enumerate() {
        for (j, &end) in ids.iter().enumerate() {
            if i == j {
                continue;
            }
            edges.push(Edge {
                start,
                end,
                distance: matrix.get(i, j),
            });
        }
    }
    log::debug!("unrolled {n}x{n} matrix into {} edges", edges.len());
    EdgeTable::from_edges(edges)
}
