//! Edge table to symmetric distance matrix.
//!
//! Construction runs in fixed stages over an owned, position-indexed matrix:
//! direct entries, diagonal reset, then chain propagation. Propagation treats
//! the ascending id sequence as a route where only consecutive stops are
//! measured and reconstructs every other pair by summing along that route.

use std::collections::BTreeMap;

use crate::error::{NetError, Result};
use crate::models::{EdgeTable, LocationId};

use super::DistanceMatrix;

/// Builds a dense, symmetric, zero-diagonal distance matrix from an edge table.
///
/// 1. Repeated `(start, end)` rows are summed.
/// 2. Each pair is mirrored and both directions are added. The one exception
///    is a pair given as exactly one row per direction with equal distances:
///    that is a single mirrored record (as [`unroll`](fn@crate::distance::unroll) emits)
///    and counts once.
/// 3. The diagonal is zeroed, discarding self-edges.
/// 4. For offsets `k = 2, 3, …` and rows `i` ascending, every pair `(i, i+k)`
///    without a direct measurement becomes `m[i][i+k-1] + m[i+k-1][i+k]`.
///
/// Step 4 assumes the stops form a simple path in id order. It is not a
/// shortest-path search and gives wrong distances for any other topology.
///
/// # Errors
///
/// [`NetError::EmptyInput`] if `edges` has no rows.
///
/// # Examples
///
/// ```
/// use u_tollnet::distance::build;
/// use u_tollnet::models::{Edge, EdgeTable, LocationId};
///
/// let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0), Edge::new(2, 3, 15.0)]);
/// let dm = build(&edges).unwrap();
///
/// let id = LocationId::new;
/// assert_eq!(dm.distance(id(1), id(3)), Some(25.0));
/// assert_eq!(dm.distance(id(2), id(1)), Some(10.0));
/// ```
pub fn build(edges: &EdgeTable) -> Result<DistanceMatrix> {
    if edges.is_empty() {
        return Err(NetError::EmptyInput);
    }

    let mut dm = DistanceMatrix::zeroed(edges.location_ids());
    let direct = fill_direct(&mut dm, edges);
    zero_diagonal(&mut dm);
    propagate_chain(&mut dm, &direct);

    log::debug!(
        "built {n}x{n} distance matrix from {} edges ({} direct pairs)",
        edges.len(),
        direct.iter().filter(|&&d| d).count() / 2,
        n = dm.size()
    );
    Ok(dm)
}

/// Writes aggregated, mirrored direct entries and returns the row-major mask of
/// positions that hold a direct measurement.
fn fill_direct(dm: &mut DistanceMatrix, edges: &EdgeTable) -> Vec<bool> {
    let n = dm.size();
    let mut direct = vec![false; n * n];

    // (summed distance, row count) per direction
    let mut sums: BTreeMap<(LocationId, LocationId), (f64, usize)> = BTreeMap::new();
    for e in edges {
        let entry = sums.entry((e.start, e.end)).or_insert((0.0, 0));
        entry.0 += e.distance;
        entry.1 += 1;
    }

    for (&(start, end), &(forward, forward_rows)) in &sums {
        if start == end {
            log::warn!("ignoring self-edge on location {start} (distance {forward})");
            continue;
        }
        let (Some(i), Some(j)) = (dm.index_of(start), dm.index_of(end)) else {
            continue;
        };
        if direct[i * n + j] {
            continue;
        }

        let value = match sums.get(&(end, start)) {
            Some(&(backward, 1)) if forward_rows == 1 && backward == forward => forward,
            Some(&(backward, _)) => forward + backward,
            None => forward,
        };
        dm.set_symmetric(i, j, value);
        direct[i * n + j] = true;
        direct[j * n + i] = true;
    }
    direct
}

fn zero_diagonal(dm: &mut DistanceMatrix) {
    for i in 0..dm.size() {
        dm.set(i, i, 0.0);
    }
}

/// Fills pairs without a direct measurement by summing along the id chain.
///
/// Offsets must be visited in increasing order: `(i, i+k)` reads `(i, i+k-1)`,
/// which the previous offset may have just written.
fn propagate_chain(dm: &mut DistanceMatrix, direct: &[bool]) {
    let n = dm.size();
    for offset in 2..n {
        for i in 0..(n - offset) {
            let j = i + offset;
            if direct[i * n + j] {
                continue;
            }
            let d = dm.get(i, j - 1) + dm.get(j - 1, j);
            log::trace!("propagated ({i}, {j}) = {d}");
            dm.set_symmetric(i, j, d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn table(rows: &[(i64, i64, f64)]) -> EdgeTable {
        rows.iter().map(|&(s, e, d)| Edge::new(s, e, d)).collect()
    }

    fn at(dm: &DistanceMatrix, a: i64, b: i64) -> f64 {
        dm.distance(LocationId::new(a), LocationId::new(b))
            .expect("id in matrix")
    }

    #[test]
    fn test_empty_input() {
        let err = build(&EdgeTable::new()).unwrap_err();
        assert!(matches!(err, NetError::EmptyInput));
    }

    #[test]
    fn test_two_hop_propagation() {
        let dm = build(&table(&[(1, 2, 10.0), (2, 3, 15.0)])).expect("build");
        assert_eq!(dm.size(), 3);
        assert_eq!(at(&dm, 1, 2), 10.0);
        assert_eq!(at(&dm, 2, 1), 10.0);
        assert_eq!(at(&dm, 2, 3), 15.0);
        assert_eq!(at(&dm, 1, 3), 25.0);
        assert_eq!(at(&dm, 3, 1), 25.0);
        assert!(dm.has_zero_diagonal());
    }

    #[test]
    fn test_input_order_irrelevant() {
        let a = build(&table(&[(1, 2, 10.0), (2, 3, 15.0)])).expect("build");
        let b = build(&table(&[(3, 2, 15.0), (2, 1, 10.0)])).expect("build");
        assert_eq!(a, b);
    }

    #[test]
    fn test_chain_of_four() {
        let dm = build(&table(&[(1, 2, 1.0), (2, 3, 2.0), (3, 4, 3.0)])).expect("build");
        assert_eq!(at(&dm, 1, 3), 3.0);
        assert_eq!(at(&dm, 2, 4), 5.0);
        assert_eq!(at(&dm, 1, 4), 6.0);
        assert_eq!(at(&dm, 4, 1), 6.0);
    }

    #[test]
    fn test_duplicate_rows_summed() {
        let dm = build(&table(&[(1, 2, 10.0), (1, 2, 5.0)])).expect("build");
        assert_eq!(at(&dm, 1, 2), 15.0);
        assert_eq!(at(&dm, 2, 1), 15.0);
    }

    #[test]
    fn test_independent_directions_added() {
        let dm = build(&table(&[(1, 2, 10.0), (2, 1, 4.0)])).expect("build");
        assert_eq!(at(&dm, 1, 2), 14.0);
        assert_eq!(at(&dm, 2, 1), 14.0);
    }

    #[test]
    fn test_mirrored_record_counted_once() {
        let dm = build(&table(&[(1, 2, 10.0), (2, 1, 10.0)])).expect("build");
        assert_eq!(at(&dm, 1, 2), 10.0);
    }

    #[test]
    fn test_repeated_rows_with_reverse_added() {
        let dm = build(&table(&[(1, 2, 5.0), (1, 2, 5.0), (2, 1, 10.0)])).expect("build");
        assert_eq!(at(&dm, 1, 2), 20.0);
        assert_eq!(at(&dm, 2, 1), 20.0);
    }

    #[test]
    fn test_repeated_rows_both_directions_added() {
        let dm = build(&table(&[(1, 2, 5.0), (1, 2, 5.0), (2, 1, 5.0), (2, 1, 5.0)]))
            .expect("build");
        assert_eq!(at(&dm, 1, 2), 20.0);
    }

    #[test]
    fn test_direct_long_range_kept() {
        let dm = build(&table(&[(1, 2, 10.0), (2, 3, 15.0), (1, 3, 7.0)])).expect("build");
        assert_eq!(at(&dm, 1, 3), 7.0);
    }

    #[test]
    fn test_propagation_reads_direct_prefix() {
        let dm = build(&table(&[
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (1, 3, 10.0),
        ]))
        .expect("build");
        assert_eq!(at(&dm, 1, 4), 11.0);
        assert_eq!(at(&dm, 2, 4), 2.0);
    }

    #[test]
    fn test_missing_adjacent_pair_stays_zero() {
        let dm = build(&table(&[(1, 2, 5.0), (1, 3, 9.0)])).expect("build");
        assert_eq!(at(&dm, 2, 3), 0.0);
        assert_eq!(at(&dm, 1, 3), 9.0);
    }

    #[test]
    fn test_self_edge_discarded() {
        let dm = build(&table(&[(1, 1, 42.0), (1, 2, 3.0)])).expect("build");
        assert_eq!(at(&dm, 1, 1), 0.0);
        assert_eq!(at(&dm, 1, 2), 3.0);
    }

    #[test]
    fn test_single_location() {
        let dm = build(&table(&[(7, 7, 12.0)])).expect("build");
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_two_locations_no_propagation() {
        let dm = build(&table(&[(5, 9, 2.5)])).expect("build");
        assert_eq!(dm.size(), 2);
        assert_eq!(at(&dm, 9, 5), 2.5);
    }

    #[test]
    fn test_negative_distance_passes_through() {
        let dm = build(&table(&[(1, 2, -4.0), (2, 3, 1.0)])).expect("build");
        assert_eq!(at(&dm, 1, 3), -3.0);
    }

    #[test]
    fn test_symmetric_and_zero_diagonal() {
        let dm = build(&table(&[
            (10, 20, 3.5),
            (20, 30, 1.25),
            (30, 40, 8.0),
            (40, 50, 2.0),
            (20, 10, 1.0),
        ]))
        .expect("build");
        assert!(dm.is_symmetric(0.0));
        assert!(dm.has_zero_diagonal());
        assert_eq!(at(&dm, 10, 20), 4.5);
        assert_eq!(at(&dm, 10, 50), 4.5 + 1.25 + 8.0 + 2.0);
    }
}
