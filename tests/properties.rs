use proptest::prelude::*;

use u_tollnet::distance::{build, unroll};
use u_tollnet::models::{Edge, EdgeTable};

/// Random tables over a small id range so pairs repeat and collide.
fn edge_tables() -> impl Strategy<Value = EdgeTable> {
    prop::collection::vec((0i64..12, 0i64..12, 0u32..1000), 1..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(s, e, d)| Edge::new(s, e, f64::from(d) / 4.0))
            .collect()
    })
}

/// Consecutive-stop routes: the input shape chain propagation is meant for.
fn routes() -> impl Strategy<Value = EdgeTable> {
    prop::collection::vec(1u32..500, 1..15).prop_map(|legs| {
        legs.into_iter()
            .enumerate()
            .map(|(i, d)| Edge::new(i as i64, i as i64 + 1, f64::from(d)))
            .collect()
    })
}

proptest! {
    #[test]
    fn built_matrix_is_symmetric_with_zero_diagonal(edges in edge_tables()) {
        let m = build(&edges).unwrap();
        prop_assert!(m.is_symmetric(0.0));
        prop_assert!(m.has_zero_diagonal());
        prop_assert_eq!(m.ids().to_vec(), edges.location_ids());
    }

    #[test]
    fn unroll_has_all_ordered_pairs(edges in edge_tables()) {
        let m = build(&edges).unwrap();
        let flat = unroll(&m);
        let n = m.size();
        prop_assert_eq!(flat.len(), n * (n - 1));
        prop_assert!(flat.iter().all(|e| !e.is_self_loop()));
    }

    #[test]
    fn rebuild_from_unroll_is_stable(edges in edge_tables()) {
        let m = build(&edges).unwrap();
        prop_assume!(m.size() >= 2);
        prop_assert_eq!(build(&unroll(&m)).unwrap(), m);
    }

    #[test]
    fn route_distances_are_prefix_sums(edges in routes()) {
        let m = build(&edges).unwrap();
        let legs: Vec<f64> = edges.iter().map(|e| e.distance).collect();
        for i in 0..m.size() {
            let mut expected = 0.0;
            for j in (i + 1)..m.size() {
                expected += legs[j - 1];
                prop_assert_eq!(m.get(i, j), expected);
                prop_assert_eq!(m.get(j, i), expected);
            }
        }
    }
}
