//! Car-count matrices from survey records.

use std::collections::BTreeSet;

use crate::distance::DistanceMatrix;

use super::SurveyRecord;

/// Pivots the `car` column into a square matrix indexed by location id.
///
/// The axis is the ascending union of every `id_1` and `id_2`. Entry
/// (`id_1`, `id_2`) holds that row's `car` count; pairs without a record
/// are 0 and the diagonal is always 0. The matrix is not symmetrized. When
/// a pair appears more than once, the last record wins.
///
/// # Examples
///
/// ```
/// use u_tollnet::models::LocationId;
/// use u_tollnet::survey::{car_matrix, SurveyRecord};
///
/// let row = SurveyRecord {
///     id_1: LocationId::new(801),
///     id_2: LocationId::new(802),
///     route: 1,
///     moto: 0.0,
///     car: 16.0,
///     rv: 0.0,
///     bus: 0.0,
///     truck: 0.0,
/// };
/// let m = car_matrix(&[row]);
/// assert_eq!(m.distance(LocationId::new(801), LocationId::new(802)), Some(16.0));
/// assert_eq!(m.distance(LocationId::new(802), LocationId::new(801)), Some(0.0));
/// ```
pub fn car_matrix(records: &[SurveyRecord]) -> DistanceMatrix {
    let ids: Vec<_> = records
        .iter()
        .flat_map(|r| [r.id_1, r.id_2])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut matrix = DistanceMatrix::zeroed(ids);
    for r in records {
        if r.id_1 == r.id_2 {
            continue;
        }
        if let (Some(i), Some(j)) = (matrix.index_of(r.id_1), matrix.index_of(r.id_2)) {
            matrix.set(i, j, r.car);
        }
    }
    log::debug!("car matrix over {} locations", matrix.size());
    matrix
}

/// Scales every entry: values above 20 by 0.75, the rest by 1.25.
///
/// Results are rounded to one decimal place, ties to even.
pub fn multiply_matrix(matrix: &DistanceMatrix) -> DistanceMatrix {
    matrix.map(|v| {
        let scaled = if v > 20.0 { v * 0.75 } else { v * 1.25 };
        (scaled * 10.0).round_ties_even() / 10.0
    })
}
