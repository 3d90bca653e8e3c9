//! Dense distance matrix keyed by location id.

use std::io::Write;

use crate::error::Result;
use crate::models::LocationId;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns share one axis: the ascending list of [`LocationId`]s
/// returned by [`ids`](DistanceMatrix::ids). Position `i` on either axis is the
/// i-th smallest id.
///
/// Matrices produced by [`build`](crate::distance::build) are symmetric with
/// a zero diagonal and are never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_tollnet::distance::DistanceMatrix;
/// use u_tollnet::models::LocationId;
///
/// let ids = vec![LocationId::new(1), LocationId::new(2)];
/// let dm = DistanceMatrix::from_data(ids, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.distance(LocationId::new(2), LocationId::new(1)), Some(5.0));
/// assert!(dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<LocationId>,
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix over `ids` with every entry zero.
    ///
    /// `ids` must already be sorted and duplicate-free.
    pub(crate) fn zeroed(ids: Vec<LocationId>) -> Self {
        let size = ids.len();
        Self {
            ids,
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if `ids` is not strictly ascending or the data length
    /// doesn't match `ids.len()²`.
    pub fn from_data(ids: Vec<LocationId>, data: Vec<f64>) -> Option<Self> {
        let size = ids.len();
        if data.len() != size * size || ids.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        Some(Self { ids, data, size })
    }

    /// Returns the entry at matrix position (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, distance: f64) {
        self.data[row * self.size + col] = distance;
    }

    /// Writes `distance` at (`row`, `col`) and (`col`, `row`).
    pub(crate) fn set_symmetric(&mut self, row: usize, col: usize, distance: f64) {
        self.set(row, col, distance);
        self.set(col, row, distance);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The shared row/column axis, ascending.
    pub fn ids(&self) -> &[LocationId] {
        &self.ids
    }

    /// Matrix position of `id`, if present.
    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Distance between two ids, or `None` if either is not in the matrix.
    pub fn distance(&self, from: LocationId, to: LocationId) -> Option<f64> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        Some(self.get(row, col))
    }

    /// Entries of row `row`, in column order.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every diagonal entry is exactly zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }

    /// Returns a matrix over the same axis with `f` applied to every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tollnet::distance::DistanceMatrix;
    /// use u_tollnet::models::LocationId;
    ///
    /// let ids = vec![LocationId::new(1), LocationId::new(2)];
    /// let dm = DistanceMatrix::from_data(ids, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
    /// assert_eq!(dm.map(|d| d * 2.0).get(0, 1), 10.0);
    /// ```
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            ids: self.ids.clone(),
            data: self.data.iter().map(|&d| f(d)).collect(),
            size: self.size,
        }
    }

    /// Writes the matrix as a pivot table.
    ///
    /// The header is `id` followed by every column id; each following line is
    /// a row id followed by that row's distances.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        let mut header = Vec::with_capacity(self.size + 1);
        header.push("id".to_string());
        header.extend(self.ids.iter().map(|id| id.to_string()));
        wtr.write_record(&header)?;

        for (i, id) in self.ids.iter().enumerate() {
            let mut record = Vec::with_capacity(self.size + 1);
            record.push(id.to_string());
            record.extend(self.row(i).iter().map(|d| format!("{d:?}")));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<LocationId> {
        raw.iter().copied().map(LocationId::new).collect()
    }

    #[test]
    fn test_zeroed() {
        let dm = DistanceMatrix::zeroed(ids(&[1, 2, 3]));
        assert_eq!(dm.size(), 3);
        assert!(dm.row(1).iter().all(|&d| d == 0.0));
        assert!(dm.has_zero_diagonal());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(ids(&[4, 9]), vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(ids(&[1, 2]), vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_from_data_unsorted_ids() {
        assert!(DistanceMatrix::from_data(ids(&[2, 1]), vec![0.0; 4]).is_none());
        assert!(DistanceMatrix::from_data(ids(&[1, 1]), vec![0.0; 4]).is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let dm =
            DistanceMatrix::from_data(ids(&[10, 20]), vec![0.0, 7.5, 7.5, 0.0]).expect("valid");
        assert_eq!(dm.index_of(LocationId::new(20)), Some(1));
        assert_eq!(dm.index_of(LocationId::new(15)), None);
        assert_eq!(dm.distance(LocationId::new(10), LocationId::new(20)), Some(7.5));
        assert_eq!(dm.distance(LocationId::new(10), LocationId::new(30)), None);
    }

    #[test]
    fn test_set_symmetric() {
        let mut dm = DistanceMatrix::zeroed(ids(&[1, 2, 3]));
        dm.set_symmetric(0, 2, 42.0);
        assert_eq!(dm.get(0, 2), 42.0);
        assert_eq!(dm.get(2, 0), 42.0);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::zeroed(ids(&[1, 2]));
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_write_csv_pivot() {
        let dm = DistanceMatrix::from_data(ids(&[1, 2]), vec![0.0, 9.7, 9.7, 0.0]).expect("valid");
        let mut out = Vec::new();
        dm.write_csv(&mut out).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "id,1,2\n1,0.0,9.7\n2,9.7,0.0\n"
        );
    }

    #[test]
    fn test_map_keeps_axis() {
        let dm = DistanceMatrix::from_data(ids(&[3, 8]), vec![0.0, 4.0, 6.0, 0.0]).expect("valid");
        let halved = dm.map(|d| d / 2.0);
        assert_eq!(halved.ids(), dm.ids());
        assert_eq!(halved.row(0), &[0.0, 2.0]);
        assert_eq!(halved.row(1), &[3.0, 0.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::zeroed(Vec::new());
        assert!(dm.is_empty());
        assert!(dm.is_symmetric(0.0));
        assert!(dm.has_zero_diagonal());
    }
}
