//! Survey statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::LocationId;

/// One row of a vehicle-count survey between two locations.
///
/// Columns not listed here (dates, timestamps) are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    /// Origin location.
    pub id_1: LocationId,
    /// Destination location.
    pub id_2: LocationId,
    /// Route number the count was taken on.
    pub route: i64,
    /// Motorcycle count.
    pub moto: f64,
    /// Car count.
    pub car: f64,
    /// Recreational vehicle count.
    pub rv: f64,
    /// Bus count.
    pub bus: f64,
    /// Truck count.
    pub truck: f64,
}

/// Bucket of the `car` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarBand {
    /// `car < 15`
    Low,
    /// `15 <= car < 25`
    Medium,
    /// `car >= 25`
    High,
}

impl CarBand {
    /// Every band.
    pub const ALL: [CarBand; 3] = [CarBand::Low, CarBand::Medium, CarBand::High];

    /// Bucket for `car`, or `None` for NaN.
    pub fn classify(car: f64) -> Option<Self> {
        if car.is_nan() {
            None
        } else if car < 15.0 {
            Some(CarBand::Low)
        } else if car < 25.0 {
            Some(CarBand::Medium)
        } else {
            Some(CarBand::High)
        }
    }

    /// Lowercase label used as the count key.
    pub fn label(self) -> &'static str {
        match self {
            CarBand::Low => "low",
            CarBand::Medium => "medium",
            CarBand::High => "high",
        }
    }
}

/// Counts records per [`CarBand`], keyed by label in alphabetical order.
///
/// All three labels are present even when their count is zero.
///
/// # Examples
///
/// ```
/// use u_tollnet::survey::{car_type_counts, SurveyRecord};
/// use u_tollnet::models::LocationId;
///
/// let row = |car| SurveyRecord {
///     id_1: LocationId::new(1),
///     id_2: LocationId::new(2),
///     route: 1,
///     moto: 0.0,
///     car,
///     rv: 0.0,
///     bus: 0.0,
///     truck: 0.0,
/// };
/// let counts = car_type_counts(&[row(3.0), row(15.0), row(30.0), row(31.0)]);
/// let keys: Vec<_> = counts.keys().copied().collect();
/// assert_eq!(keys, vec!["high", "low", "medium"]);
/// assert_eq!(counts["high"], 2);
/// ```
pub fn car_type_counts(records: &[SurveyRecord]) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> =
        CarBand::ALL.iter().map(|band| (band.label(), 0)).collect();
    for band in records.iter().filter_map(|r| CarBand::classify(r.car)) {
        *counts.entry(band.label()).or_insert(0) += 1;
    }
    counts
}

/// Ascending row indexes whose `bus` count exceeds twice the column mean.
pub fn bus_indexes(records: &[SurveyRecord]) -> Vec<usize> {
    if records.is_empty() {
        return Vec::new();
    }
    let mean = records.iter().map(|r| r.bus).sum::<f64>() / records.len() as f64;
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.bus > 2.0 * mean)
        .map(|(i, _)| i)
        .collect()
}

/// Ascending routes whose mean `truck` count is greater than 7.
pub fn filter_routes(records: &[SurveyRecord]) -> Vec<i64> {
    let mut by_route: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = by_route.entry(r.route).or_insert((0.0, 0));
        entry.0 += r.truck;
        entry.1 += 1;
    }
    by_route
        .into_iter()
        .filter(|&(_, (sum, n))| sum / n as f64 > 7.0)
        .map(|(route, _)| route)
        .collect()
}
