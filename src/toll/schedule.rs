//! Time-of-week toll discounts.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::TollRecord;
use crate::models::LocationId;
use crate::week::{self, WEEK};

/// A weekday time band and the factor applied to tolls starting in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountBand {
    /// First second of the band.
    pub start: NaiveTime,
    /// Last second of the band, reported as the window end.
    pub end: NaiveTime,
    /// Multiplier for every vehicle toll.
    pub factor: f64,
}

/// Discount factors by day and time.
///
/// Weekdays are split into bands; Saturday and Sunday use one flat factor
/// over the whole day.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use u_tollnet::toll::DiscountSchedule;
///
/// let schedule = DiscountSchedule::default();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(schedule.factor_for(Weekday::Wed, noon), 1.2);
/// assert_eq!(schedule.factor_for(Weekday::Sat, noon), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountSchedule {
    /// Weekday bands, ascending by start time and covering the whole day.
    pub weekday_bands: Vec<DiscountBand>,
    /// Factor for Saturday and Sunday.
    pub weekend_factor: f64,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            weekday_bands: vec![
                DiscountBand {
                    start: NaiveTime::MIN,
                    end: week::clock(10, 0, 0),
                    factor: 0.8,
                },
                DiscountBand {
                    start: week::clock(10, 0, 0),
                    end: week::clock(18, 0, 0),
                    factor: 1.2,
                },
                DiscountBand {
                    start: week::clock(18, 0, 0),
                    end: week::end_of_day(),
                    factor: 0.8,
                },
            ],
            weekend_factor: 0.7,
        }
    }
}

impl DiscountSchedule {
    /// Factor for a window starting at `time` on `day`.
    ///
    /// On weekdays this is the band with the latest start not after `time`;
    /// a time before every band gets no discount (factor 1.0).
    pub fn factor_for(&self, day: Weekday, time: NaiveTime) -> f64 {
        if week::is_weekend(day) {
            return self.weekend_factor;
        }
        self.weekday_bands
            .iter()
            .rev()
            .find(|band| band.start <= time)
            .map_or(1.0, |band| band.factor)
    }

    /// Every `(day, start, end, factor)` window of the week, Monday first.
    pub fn windows(&self) -> Vec<(Weekday, NaiveTime, NaiveTime, f64)> {
        let mut out = Vec::new();
        for day in WEEK {
            if week::is_weekend(day) {
                out.push((day, NaiveTime::MIN, week::end_of_day(), self.weekend_factor));
            } else {
                out.extend(
                    self.weekday_bands
                        .iter()
                        .map(|band| (day, band.start, band.end, band.factor)),
                );
            }
        }
        out
    }
}

/// A toll record restricted to one time window of the week, with discounted
/// vehicle tolls.
///
/// Days serialize as full English names and times as `HH:MM:SS`; on read,
/// day names are accepted full or abbreviated, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedTollRecord {
    /// Origin location.
    pub id_start: LocationId,
    /// Destination location.
    pub id_end: LocationId,
    /// Edge distance.
    pub distance: f64,
    /// Day the window opens.
    #[serde(
        serialize_with = "week::serialize_day",
        deserialize_with = "week::deserialize_day"
    )]
    pub start_day: Weekday,
    /// Time the window opens.
    pub start_time: NaiveTime,
    /// Day the window closes.
    #[serde(
        serialize_with = "week::serialize_day",
        deserialize_with = "week::deserialize_day"
    )]
    pub end_day: Weekday,
    /// Last second inside the window.
    pub end_time: NaiveTime,
    /// Discounted motorcycle toll.
    pub moto: f64,
    /// Discounted car toll.
    pub car: f64,
    /// Discounted recreational vehicle toll.
    pub rv: f64,
    /// Discounted bus toll.
    pub bus: f64,
    /// Discounted truck toll.
    pub truck: f64,
}

/// Expands every toll record into the week's time windows and applies each
/// window's discount factor to the vehicle tolls.
///
/// With the default schedule each record yields 17 rows: three bands for each
/// of the five weekdays and one full-day window for Saturday and Sunday.
pub fn calculate_time_based_toll_rates(
    records: &[TollRecord],
    schedule: &DiscountSchedule,
) -> Vec<TimedTollRecord> {
    let windows = schedule.windows();
    let mut out = Vec::with_capacity(records.len() * windows.len());

    for record in records {
        for &(day, start, end, factor) in &windows {
            let scaled = record.scaled(factor);
            out.push(TimedTollRecord {
                id_start: record.id_start,
                id_end: record.id_end,
                distance: record.distance,
                start_day: day,
                start_time: start,
                end_day: day,
                end_time: end,
                moto: scaled.moto,
                car: scaled.car,
                rv: scaled.rv,
                bus: scaled.bus,
                truck: scaled.truck,
            });
        }
    }
    log::debug!(
        "expanded {} toll records into {} timed rows",
        records.len(),
        out.len()
    );
    out
}
