//! Weekly timeline coverage per location pair.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::LocationId;
use crate::week::{self, WEEK_SECONDS};

/// A recorded time span for a pair of locations.
///
/// Column names follow the survey export: `id`, `id_2`, `startDay`,
/// `startTime`, `endDay`, `endTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpanRecord {
    /// First location of the pair.
    pub id: LocationId,
    /// Second location of the pair.
    pub id_2: LocationId,
    /// Day the span starts, as a day name.
    #[serde(rename = "startDay")]
    pub start_day: String,
    /// Time of day the span starts.
    #[serde(rename = "startTime")]
    pub start_time: NaiveTime,
    /// Day the span ends, as a day name.
    #[serde(rename = "endDay")]
    pub end_day: String,
    /// Last second covered on the end day.
    #[serde(rename = "endTime")]
    pub end_time: NaiveTime,
}

impl TimeSpanRecord {
    /// Half-open `[start, end)` second ranges on the Monday-based week.
    ///
    /// The end time is inclusive at one-second resolution, so a span ending
    /// at `23:59:59` closes the day. A span ending before it starts wraps
    /// from Sunday into Monday and yields two ranges.
    pub fn week_ranges(&self) -> Result<Vec<(u32, u32)>> {
        let start = week::seconds_into_week(week::parse_day(&self.start_day)?, self.start_time);
        let end = week::seconds_into_week(week::parse_day(&self.end_day)?, self.end_time);

        Ok(if end >= start {
            vec![(start, end + 1)]
        } else {
            vec![(start, WEEK_SECONDS), (0, end + 1)]
        })
    }
}

/// Returns `true` if the ranges jointly cover the whole week.
fn covers_week(mut ranges: Vec<(u32, u32)>) -> bool {
    ranges.sort_unstable();
    let mut covered = 0;
    for (start, end) in ranges {
        if start > covered {
            return false;
        }
        covered = covered.max(end);
    }
    covered >= WEEK_SECONDS
}

/// Checks, for each `(id, id_2)` pair, whether its spans cover all seven
/// days around the clock.
///
/// `true` means complete coverage. Keys are returned in ascending order.
///
/// # Errors
///
/// [`NetError::UnknownDay`](crate::error::NetError::UnknownDay) if any day
/// name cannot be parsed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use u_tollnet::coverage::{check_time_coverage, TimeSpanRecord};
/// use u_tollnet::models::LocationId;
///
/// let span = TimeSpanRecord {
///     id: LocationId::new(1),
///     id_2: LocationId::new(2),
///     start_day: "Monday".into(),
///     start_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     end_day: "Sunday".into(),
///     end_time: NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
/// };
/// let result = check_time_coverage(&[span]).unwrap();
/// assert!(result[&(LocationId::new(1), LocationId::new(2))]);
/// ```
pub fn check_time_coverage(
    spans: &[TimeSpanRecord],
) -> Result<BTreeMap<(LocationId, LocationId), bool>> {
    let mut by_pair: BTreeMap<(LocationId, LocationId), Vec<(u32, u32)>> = BTreeMap::new();
    for span in spans {
        by_pair
            .entry((span.id, span.id_2))
            .or_default()
            .extend(span.week_ranges()?);
    }

    let result: BTreeMap<_, _> = by_pair
        .into_iter()
        .map(|(key, ranges)| (key, covers_week(ranges)))
        .collect();
    log::debug!(
        "{} of {} pairs have full weekly coverage",
        result.values().filter(|&&ok| ok).count(),
        result.len()
    );
    Ok(result)
}
