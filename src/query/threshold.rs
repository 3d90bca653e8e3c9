//! Mean-distance threshold query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::models::{EdgeTable, LocationId};

/// Bound factors applied to the reference mean.
///
/// Defaults to `[mean × 0.9, mean × 1.1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Multiplier for the lower bound.
    pub lower_factor: f64,
    /// Multiplier for the upper bound.
    pub upper_factor: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            lower_factor: 0.9,
            upper_factor: 1.1,
        }
    }
}

/// Mean outbound distance of a reference stop and the derived bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceStats {
    /// The reference stop.
    pub reference: LocationId,
    /// Mean distance over the reference's outbound edges.
    pub mean: f64,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl ReferenceStats {
    /// Returns `true` if `distance` lies within the inclusive bounds.
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.lower && distance <= self.upper
    }
}

/// Computes the mean outbound distance of `reference` and its bounds.
///
/// # Errors
///
/// [`NetError::NotFound`] if `reference` never appears as a start id.
pub fn reference_stats(
    edges: &EdgeTable,
    reference: LocationId,
    config: &ThresholdConfig,
) -> Result<ReferenceStats> {
    let (count, total) = edges
        .outbound(reference)
        .fold((0usize, 0.0), |(n, sum), e| (n + 1, sum + e.distance));
    if count == 0 {
        return Err(NetError::NotFound { id: reference });
    }

    let mean = total / count as f64;
    Ok(ReferenceStats {
        reference,
        mean,
        lower: mean * config.lower_factor,
        upper: mean * config.upper_factor,
    })
}

/// Start ids with at least one edge within ±10% of the reference mean.
///
/// The bounds come from the mean of the reference's own outbound distances,
/// but each edge is compared individually: a start id qualifies as soon as
/// one of its rows falls inside `[mean × 0.9, mean × 1.1]`. The reference
/// itself is included only if one of its own rows qualifies.
///
/// Returns the qualifying ids sorted and without duplicates.
///
/// # Errors
///
/// [`NetError::NotFound`] if `reference` has no outbound edges.
///
/// # Examples
///
/// ```
/// use u_tollnet::models::{Edge, EdgeTable, LocationId};
/// use u_tollnet::query::within_threshold;
///
/// let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0), Edge::new(2, 3, 15.0)]);
/// let ids = within_threshold(&edges, LocationId::new(1)).unwrap();
/// assert_eq!(ids, vec![LocationId::new(1)]);
/// ```
pub fn within_threshold(edges: &EdgeTable, reference: LocationId) -> Result<Vec<LocationId>> {
    within_threshold_with(edges, reference, &ThresholdConfig::default())
}

/// [`within_threshold`] with explicit bound factors.
pub fn within_threshold_with(
    edges: &EdgeTable,
    reference: LocationId,
    config: &ThresholdConfig,
) -> Result<Vec<LocationId>> {
    let stats = reference_stats(edges, reference, config)?;
    let ids: BTreeSet<LocationId> = edges
        .iter()
        .filter(|e| stats.contains(e.distance))
        .map(|e| e.start)
        .collect();

    log::debug!(
        "reference {} mean {:.3}, bounds [{:.3}, {:.3}]: {} ids qualify",
        reference,
        stats.mean,
        stats.lower,
        stats.upper,
        ids.len()
    );
    Ok(ids.into_iter().collect())
}
