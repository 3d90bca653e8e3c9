//! Pipeline configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::query::ThresholdConfig;
use crate::toll::{DiscountSchedule, TollRates};

/// Tunable constants for queries and toll tables.
///
/// Every section and field is optional in JSON; anything missing keeps its
/// default.
///
/// # Examples
///
/// ```
/// use u_tollnet::config::PipelineConfig;
///
/// let cfg = PipelineConfig::from_json_str(r#"{"tolls": {"truck": 4.0}}"#).unwrap();
/// assert_eq!(cfg.tolls.truck, 4.0);
/// assert_eq!(cfg.tolls.car, 1.2);
/// assert_eq!(cfg.threshold.upper_factor, 1.1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Bounds for threshold queries.
    pub threshold: ThresholdConfig,
    /// Per-vehicle toll coefficients.
    pub tolls: TollRates,
    /// Weekly discount schedule.
    pub discounts: DiscountSchedule,
}

impl PipelineConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;

    #[test]
    fn test_empty_document_is_default() {
        let cfg = PipelineConfig::from_json_str("{}").expect("parse");
        assert_eq!(cfg, PipelineConfig::default());
    }

    #[test]
    fn test_serialize_round_trip() {
        let cfg = PipelineConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        assert_eq!(PipelineConfig::from_json_str(&json).expect("parse"), cfg);
    }

    #[test]
    fn test_malformed() {
        let err = PipelineConfig::from_json_str("{\"tolls\": 3}").unwrap_err();
        assert!(matches!(err, NetError::Config(_)));
    }

    #[test]
    fn test_discount_times_parse() {
        let json = r#"{"discounts": {"weekday_bands": [
            {"start": "00:00:00", "end": "23:59:59", "factor": 0.9}
        ]}}"#;
        let cfg = PipelineConfig::from_json_str(json).expect("parse");
        assert_eq!(cfg.discounts.weekday_bands.len(), 1);
        assert_eq!(cfg.discounts.weekend_factor, 0.7);
    }
}
