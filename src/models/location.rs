//! Location identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stop in the toll network.
///
/// Ids are totally ordered: matrix rows and columns are laid out in ascending
/// id order, and that order defines which stops count as adjacent.
///
/// # Examples
///
/// ```
/// use u_tollnet::models::LocationId;
///
/// let a = LocationId::new(1001400);
/// let b = LocationId::from(1001402_i64);
/// assert!(a < b);
/// assert_eq!(a.value(), 1001400);
/// assert_eq!(b.to_string(), "1001402");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    /// Wraps a raw numeric id.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw numeric id.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for LocationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![LocationId::new(3), LocationId::new(1), LocationId::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![LocationId::new(1), LocationId::new(2), LocationId::new(3)]
        );
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&LocationId::new(42)).expect("serialize");
        assert_eq!(json, "42");
        let id: LocationId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(id, LocationId::new(7));
    }
}
