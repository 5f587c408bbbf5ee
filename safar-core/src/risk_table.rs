//! Historical base risk lookup keyed by segment identifier.
//!
//! The `RiskTable` trait is the engine's read-only view of whatever
//! produced the historical risk figures. A lookup miss is not an error:
//! the scorer substitutes a configured default so a route is never
//! unscoreable merely because one segment is unmapped.

use std::collections::HashMap;

use crate::segment::RISK_SCALE_MAX;

/// Read-only access to historical base risk per road segment.
///
/// # Examples
/// ```
/// use safar_core::{MemoryRiskTable, RiskTable};
///
/// let table = MemoryRiskTable::from_entries([(1, 20.0), (2, 75.0)]);
/// assert_eq!(table.base_risk(1), Some(20.0));
/// assert_eq!(table.base_risk(99), None);
/// ```
pub trait RiskTable {
    /// Return the base risk for `segment_id` on the 0–100 scale, or `None`
    /// when the segment is unmapped.
    fn base_risk(&self, segment_id: u64) -> Option<f64>;
}

/// In-memory [`RiskTable`] backed by a `HashMap`.
///
/// Suited to the table sizes a single city produces; entries are clamped
/// onto the 0–100 scale at insertion so the trait's contract holds even
/// for sloppy upstream data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRiskTable {
    risks: HashMap<u64, f64>,
}

impl MemoryRiskTable {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a table from `(segment_id, base_risk)` pairs.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let mut table = Self::new();
        for (segment_id, base_risk) in entries {
            table.insert(segment_id, base_risk);
        }
        table
    }

    /// Insert or replace the base risk for a segment.
    ///
    /// Non-finite values are treated as zero; finite values are clamped
    /// onto the 0–100 scale.
    pub fn insert(&mut self, segment_id: u64, base_risk: f64) {
        let clamped = if base_risk.is_finite() {
            base_risk.clamp(0.0, RISK_SCALE_MAX)
        } else {
            0.0
        };
        self.risks.insert(segment_id, clamped);
    }

    /// Number of mapped segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.risks.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }
}

impl RiskTable for MemoryRiskTable {
    fn base_risk(&self, segment_id: u64) -> Option<f64> {
        self.risks.get(&segment_id).copied()
    }
}

impl<T: RiskTable + ?Sized> RiskTable for &T {
    fn base_risk(&self, segment_id: u64) -> Option<f64> {
        (**self).base_risk(segment_id)
    }
}
