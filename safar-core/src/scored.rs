//! Scored routes: the engine's output for one candidate.

use std::time::Duration;

use crate::{AccidentReport, RouteCandidate};

/// Categorical risk band derived from a numeric score.
///
/// Boundary values belong to the lower band: the intervals are
/// `[0, 35]` low, `(35, 65]` medium, and `(65, 100]` high.
///
/// # Examples
/// ```
/// use safar_core::RiskLevel;
///
/// assert_eq!(RiskLevel::from_score(35.0), RiskLevel::Low);
/// assert_eq!(RiskLevel::from_score(65.0), RiskLevel::Medium);
/// assert_eq!(RiskLevel::from_score(65.01), RiskLevel::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Scores in `[0, 35]`.
    Low,
    /// Scores in `(35, 65]`.
    Medium,
    /// Scores in `(65, 100]`.
    High,
}

impl RiskLevel {
    /// Upper bound of the low band.
    pub const LOW_CEILING: f64 = 35.0;
    /// Upper bound of the medium band.
    pub const MEDIUM_CEILING: f64 = 65.0;

    /// Derive the band for a score. A pure function of its input.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= Self::LOW_CEILING {
            Self::Low
        } else if score <= Self::MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Return the band as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a route's per-segment risk breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRisk {
    /// Identifier of the segment.
    pub segment_id: u64,
    /// Road name, for display.
    pub name: String,
    /// Context-adjusted risk of this segment, on the 0–100 scale.
    pub risk: f64,
}

/// A candidate route annotated with its risk assessment.
///
/// Created once per scoring call and immutable thereafter; consumers read
/// it but never mutate it. Exactly one route per non-empty result set has
/// `recommended` set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRoute {
    /// The candidate this assessment applies to.
    pub route: RouteCandidate,
    /// Aggregate risk on the 0–100 scale, clamped.
    pub risk_score: f64,
    /// Categorical band for `risk_score`.
    pub risk_level: RiskLevel,
    /// Highest-risk segments, descending by adjusted risk.
    pub risk_details: Vec<SegmentRisk>,
    /// Accident reports that contributed to the score, for explainability.
    pub matched_accidents: Vec<AccidentReport>,
    /// Total route length in kilometres.
    pub distance_km: f64,
    /// Travel-time estimate for the baseline vehicle class.
    pub base_duration: Duration,
    /// Travel-time estimate adjusted for the context's vehicle class.
    pub adjusted_duration: Duration,
    /// Whether the selector chose this route.
    pub recommended: bool,
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "round-trip tests should fail fast")]

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, RiskLevel::Low)]
    #[case(35.0, RiskLevel::Low)]
    #[case(35.01, RiskLevel::Medium)]
    #[case(65.0, RiskLevel::Medium)]
    #[case(65.01, RiskLevel::High)]
    #[case(100.0, RiskLevel::High)]
    fn boundary_values_belong_to_lower_band(#[case] score: f64, #[case] expected: RiskLevel) {
        assert_eq!(RiskLevel::from_score(score), expected);
    }

    #[rstest]
    fn bands_order_by_danger() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn segment_risk_round_trips_through_json() {
        let entry = SegmentRisk {
            segment_id: 7,
            name: "SV Road".to_owned(),
            risk: 61.44,
        };
        let json = serde_json::to_string(&entry).expect("serialise");
        let back: SegmentRisk = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, entry);
    }
}
