//! Context adjusters: pure functions turning situational signals into
//! risk adjustments.
//!
//! The combination rule is a fixed contract: multiplicative factors are
//! applied to the base risk first, the additive accident increment second,
//! and the result is clamped onto the 0–100 scale. Tests assert the exact
//! formula, not a ballpark.

use safar_core::{AccidentReport, Segment};

use crate::policy::AccidentPolicy;

/// Ceiling of the risk scale.
pub(crate) const RISK_CEILING: f64 = 100.0;

/// Combine a segment's base risk with the context adjustments.
///
/// `adjusted = clamp(base * weather * vehicle * time + increment, 0, 100)`
///
/// # Examples
/// ```
/// use safar_scorer::combine;
///
/// // Heavy rain on a bike with one severe accident nearby.
/// let adjusted = combine(20.0, 1.29, 1.8, 1.0, 15.0);
/// assert!((adjusted - 61.44).abs() < 1e-9);
/// ```
#[must_use]
pub fn combine(
    base_risk: f64,
    weather_multiplier: f64,
    vehicle_multiplier: f64,
    time_multiplier: f64,
    accident_increment: f64,
) -> f64 {
    let multiplied = base_risk * weather_multiplier * vehicle_multiplier * time_multiplier;
    (multiplied + accident_increment).clamp(0.0, RISK_CEILING)
}

/// Additive risk increment from accident reports near one segment.
///
/// Sums the severity-weighted increments of every active report within
/// `policy.radius_km` of the segment, capped at `policy.cap`. Returns the
/// increment together with the indices of the reports that qualified, so
/// the scorer can surface them for explainability.
#[must_use]
pub fn accident_increment(
    policy: &AccidentPolicy,
    segment: &Segment,
    accidents: &[AccidentReport],
) -> (f64, Vec<usize>) {
    let mut increment = 0.0;
    let mut matched = Vec::new();
    for (index, report) in accidents.iter().enumerate() {
        if !report.is_active() {
            continue;
        }
        if segment.distance_km_to(report.location) <= policy.radius_km {
            increment += policy.increments.get(report.severity);
            matched.push(index);
        }
    }
    (increment.min(policy.cap), matched)
}

/// Round to two decimal places, the precision surfaced to callers.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
