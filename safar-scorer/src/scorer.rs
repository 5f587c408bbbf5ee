//! The route risk scorer: one candidate plus one context in, one scored
//! route out.
//!
//! The scorer is stateless beyond its risk table and policy, performs no
//! I/O, and is safe to call concurrently from independent requests.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use safar_core::{
    ContextBundle, RiskLevel, RiskTable, RouteCandidate, ScoredRoute, Segment, SegmentRisk,
};

use crate::adjust::{accident_increment, combine, round2};
use crate::policy::ScoringPolicy;
use crate::select;

/// Floor weight for zero-length segments so they cannot zero the
/// denominator of the distance-weighted mean.
const MIN_SEGMENT_WEIGHT_KM: f64 = 1e-3;

/// Errors returned by [`RouteRiskScorer::score_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The candidate had no segments. A silent zero score would be
    /// indistinguishable from "perfectly safe", so this is an error.
    #[error("route must contain at least one segment")]
    EmptyRoute,
    /// A segment carried a non-finite coordinate. Distance maths on such
    /// geometry yields NaN weights and durations, so the candidate is
    /// refused up front.
    #[error("route geometry contains non-finite coordinates")]
    MalformedGeometry,
}

/// A candidate excluded from a batch, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCandidate {
    /// Request-scoped identifier of the candidate.
    pub id: u32,
    /// Label of the candidate.
    pub name: String,
    /// Why scoring refused it.
    pub reason: ScoreError,
}

/// Result of scoring a batch of candidates.
///
/// Invalid candidates never fail the batch; they are excluded from
/// `routes` and reported in `rejected` so the caller can distinguish
/// "no routes found" from "scoring failed".
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBatch {
    /// Scored routes ranked ascending by risk; exactly one is
    /// recommended when the list is non-empty.
    pub routes: Vec<ScoredRoute>,
    /// Candidates excluded from scoring.
    pub rejected: Vec<RejectedCandidate>,
}

/// Scores candidate routes against a historical risk table under a
/// per-request [`ContextBundle`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use safar_core::{ContextBundle, MemoryRiskTable, RouteCandidate, Segment};
/// use safar_scorer::RouteRiskScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = MemoryRiskTable::from_entries([(1, 20.0)]);
/// let scorer = RouteRiskScorer::new(table);
/// let segment = Segment::new(
///     1,
///     "Marine Drive",
///     Coord { x: 72.8236, y: 18.9432 },
///     Coord { x: 72.8236, y: 19.0150 },
///     20.0,
/// )?;
/// let route = RouteCandidate::new(1, "Direct Route", vec![segment]);
/// let scored = scorer.score_route(&route, &ContextBundle::neutral())?;
/// assert_eq!(scored.risk_score, 20.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RouteRiskScorer<T: RiskTable> {
    table: T,
    policy: ScoringPolicy,
}

impl<T: RiskTable> RouteRiskScorer<T> {
    /// Construct a scorer with the default policy.
    #[must_use]
    pub fn new(table: T) -> Self {
        Self::with_policy(table, ScoringPolicy::default())
    }

    /// Construct a scorer with an explicit policy.
    #[must_use]
    pub const fn with_policy(table: T, policy: ScoringPolicy) -> Self {
        Self { table, policy }
    }

    /// The policy this scorer applies.
    #[must_use]
    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score a single candidate under `context`.
    ///
    /// Each segment's base risk is looked up (falling back to the policy
    /// default for unmapped segments), adjusted by the weather, vehicle,
    /// and time-of-day multipliers plus any nearby accident increment,
    /// and the route score is the distance-weighted mean of the adjusted
    /// segment risks. Identical inputs always produce identical output.
    ///
    /// # Errors
    /// Returns [`ScoreError::EmptyRoute`] for a candidate with no
    /// segments and [`ScoreError::MalformedGeometry`] when any segment
    /// carries a non-finite coordinate.
    pub fn score_route(
        &self,
        candidate: &RouteCandidate,
        context: &ContextBundle,
    ) -> Result<ScoredRoute, ScoreError> {
        if candidate.segments.is_empty() {
            return Err(ScoreError::EmptyRoute);
        }
        if candidate
            .segments
            .iter()
            .any(|segment| !segment.has_finite_geometry())
        {
            return Err(ScoreError::MalformedGeometry);
        }

        let weather_multiplier = self.policy.weather.get(context.weather);
        let vehicle = self.policy.vehicles.get(context.vehicle);
        let time_multiplier = context
            .departure
            .map_or(1.0, |hour| self.policy.time_of_day.get(hour));

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut details = Vec::with_capacity(candidate.segments.len());
        let mut matched_indices = BTreeSet::new();

        for segment in &candidate.segments {
            let base_risk = self.base_risk_for(segment);
            let (increment, matched) =
                accident_increment(&self.policy.accidents, segment, &context.accidents);
            matched_indices.extend(matched);

            let adjusted = combine(
                base_risk,
                weather_multiplier,
                vehicle.risk_multiplier,
                time_multiplier,
                increment,
            );
            let weight = segment.length_km().max(MIN_SEGMENT_WEIGHT_KM);
            weighted_sum += adjusted * weight;
            total_weight += weight;
            details.push(SegmentRisk {
                segment_id: segment.id,
                name: segment.name.clone(),
                risk: round2(adjusted),
            });
        }

        let risk_score = round2(weighted_sum / total_weight);

        // Stable sort keeps the original segment order for equal risks.
        details.sort_by(|a, b| b.risk.partial_cmp(&a.risk).unwrap_or(Ordering::Equal));
        details.truncate(self.policy.detail_count);

        let matched_accidents = matched_indices
            .into_iter()
            .filter_map(|index| context.accidents.get(index).cloned())
            .collect();

        let distance_km = candidate.distance_km();
        let (base_duration, adjusted_duration) =
            self.durations(distance_km, vehicle.speed_factor, risk_score);

        Ok(ScoredRoute {
            route: candidate.clone(),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            risk_details: details,
            matched_accidents,
            distance_km: round2(distance_km),
            base_duration,
            adjusted_duration,
            recommended: false,
        })
    }

    /// Score a batch of candidates and mark the recommendation.
    ///
    /// Routes come back ranked ascending by risk (ties broken by shorter
    /// adjusted duration, then input order); the first route of a
    /// non-empty result carries `recommended = true`. Invalid candidates
    /// are excluded and reported, never fatal. An empty candidate set
    /// yields an empty batch.
    #[must_use]
    pub fn score_routes(
        &self,
        candidates: &[RouteCandidate],
        context: &ContextBundle,
    ) -> ScoreBatch {
        let mut routes = Vec::with_capacity(candidates.len());
        let mut rejected = Vec::new();
        for candidate in candidates {
            match self.score_route(candidate, context) {
                Ok(scored) => routes.push(scored),
                Err(reason) => {
                    warn!(
                        "excluding candidate {} ('{}') from batch: {reason}",
                        candidate.id, candidate.name
                    );
                    rejected.push(RejectedCandidate {
                        id: candidate.id,
                        name: candidate.name.clone(),
                        reason,
                    });
                }
            }
        }
        select::rank(&mut routes);
        select::recommend(&mut routes);
        ScoreBatch { routes, rejected }
    }

    fn base_risk_for(&self, segment: &Segment) -> f64 {
        self.table.base_risk(segment.id).unwrap_or_else(|| {
            debug!(
                "segment {} ('{}') not in risk table, using default {}",
                segment.id, segment.name, self.policy.default_base_risk
            );
            self.policy.default_base_risk
        })
    }

    fn durations(&self, distance_km: f64, speed_factor: f64, risk_score: f64) -> (Duration, Duration) {
        let base_minutes = distance_km / self.policy.base_speed_kmh * 60.0;
        let mut adjusted_minutes = base_minutes / speed_factor;
        if risk_score > self.policy.congestion_threshold {
            adjusted_minutes *= self.policy.congestion_factor;
        }
        (
            Duration::from_secs_f64(base_minutes * 60.0),
            Duration::from_secs_f64(adjusted_minutes * 60.0),
        )
    }
}
