//! Risk forecasting across a grid of departure hours.
//!
//! Re-runs the scorer with the time-of-day adjuster bound to each hour in
//! turn, holding every other context signal fixed. Pure re-sampling: the
//! candidate and template are never mutated.

use thiserror::Error;

use safar_core::{ContextBundle, Hour, RiskTable, RouteCandidate};

use crate::scorer::{RouteRiskScorer, ScoreError};

/// One point of a time-vs-risk curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastSample {
    /// Hypothetical departure hour.
    pub hour: Hour,
    /// Risk score the route would receive at that hour.
    pub risk_score: f64,
}

/// A time-vs-risk curve with the optimal departure hour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskForecast {
    /// Samples in ascending hour order, one per distinct requested hour.
    pub samples: Vec<ForecastSample>,
    /// The hour with the minimum risk score; ties go to the earliest.
    pub optimal: Hour,
}

/// Errors returned by [`RouteRiskScorer::forecast`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// No hours were requested, so there is nothing to sample.
    #[error("forecast requires at least one departure hour")]
    EmptyHourGrid,
    /// The underlying scoring call failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl<T: RiskTable> RouteRiskScorer<T> {
    /// Sample the route's risk across `hours` and pick the optimal one.
    ///
    /// Duplicate hours are collapsed; samples come back in ascending hour
    /// order regardless of the grid's order. The optimal hour is the one
    /// with the minimum risk score, ties broken towards the earliest
    /// (soonest) hour.
    ///
    /// # Errors
    /// Returns [`ForecastError::EmptyHourGrid`] for an empty grid and
    /// propagates [`ScoreError`] when the candidate itself is invalid.
    pub fn forecast(
        &self,
        candidate: &RouteCandidate,
        template: &ContextBundle,
        hours: &[Hour],
    ) -> Result<RiskForecast, ForecastError> {
        let mut grid: Vec<Hour> = hours.to_vec();
        grid.sort_unstable();
        grid.dedup();
        if grid.is_empty() {
            return Err(ForecastError::EmptyHourGrid);
        }

        let mut samples = Vec::with_capacity(grid.len());
        for hour in grid {
            let context = template.clone().with_departure(hour);
            let scored = self.score_route(candidate, &context)?;
            samples.push(ForecastSample {
                hour,
                risk_score: scored.risk_score,
            });
        }

        // Ascending iteration plus a strict comparison keeps the earliest
        // hour on ties.
        let mut optimal = None;
        for sample in &samples {
            optimal = match optimal {
                None => Some(*sample),
                Some(best) if sample.risk_score < best.risk_score => Some(*sample),
                Some(best) => Some(best),
            };
        }
        optimal.map_or(Err(ForecastError::EmptyHourGrid), |best| {
            Ok(RiskForecast {
                samples,
                optimal: best.hour,
            })
        })
    }
}
