//! Risk scoring for candidate driving routes.
//!
//! The crate implements the engine's four moving parts:
//! - **Context adjusters** ([`combine`], [`accident_increment`]): pure
//!   functions turning weather, vehicle class, time of day, and accident
//!   proximity into multiplicative and additive risk adjustments.
//! - **Route scoring** ([`RouteRiskScorer`]): per-segment adjusted risks
//!   aggregated into a distance-weighted route score with a top-segment
//!   breakdown.
//! - **Selection** ([`recommend`], [`rank`]): deterministic ranking and
//!   the single recommended-route flag.
//! - **Forecasting** ([`RouteRiskScorer::forecast`]): the same scorer
//!   re-sampled across a departure-hour grid to find the optimal hour.
//!
//! Every computation is deterministic and side-effect free; the scorer
//! holds no shared mutable state and may be called concurrently.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use safar_core::{ContextBundle, MemoryRiskTable, RouteCandidate, Segment, WeatherCondition};
//! use safar_scorer::RouteRiskScorer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = MemoryRiskTable::from_entries([(1, 20.0), (2, 55.0)]);
//! let scorer = RouteRiskScorer::new(table);
//!
//! let direct = RouteCandidate::new(
//!     1,
//!     "Direct Route",
//!     vec![Segment::new(
//!         1,
//!         "Marine Drive",
//!         Coord { x: 72.8236, y: 18.9432 },
//!         Coord { x: 72.8295, y: 19.0596 },
//!         20.0,
//!     )?],
//! );
//! let highway = RouteCandidate::new(
//!     2,
//!     "Via Highway",
//!     vec![Segment::new(
//!         2,
//!         "Western Express Highway",
//!         Coord { x: 72.8295, y: 19.0596 },
//!         Coord { x: 72.8697, y: 19.1136 },
//!         55.0,
//!     )?],
//! );
//!
//! let context = ContextBundle::neutral().with_weather(WeatherCondition::Rain);
//! let batch = scorer.score_routes(&[direct, highway], &context);
//! assert_eq!(batch.routes.len(), 2);
//! assert!(batch.routes[0].recommended);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod adjust;
mod forecast;
mod policy;
mod scorer;
mod select;

pub use adjust::{accident_increment, combine};
pub use forecast::{ForecastError, ForecastSample, RiskForecast};
pub use policy::{
    AccidentPolicy, ScoringPolicy, SeverityIncrements, TimeOfDayMultipliers, VehicleProfile,
    VehicleProfiles, WeatherMultipliers,
};
pub use scorer::{RejectedCandidate, RouteRiskScorer, ScoreBatch, ScoreError};
pub use select::{rank, recommend};
