//! Facade crate for the Safar route risk engine.
//!
//! Re-exports the core domain types and the scoring, selection, and
//! forecasting surface so callers depend on a single crate.

#![forbid(unsafe_code)]

pub use safar_core::{
    AccidentFeed, AccidentReport, ContextBundle, Hour, HourError, MemoryRiskTable, ProviderError,
    RiskLevel, RiskTable, RouteCandidate, ScoredRoute, Segment, SegmentError, SegmentRisk,
    Severity, SeverityParseError, VehicleType, VehicleTypeParseError, WeatherCondition,
    WeatherParseError, WeatherProvider,
};

pub use safar_scorer::{
    accident_increment, combine, rank, recommend, AccidentPolicy, ForecastError, ForecastSample,
    RejectedCandidate, RiskForecast, RouteRiskScorer, ScoreBatch, ScoreError, ScoringPolicy,
    SeverityIncrements, TimeOfDayMultipliers, VehicleProfile, VehicleProfiles, WeatherMultipliers,
};
