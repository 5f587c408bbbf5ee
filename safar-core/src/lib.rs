//! Core domain types for the Safar route risk engine.
//!
//! The crate models the inputs and outputs of risk scoring: road
//! [`Segment`]s with historical base risk, candidate routes, the
//! per-request [`ContextBundle`] of situational signals, and the
//! [`ScoredRoute`] results the scorer produces. Collaborator traits
//! ([`RiskTable`], [`WeatherProvider`], [`AccidentFeed`]) describe the
//! external data sources the engine consumes without owning their I/O.
//!
//! All types are plain values; nothing here performs I/O or holds shared
//! mutable state, so every type is safe to use across threads.

#![forbid(unsafe_code)]

mod accident;
mod context;
mod hour;
mod risk_table;
mod route;
mod scored;
mod segment;
mod vehicle;
mod weather;

pub use accident::{AccidentReport, Severity, SeverityParseError};
pub use context::{AccidentFeed, ContextBundle, ProviderError, WeatherProvider};
pub use hour::{Hour, HourError};
pub use risk_table::{MemoryRiskTable, RiskTable};
pub use route::RouteCandidate;
pub use scored::{RiskLevel, ScoredRoute, SegmentRisk};
pub use segment::{Segment, SegmentError};
pub use vehicle::{VehicleType, VehicleTypeParseError};
pub use weather::{WeatherCondition, WeatherParseError};
