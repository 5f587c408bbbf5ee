//! The per-request bundle of situational signals.
//!
//! Scoring used to depend on ambient state ("current weather" cached in a
//! shared variable). The [`ContextBundle`] makes every signal an explicit
//! parameter threaded through each call, so independent requests share
//! nothing.

use log::debug;
use thiserror::Error;

use crate::{AccidentReport, Hour, VehicleType, WeatherCondition};

/// Failure reported by an external context provider.
///
/// Providers are network-backed collaborators; the engine only needs to
/// know that a fetch failed, not why, because every context signal has a
/// neutral substitute.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("context provider unavailable: {0}")]
pub struct ProviderError(pub String);

/// Source of the current weather condition.
pub trait WeatherProvider {
    /// Fetch the current condition.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the upstream service is unreachable
    /// or returns an unusable payload.
    fn current_condition(&self) -> Result<WeatherCondition, ProviderError>;
}

/// Source of currently active accident reports for the region.
pub trait AccidentFeed {
    /// Fetch all reports the feed considers active.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the store cannot be queried.
    fn active_accidents(&self) -> Result<Vec<AccidentReport>, ProviderError>;
}

/// Immutable value object carrying every signal one scoring call needs.
///
/// Constructed per request and never shared across requests. Cloning is
/// cheap enough for the forecast sampler, which re-binds the departure
/// hour across a grid.
///
/// # Examples
/// ```
/// use safar_core::{ContextBundle, VehicleType, WeatherCondition};
///
/// let context = ContextBundle::neutral()
///     .with_weather(WeatherCondition::Rain)
///     .with_vehicle(VehicleType::Bike);
/// assert_eq!(context.weather, WeatherCondition::Rain);
/// assert!(context.accidents.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextBundle {
    /// Current weather category.
    pub weather: WeatherCondition,
    /// Vehicle class being driven.
    pub vehicle: VehicleType,
    /// Planned departure hour; `None` means "now, hour unknown" and
    /// applies no time-of-day adjustment.
    pub departure: Option<Hour>,
    /// Active accident reports near the region of travel.
    pub accidents: Vec<AccidentReport>,
}

impl ContextBundle {
    /// The neutral context: clear weather, a car, no departure hour, and
    /// no active accidents. Scoring under it applies no adjustment at all.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            weather: WeatherCondition::Clear,
            vehicle: VehicleType::Car,
            departure: None,
            accidents: Vec::new(),
        }
    }

    /// Replace the weather condition, chaining.
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherCondition) -> Self {
        self.weather = weather;
        self
    }

    /// Replace the vehicle class, chaining.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: VehicleType) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Set the departure hour, chaining.
    #[must_use]
    pub fn with_departure(mut self, departure: Hour) -> Self {
        self.departure = Some(departure);
        self
    }

    /// Replace the accident reports, chaining. Expired reports are dropped.
    #[must_use]
    pub fn with_accidents(mut self, accidents: Vec<AccidentReport>) -> Self {
        self.accidents = accidents;
        self.accidents.retain(AccidentReport::is_active);
        self
    }

    /// Assemble a bundle from external providers, substituting neutral
    /// defaults on failure.
    ///
    /// Missing context must never block scoring: an unreachable weather
    /// service yields [`WeatherCondition::Clear`] and a failing accident
    /// feed yields no reports, each noted at debug level. Expired reports
    /// are filtered out.
    #[must_use]
    pub fn gather<W, A>(
        weather: &W,
        accidents: &A,
        vehicle: VehicleType,
        departure: Option<Hour>,
    ) -> Self
    where
        W: WeatherProvider + ?Sized,
        A: AccidentFeed + ?Sized,
    {
        let condition = weather.current_condition().unwrap_or_else(|err| {
            debug!("weather unavailable, scoring as Clear: {err}");
            WeatherCondition::Clear
        });
        let reports = accidents.active_accidents().unwrap_or_else(|err| {
            debug!("accident feed unavailable, scoring without reports: {err}");
            Vec::new()
        });
        Self {
            weather: condition,
            vehicle,
            departure,
            accidents: Vec::new(),
        }
        .with_accidents(reports)
    }
}

impl Default for ContextBundle {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use geo::Coord;
    use rstest::rstest;
    use std::time::Duration;

    struct FixedWeather(WeatherCondition);

    impl WeatherProvider for FixedWeather {
        fn current_condition(&self) -> Result<WeatherCondition, ProviderError> {
            Ok(self.0)
        }
    }

    struct DownWeather;

    impl WeatherProvider for DownWeather {
        fn current_condition(&self) -> Result<WeatherCondition, ProviderError> {
            Err(ProviderError("timeout".to_owned()))
        }
    }

    struct FixedFeed(Vec<AccidentReport>);

    impl AccidentFeed for FixedFeed {
        fn active_accidents(&self) -> Result<Vec<AccidentReport>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct DownFeed;

    impl AccidentFeed for DownFeed {
        fn active_accidents(&self) -> Result<Vec<AccidentReport>, ProviderError> {
            Err(ProviderError("store offline".to_owned()))
        }
    }

    fn report(age: Duration) -> AccidentReport {
        AccidentReport::new(Coord { x: 72.8, y: 19.0 }, Severity::Moderate, age)
    }

    #[rstest]
    fn gather_uses_provider_values() {
        let context = ContextBundle::gather(
            &FixedWeather(WeatherCondition::Fog),
            &FixedFeed(vec![report(Duration::ZERO)]),
            VehicleType::Bus,
            None,
        );
        assert_eq!(context.weather, WeatherCondition::Fog);
        assert_eq!(context.vehicle, VehicleType::Bus);
        assert_eq!(context.accidents.len(), 1);
    }

    #[rstest]
    fn gather_fails_open_when_providers_are_down() {
        let context = ContextBundle::gather(&DownWeather, &DownFeed, VehicleType::Car, None);
        assert_eq!(context.weather, WeatherCondition::Clear);
        assert!(context.accidents.is_empty());
    }

    #[rstest]
    fn gather_drops_expired_reports() {
        let stale = report(Duration::from_secs(3 * 60 * 60));
        let fresh = report(Duration::from_secs(60));
        let context = ContextBundle::gather(
            &FixedWeather(WeatherCondition::Clear),
            &FixedFeed(vec![stale, fresh.clone()]),
            VehicleType::Car,
            None,
        );
        assert_eq!(context.accidents, vec![fresh]);
    }

    #[rstest]
    fn neutral_context_is_default() {
        assert_eq!(ContextBundle::default(), ContextBundle::neutral());
    }
}
