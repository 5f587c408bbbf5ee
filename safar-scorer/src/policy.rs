//! Scoring policy: every tunable constant in one value.
//!
//! The shape of the rules is fixed (multiplicative factors before an
//! additive accident increment, distance-weighted aggregation), but the
//! numbers are policy, not physics. Each table is keyed by a closed enum
//! or a fixed-size array so an invalid key cannot exist at runtime.

use safar_core::{Hour, Severity, VehicleType, WeatherCondition};

/// Risk multiplier per weather category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherMultipliers {
    /// Multiplier for [`WeatherCondition::Clear`]. The neutral baseline.
    pub clear: f64,
    /// Multiplier for [`WeatherCondition::Rain`].
    pub rain: f64,
    /// Multiplier for [`WeatherCondition::Fog`].
    pub fog: f64,
    /// Multiplier for [`WeatherCondition::HeavyRain`].
    pub heavy_rain: f64,
}

impl WeatherMultipliers {
    /// Return the multiplier for a condition.
    #[must_use]
    pub const fn get(&self, condition: WeatherCondition) -> f64 {
        match condition {
            WeatherCondition::Clear => self.clear,
            WeatherCondition::Rain => self.rain,
            WeatherCondition::Fog => self.fog,
            WeatherCondition::HeavyRain => self.heavy_rain,
        }
    }
}

impl Default for WeatherMultipliers {
    fn default() -> Self {
        Self {
            clear: 1.00,
            rain: 1.20,
            fog: 1.21,
            heavy_rain: 1.29,
        }
    }
}

/// Risk and travel-time characteristics of one vehicle class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    /// Risk multiplier relative to a car.
    pub risk_multiplier: f64,
    /// Speed relative to a car; durations are divided by this, so a
    /// factor below one lengthens the trip.
    pub speed_factor: f64,
}

/// Vehicle profiles keyed by class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfiles {
    /// Profile for [`VehicleType::Car`].
    pub car: VehicleProfile,
    /// Profile for [`VehicleType::Bike`].
    pub bike: VehicleProfile,
    /// Profile for [`VehicleType::Auto`].
    pub auto: VehicleProfile,
    /// Profile for [`VehicleType::Bus`].
    pub bus: VehicleProfile,
    /// Profile for [`VehicleType::Truck`].
    pub truck: VehicleProfile,
}

impl VehicleProfiles {
    /// Return the profile for a class.
    #[must_use]
    pub const fn get(&self, vehicle: VehicleType) -> VehicleProfile {
        match vehicle {
            VehicleType::Car => self.car,
            VehicleType::Bike => self.bike,
            VehicleType::Auto => self.auto,
            VehicleType::Bus => self.bus,
            VehicleType::Truck => self.truck,
        }
    }
}

impl Default for VehicleProfiles {
    fn default() -> Self {
        Self {
            car: VehicleProfile {
                risk_multiplier: 1.0,
                speed_factor: 1.0,
            },
            bike: VehicleProfile {
                risk_multiplier: 1.8,
                speed_factor: 0.85,
            },
            auto: VehicleProfile {
                risk_multiplier: 1.5,
                speed_factor: 0.75,
            },
            bus: VehicleProfile {
                risk_multiplier: 1.2,
                speed_factor: 0.80,
            },
            truck: VehicleProfile {
                risk_multiplier: 1.3,
                speed_factor: 0.70,
            },
        }
    }
}

/// Risk multiplier per hour of day.
///
/// A fixed 24-entry table; the default elevates the rush-hour windows
/// (07:00–10:00 and 17:00–21:00) and discounts the night hours (22:00
/// through 05:00) when roads are empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDayMultipliers([f64; 24]);

impl TimeOfDayMultipliers {
    /// Build a table from 24 hourly multipliers, index 0 = midnight.
    #[must_use]
    pub const fn from_table(table: [f64; 24]) -> Self {
        Self(table)
    }

    /// Return the multiplier for an hour.
    #[must_use]
    pub fn get(&self, hour: Hour) -> f64 {
        self.0.get(usize::from(hour.get())).copied().unwrap_or(1.0)
    }
}

impl Default for TimeOfDayMultipliers {
    fn default() -> Self {
        let mut table = [1.0; 24];
        for (hour, slot) in table.iter_mut().enumerate() {
            if (7..=10).contains(&hour) || (17..=21).contains(&hour) {
                *slot = 1.15;
            } else if hour >= 22 || hour <= 5 {
                *slot = 0.90;
            }
        }
        Self(table)
    }
}

/// Additive risk increment per accident severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityIncrements {
    /// Increment for [`Severity::Minor`].
    pub minor: f64,
    /// Increment for [`Severity::Moderate`].
    pub moderate: f64,
    /// Increment for [`Severity::Severe`].
    pub severe: f64,
    /// Increment for [`Severity::Fatal`].
    pub fatal: f64,
}

impl SeverityIncrements {
    /// Return the increment for a severity.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Minor => self.minor,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
            Severity::Fatal => self.fatal,
        }
    }
}

impl Default for SeverityIncrements {
    fn default() -> Self {
        Self {
            minor: 5.0,
            moderate: 10.0,
            severe: 15.0,
            fatal: 25.0,
        }
    }
}

/// How nearby accident reports feed into a segment's risk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentPolicy {
    /// Reports within this distance of a segment qualify, in kilometres.
    pub radius_km: f64,
    /// Additive increment per qualifying report, by severity.
    pub increments: SeverityIncrements,
    /// Ceiling on the summed increment, so report volume alone cannot
    /// drive a segment to the top of the scale.
    pub cap: f64,
}

impl Default for AccidentPolicy {
    fn default() -> Self {
        Self {
            radius_km: 2.0,
            increments: SeverityIncrements::default(),
            cap: 30.0,
        }
    }
}

/// The complete set of scoring constants.
///
/// # Examples
/// ```
/// use safar_scorer::ScoringPolicy;
///
/// let policy = ScoringPolicy::default();
/// assert_eq!(policy.default_base_risk, 20.0);
/// assert_eq!(policy.accidents.radius_km, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Risk multiplier per weather category.
    pub weather: WeatherMultipliers,
    /// Risk and speed profile per vehicle class.
    pub vehicles: VehicleProfiles,
    /// Risk multiplier per departure hour.
    pub time_of_day: TimeOfDayMultipliers,
    /// Accident proximity rules.
    pub accidents: AccidentPolicy,
    /// Base risk substituted for segments the risk table does not know.
    pub default_base_risk: f64,
    /// How many segments the per-route risk breakdown retains.
    pub detail_count: usize,
    /// Assumed average speed for the baseline vehicle, in km/h.
    pub base_speed_kmh: f64,
    /// Scores above this add a congestion allowance to the duration.
    pub congestion_threshold: f64,
    /// Duration multiplier applied above the congestion threshold.
    pub congestion_factor: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weather: WeatherMultipliers::default(),
            vehicles: VehicleProfiles::default(),
            time_of_day: TimeOfDayMultipliers::default(),
            accidents: AccidentPolicy::default(),
            default_base_risk: 20.0,
            detail_count: 5,
            base_speed_kmh: 30.0,
            congestion_threshold: 60.0,
            congestion_factor: 1.15,
        }
    }
}
