//! Weather conditions affecting road risk.
//!
//! The enum offers compile-time safety for multiplier lookups; free-form
//! provider descriptions are mapped onto the four categories by
//! [`WeatherCondition::from_observation`].

use thiserror::Error;

/// Weather category recognised by the risk model.
///
/// # Examples
/// ```
/// use safar_core::WeatherCondition;
///
/// assert_eq!(WeatherCondition::HeavyRain.as_str(), "Heavy Rain");
/// assert_eq!(WeatherCondition::from_observation("light drizzle"), WeatherCondition::Rain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherCondition {
    /// Clear or overcast without precipitation. The neutral baseline.
    #[default]
    Clear,
    /// Light to moderate rain.
    Rain,
    /// Fog, mist, or haze.
    Fog,
    /// Heavy rain.
    HeavyRain,
}

/// Error returned when parsing a [`WeatherCondition`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weather condition '{0}'")]
pub struct WeatherParseError(pub String);

impl WeatherCondition {
    /// Return the category label used by the historical model.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Rain => "Rain",
            Self::Fog => "Fog",
            Self::HeavyRain => "Heavy Rain",
        }
    }

    /// Map a free-form provider description onto a category.
    ///
    /// Mirrors the lenient mapping used when ingesting live observations:
    /// rain and drizzle become [`Self::Rain`] (or [`Self::HeavyRain`] when
    /// flagged heavy), fog/mist/haze become [`Self::Fog`], and anything
    /// unrecognised falls open to [`Self::Clear`] so missing weather data
    /// never inflates risk.
    #[must_use]
    pub fn from_observation(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if lowered.contains("rain") || lowered.contains("drizzle") {
            if lowered.contains("heavy") {
                Self::HeavyRain
            } else {
                Self::Rain
            }
        } else if lowered.contains("fog") || lowered.contains("mist") || lowered.contains("haze") {
            Self::Fog
        } else {
            Self::Clear
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = WeatherParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "rain" => Ok(Self::Rain),
            "fog" => Ok(Self::Fog),
            "heavy rain" => Ok(Self::HeavyRain),
            _ => Err(WeatherParseError(s.to_owned())),
        }
    }
}
