//! Vehicle classes with distinct risk and speed characteristics.

use thiserror::Error;

/// Vehicle class the user is travelling in.
///
/// The class drives two independent adjustments: a risk multiplier
/// (two-wheelers are far more exposed than cars) and a travel-time factor
/// (heavier vehicles manoeuvre more slowly). Both live in the scorer's
/// policy; this enum only identifies the class.
///
/// # Examples
/// ```
/// use safar_core::VehicleType;
///
/// assert_eq!(VehicleType::Auto.as_str(), "auto");
/// assert_eq!(VehicleType::from_str_or_default("hovercraft"), VehicleType::Car);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleType {
    /// Standard passenger car. The baseline class.
    #[default]
    Car,
    /// Motorcycle or scooter.
    Bike,
    /// Three-wheeler auto rickshaw.
    Auto,
    /// Public transport bus.
    Bus,
    /// Heavy goods vehicle.
    Truck,
}

/// Error returned when parsing a [`VehicleType`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown vehicle type '{0}'")]
pub struct VehicleTypeParseError(pub String);

impl VehicleType {
    /// Every vehicle class, in baseline-first order.
    pub const ALL: [Self; 5] = [Self::Car, Self::Bike, Self::Auto, Self::Bus, Self::Truck];

    /// Return the class as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Auto => "auto",
            Self::Bus => "bus",
            Self::Truck => "truck",
        }
    }

    /// Parse a class, falling back to [`Self::Car`] for unknown input.
    ///
    /// Request layers historically accepted arbitrary strings here, so the
    /// lenient variant keeps unknown classes at the baseline rather than
    /// failing the request.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleType {
    type Err = VehicleTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "auto" => Ok(Self::Auto),
            "bus" => Ok(Self::Bus),
            "truck" => Ok(Self::Truck),
            _ => Err(VehicleTypeParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn round_trips_through_strings() {
        for vehicle in VehicleType::ALL {
            assert_eq!(VehicleType::from_str_or_default(vehicle.as_str()), vehicle);
        }
    }

    #[rstest]
    #[case("BIKE", VehicleType::Bike)]
    #[case("Truck", VehicleType::Truck)]
    fn parsing_is_case_insensitive(#[case] input: &str, #[case] expected: VehicleType) {
        assert_eq!(input.parse(), Ok(expected));
    }

    #[rstest]
    fn unknown_classes_default_to_car() {
        assert_eq!(VehicleType::from_str_or_default("tram"), VehicleType::Car);
    }
}
