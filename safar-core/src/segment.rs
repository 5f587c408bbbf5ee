//! Road segments: identified stretches of road with historical base risk.
//!
//! Segments are immutable reference data. They are loaded once (typically
//! from the historical accident model's output) and never mutated by the
//! scorer.

use geo::{Coord, Distance, Haversine, Point};
use thiserror::Error;

/// Upper bound of the risk scale used throughout the engine.
pub(crate) const RISK_SCALE_MAX: f64 = 100.0;

/// A named stretch of road with a historical base risk value.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The base
/// risk sits on a 0–100 scale where higher means more dangerous.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use safar_core::Segment;
///
/// # fn main() -> Result<(), safar_core::SegmentError> {
/// let segment = Segment::new(
///     7,
///     "Western Express Highway",
///     Coord { x: 72.8295, y: 19.0596 },
///     Coord { x: 72.8697, y: 19.1136 },
///     62.0,
/// )?;
/// assert_eq!(segment.id, 7);
/// assert!(segment.length_km() > 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Unique identifier within the risk table.
    pub id: u64,
    /// Human-readable road name.
    pub name: String,
    /// Start of the stretch.
    pub start: Coord<f64>,
    /// End of the stretch.
    pub end: Coord<f64>,
    /// Historical base risk on the 0–100 scale.
    pub base_risk: f64,
}

/// Errors returned by [`Segment::new`].
#[derive(Debug, Error, PartialEq)]
pub enum SegmentError {
    /// The base risk fell outside the 0–100 scale or was not finite.
    #[error("base risk {0} is outside the 0-100 scale")]
    BaseRiskOutOfRange(f64),
}

impl Segment {
    /// Validates and constructs a [`Segment`].
    ///
    /// # Errors
    /// Returns [`SegmentError::BaseRiskOutOfRange`] when `base_risk` is not
    /// a finite value in `0.0..=100.0`.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        start: Coord<f64>,
        end: Coord<f64>,
        base_risk: f64,
    ) -> Result<Self, SegmentError> {
        if !base_risk.is_finite() || !(0.0..=RISK_SCALE_MAX).contains(&base_risk) {
            return Err(SegmentError::BaseRiskOutOfRange(base_risk));
        }
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            base_risk,
        })
    }

    /// Whether both endpoints carry finite coordinates.
    ///
    /// Fields are public, so geometry validated at construction can still
    /// be overwritten; distance maths on a non-finite coordinate poisons
    /// every downstream figure.
    #[must_use]
    pub fn has_finite_geometry(&self) -> bool {
        [self.start, self.end]
            .iter()
            .all(|coord| coord.x.is_finite() && coord.y.is_finite())
    }

    /// Great-circle length of the segment in kilometres.
    #[must_use]
    pub fn length_km(&self) -> f64 {
        Haversine.distance(Point::from(self.start), Point::from(self.end)) / 1000.0
    }

    /// Midpoint of the segment in coordinate space.
    ///
    /// An arithmetic mean is accurate enough at the city scale the engine
    /// operates on.
    #[must_use]
    pub fn midpoint(&self) -> Coord<f64> {
        Coord {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
        }
    }

    /// Shortest great-circle distance from `location` to the segment's
    /// endpoints or midpoint, in kilometres.
    ///
    /// Sampling three points approximates point-to-polyline distance well
    /// enough for the kilometre-scale proximity radii the scorer uses.
    #[must_use]
    pub fn distance_km_to(&self, location: Coord<f64>) -> f64 {
        let target = Point::from(location);
        [self.start, self.midpoint(), self.end]
            .into_iter()
            .map(|point| Haversine.distance(Point::from(point), target) / 1000.0)
            .fold(f64::INFINITY, f64::min)
    }
}
