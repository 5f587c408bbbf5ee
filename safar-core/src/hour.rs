//! Validated hour-of-day values for departure times.

use thiserror::Error;

/// An hour of the day in `0..=23`.
///
/// # Examples
/// ```
/// use safar_core::Hour;
///
/// # fn main() -> Result<(), safar_core::HourError> {
/// let hour = Hour::new(14)?;
/// assert_eq!(hour.get(), 14);
/// assert!(Hour::new(24).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hour(u8);

/// Errors returned by [`Hour::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HourError {
    /// The value was 24 or greater.
    #[error("hour {0} is outside 0..=23")]
    OutOfRange(u8),
}

impl Hour {
    /// Validates and constructs an [`Hour`].
    ///
    /// # Errors
    /// Returns [`HourError::OutOfRange`] for values of 24 and above.
    pub const fn new(hour: u8) -> Result<Self, HourError> {
        if hour < 24 {
            Ok(Self(hour))
        } else {
            Err(HourError::OutOfRange(hour))
        }
    }

    /// Return the hour as a `u8` in `0..=23`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All 24 hours in ascending order, useful as a full forecast grid.
    #[must_use]
    pub fn all() -> [Self; 24] {
        core::array::from_fn(|index| {
            // from_fn indices run 0..24, always in range.
            Self(u8::try_from(index).unwrap_or(0))
        })
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
