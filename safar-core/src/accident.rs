//! Live accident reports and their severity scale.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

/// How serious a reported accident is.
///
/// The ordering is meaningful: later variants are worse, and the derived
/// `Ord` lets callers compare or sort reports by severity.
///
/// # Examples
/// ```
/// use safar_core::Severity;
///
/// assert!(Severity::Fatal > Severity::Minor);
/// assert_eq!(Severity::Severe.as_str(), "severe");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fender-bender; traffic barely affected.
    Minor,
    /// Noticeable obstruction, minor injuries.
    Moderate,
    /// Serious injuries or a blocked carriageway.
    Severe,
    /// Fatality on scene.
    Fatal,
}

/// Error returned when parsing a [`Severity`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown severity '{0}'")]
pub struct SeverityParseError(pub String);

impl Severity {
    /// Return the severity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minor" => Ok(Self::Minor),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            "fatal" => Ok(Self::Fatal),
            _ => Err(SeverityParseError(s.to_owned())),
        }
    }
}

/// A user- or feed-reported accident that may still affect traffic.
///
/// Reports age out: anything older than [`AccidentReport::ACTIVE_WINDOW`]
/// no longer influences scoring. `age` is the time elapsed since the report
/// was filed, as computed by the caller when assembling the context.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use safar_core::{AccidentReport, Severity};
///
/// let report = AccidentReport::new(
///     Coord { x: 72.8479, y: 19.0176 },
///     Severity::Severe,
///     Duration::from_secs(600),
/// );
/// assert!(report.is_active());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccidentReport {
    /// Where the accident happened (WGS84, `x = longitude`).
    pub location: Coord<f64>,
    /// Reported severity.
    pub severity: Severity,
    /// Time elapsed since the report was filed.
    pub age: Duration,
}

impl AccidentReport {
    /// Reports older than this no longer affect scoring.
    pub const ACTIVE_WINDOW: Duration = Duration::from_secs(2 * 60 * 60);

    /// Construct a report.
    #[must_use]
    pub const fn new(location: Coord<f64>, severity: Severity, age: Duration) -> Self {
        Self {
            location,
            severity,
            age,
        }
    }

    /// Whether the report is still within its active window.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age <= Self::ACTIVE_WINDOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn severity_ordering_worsens() {
        assert!(Severity::Minor < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert!(Severity::Severe < Severity::Fatal);
    }

    #[rstest]
    #[case("minor", Severity::Minor)]
    #[case("FATAL", Severity::Fatal)]
    fn parses_known_severities(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(Severity::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        assert!(Severity::from_str("catastrophic").is_err());
    }

    #[rstest]
    #[case(Duration::ZERO, true)]
    #[case(Duration::from_secs(2 * 60 * 60), true)]
    #[case(Duration::from_secs(2 * 60 * 60 + 1), false)]
    fn active_window_is_two_hours(#[case] age: Duration, #[case] active: bool) {
        let report = AccidentReport::new(Coord { x: 0.0, y: 0.0 }, Severity::Minor, age);
        assert_eq!(report.is_active(), active);
    }
}
