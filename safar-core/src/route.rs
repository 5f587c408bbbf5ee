//! Candidate routes between two points, composed of road segments.

use crate::Segment;

/// One proposed path between two points.
///
/// Candidates are created fresh per scoring request and discarded after the
/// response is sent; the `id` is only unique within one request. A candidate
/// carries no score of its own; scoring produces a
/// [`ScoredRoute`](crate::ScoredRoute) without mutating the candidate.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use safar_core::{RouteCandidate, Segment};
///
/// # fn main() -> Result<(), safar_core::SegmentError> {
/// let segment = Segment::new(
///     1,
///     "Linking Road",
///     Coord { x: 72.83, y: 19.06 },
///     Coord { x: 72.84, y: 19.09 },
///     35.0,
/// )?;
/// let route = RouteCandidate::new(1, "Direct Route", vec![segment]);
/// assert_eq!(route.segments.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCandidate {
    /// Identifier scoped to a single scoring request.
    pub id: u32,
    /// Human-readable label, e.g. "Via Highway".
    pub name: String,
    /// Ordered constituent segments.
    pub segments: Vec<Segment>,
}

impl RouteCandidate {
    /// Construct a candidate from ordered segments.
    ///
    /// An empty segment list is accepted here; the scorer rejects it with
    /// an explicit error so that "no data" is never conflated with
    /// "perfectly safe".
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            id,
            name: name.into(),
            segments,
        }
    }

    /// Total great-circle length of the candidate in kilometres.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.segments.iter().map(Segment::length_km).sum()
    }
}
