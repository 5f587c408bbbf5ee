//! Batch scoring and recommendation behaviour.

#![expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]

use geo::Coord;
use rstest::{fixture, rstest};
use safar_core::{ContextBundle, MemoryRiskTable, RouteCandidate, Segment};
use safar_scorer::{RouteRiskScorer, ScoreError};

fn leg(id: u64, x: f64) -> Segment {
    Segment::new(
        id,
        format!("leg-{id}"),
        Coord { x, y: 19.00 },
        Coord { x, y: 19.09 },
        0.0,
    )
    .expect("valid segment")
}

#[fixture]
fn scorer() -> RouteRiskScorer<MemoryRiskTable> {
    // Candidate 1 runs over risk-40 ground, candidate 2 over risk-25.
    RouteRiskScorer::new(MemoryRiskTable::from_entries([(1, 40.0), (2, 25.0)]))
}

#[rstest]
fn lowest_risk_route_is_recommended(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let riskier = RouteCandidate::new(1, "Via Highway", vec![leg(1, 72.82)]);
    let safer = RouteCandidate::new(2, "Direct Route", vec![leg(2, 72.85)]);
    let batch = scorer.score_routes(&[riskier, safer], &ContextBundle::neutral());

    assert_eq!(batch.routes.len(), 2);
    // Ranked ascending by risk, so the 25-scoring route leads.
    let first = batch.routes.first().expect("non-empty batch");
    assert_eq!(first.route.id, 2);
    assert!(first.recommended);
    assert_eq!(batch.routes.iter().filter(|r| r.recommended).count(), 1);
}

#[rstest]
fn exactly_one_recommendation_even_with_equal_scores() {
    let scorer = RouteRiskScorer::new(MemoryRiskTable::from_entries([(1, 30.0), (2, 30.0)]));
    let first = RouteCandidate::new(1, "North", vec![leg(1, 72.82)]);
    let second = RouteCandidate::new(2, "South", vec![leg(2, 72.82)]);
    let batch = scorer.score_routes(&[first, second], &ContextBundle::neutral());

    assert_eq!(batch.routes.iter().filter(|r| r.recommended).count(), 1);
    // Full tie resolves to the first-listed candidate.
    assert!(batch
        .routes
        .iter()
        .find(|r| r.route.id == 1)
        .is_some_and(|r| r.recommended));
}

#[rstest]
fn invalid_candidates_are_reported_not_fatal(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let valid = RouteCandidate::new(1, "Direct Route", vec![leg(1, 72.82)]);
    let broken = RouteCandidate::new(2, "Broken", Vec::new());
    let batch = scorer.score_routes(&[broken, valid], &ContextBundle::neutral());

    assert_eq!(batch.routes.len(), 1);
    let rejected = batch.rejected.first().expect("one rejection");
    assert_eq!(rejected.id, 2);
    assert_eq!(rejected.reason, ScoreError::EmptyRoute);
    assert!(batch.routes.first().is_some_and(|r| r.recommended));
}

#[rstest]
fn non_finite_geometry_is_rejected_not_fatal(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let valid = RouteCandidate::new(1, "Direct Route", vec![leg(1, 72.82)]);
    let mut twisted = leg(2, 72.85);
    twisted.end.y = f64::INFINITY;
    let garbled = RouteCandidate::new(2, "Garbled", vec![twisted]);
    let batch = scorer.score_routes(&[valid, garbled], &ContextBundle::neutral());

    assert_eq!(batch.routes.len(), 1);
    let rejected = batch.rejected.first().expect("one rejection");
    assert_eq!(rejected.id, 2);
    assert_eq!(rejected.reason, ScoreError::MalformedGeometry);
    assert!(batch.routes.first().is_some_and(|r| r.recommended));
}

#[rstest]
fn empty_candidate_set_yields_empty_batch(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let batch = scorer.score_routes(&[], &ContextBundle::neutral());
    assert!(batch.routes.is_empty());
    assert!(batch.rejected.is_empty());
    assert_eq!(batch.routes.iter().filter(|r| r.recommended).count(), 0);
}

#[rstest]
fn batches_are_deterministic(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let candidates = vec![
        RouteCandidate::new(1, "Via Highway", vec![leg(1, 72.82)]),
        RouteCandidate::new(2, "Direct Route", vec![leg(2, 72.85)]),
    ];
    let context = ContextBundle::neutral();
    let first = scorer.score_routes(&candidates, &context);
    let second = scorer.score_routes(&candidates, &context);
    assert_eq!(first, second);
}
