//! End-to-end scoring scenarios through the public surface.
//!
//! These exercise the worked examples the engine's contract is defined
//! by: the exact multiplier formula, risk-band boundaries, distance
//! weighting, and the fallback behaviour for unmapped segments and
//! missing context.

#![expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]

use std::time::Duration;

use approx::assert_relative_eq;
use geo::Coord;
use rstest::{fixture, rstest};
use safar_core::{
    AccidentReport, ContextBundle, MemoryRiskTable, RiskLevel, RouteCandidate, Segment, Severity,
    VehicleType, WeatherCondition,
};
use safar_scorer::RouteRiskScorer;

/// A segment of roughly 8 km along a meridian.
fn segment_a() -> Segment {
    Segment::new(
        1,
        "Segment A",
        Coord { x: 72.82, y: 19.000 },
        Coord { x: 72.82, y: 19.072 },
        20.0,
    )
    .expect("valid segment")
}

#[fixture]
fn scorer() -> RouteRiskScorer<MemoryRiskTable> {
    RouteRiskScorer::new(MemoryRiskTable::from_entries([(1, 20.0)]))
}

fn route() -> RouteCandidate {
    RouteCandidate::new(1, "Direct Route", vec![segment_a()])
}

#[rstest]
fn clear_weather_car_no_accidents_scores_base_risk(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let scored = scorer
        .score_route(&route(), &ContextBundle::neutral())
        .expect("scoreable route");
    assert_relative_eq!(scored.risk_score, 20.0);
    assert_eq!(scored.risk_level, RiskLevel::Low);
}

#[rstest]
fn heavy_rain_applies_exact_multiplier(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let context = ContextBundle::neutral().with_weather(WeatherCondition::HeavyRain);
    let scored = scorer.score_route(&route(), &context).expect("scoreable route");
    // clamp(20 * 1.29) = 25.8, still low.
    assert_relative_eq!(scored.risk_score, 25.8);
    assert_eq!(scored.risk_level, RiskLevel::Low);
}

#[rstest]
fn bike_heavy_rain_severe_accident_lands_in_medium(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let accident = AccidentReport::new(
        segment_a().midpoint(),
        Severity::Severe,
        Duration::from_secs(300),
    );
    let context = ContextBundle::neutral()
        .with_weather(WeatherCondition::HeavyRain)
        .with_vehicle(VehicleType::Bike)
        .with_accidents(vec![accident.clone()]);
    let scored = scorer.score_route(&route(), &context).expect("scoreable route");
    // clamp(20 * 1.29 * 1.8 + 15) = 61.44, medium.
    assert_relative_eq!(scored.risk_score, 61.44);
    assert_eq!(scored.risk_level, RiskLevel::Medium);
    assert_eq!(scored.matched_accidents, vec![accident]);
}

#[rstest]
fn scores_never_leave_the_scale(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let table = MemoryRiskTable::from_entries([(1, 100.0)]);
    let worst_case = RouteRiskScorer::new(table);
    let accidents = (0..10)
        .map(|_| {
            AccidentReport::new(segment_a().midpoint(), Severity::Fatal, Duration::ZERO)
        })
        .collect();
    let context = ContextBundle::neutral()
        .with_weather(WeatherCondition::HeavyRain)
        .with_vehicle(VehicleType::Bike)
        .with_accidents(accidents);
    let scored = worst_case
        .score_route(&route(), &context)
        .expect("scoreable route");
    assert!(scored.risk_score <= 100.0);
    assert_eq!(scored.risk_level, RiskLevel::High);

    let calm = scorer
        .score_route(&route(), &ContextBundle::neutral())
        .expect("scoreable route");
    assert!(calm.risk_score >= 0.0);
}

#[rstest]
fn weighting_follows_exposure_not_segment_count() {
    let table = MemoryRiskTable::from_entries([(1, 10.0), (2, 90.0)]);
    let scorer = RouteRiskScorer::new(table);
    let long_safe = Segment::new(
        1,
        "long safe",
        Coord { x: 72.82, y: 19.000 },
        Coord { x: 72.82, y: 19.072 },
        10.0,
    )
    .expect("valid segment");
    let short_risky = Segment::new(
        2,
        "short risky",
        Coord { x: 72.82, y: 19.072 },
        Coord { x: 72.82, y: 19.081 },
        90.0,
    )
    .expect("valid segment");
    let mixed = RouteCandidate::new(1, "Mixed", vec![long_safe, short_risky]);
    let scored = scorer
        .score_route(&mixed, &ContextBundle::neutral())
        .expect("scoreable route");
    let naive_mean = (10.0 + 90.0) / 2.0;
    assert!(scored.risk_score < naive_mean);
    // Closer to the low-risk value than the naive average is.
    assert!((scored.risk_score - 10.0).abs() < (naive_mean - 10.0).abs());
}

#[rstest]
fn worse_context_never_lowers_the_score(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let base = scorer
        .score_route(&route(), &ContextBundle::neutral())
        .expect("scoreable route")
        .risk_score;
    let rain = scorer
        .score_route(
            &route(),
            &ContextBundle::neutral().with_weather(WeatherCondition::Rain),
        )
        .expect("scoreable route")
        .risk_score;
    let rain_on_bike = scorer
        .score_route(
            &route(),
            &ContextBundle::neutral()
                .with_weather(WeatherCondition::Rain)
                .with_vehicle(VehicleType::Bike),
        )
        .expect("scoreable route")
        .risk_score;
    assert!(base <= rain);
    assert!(rain <= rain_on_bike);
}

#[rstest]
fn unknown_segments_fall_back_rather_than_fail(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let unmapped = Segment::new(
        999,
        "unmapped back street",
        Coord { x: 72.83, y: 19.01 },
        Coord { x: 72.83, y: 19.02 },
        0.0,
    )
    .expect("valid segment");
    let candidate = RouteCandidate::new(1, "Back streets", vec![unmapped]);
    let scored = scorer
        .score_route(&candidate, &ContextBundle::neutral())
        .expect("route with unmapped segment still scores");
    assert_relative_eq!(scored.risk_score, 20.0);
}

#[rstest]
fn scoring_does_not_mutate_the_candidate(scorer: RouteRiskScorer<MemoryRiskTable>) {
    let candidate = route();
    let before = candidate.clone();
    scorer
        .score_route(&candidate, &ContextBundle::neutral())
        .expect("scoreable route");
    assert_eq!(candidate, before);
}
