//! Route selection: ranking scored routes and marking the recommendation.
//!
//! Tie-breaks are fully deterministic: lowest risk score first, then
//! shortest adjusted duration, then original input order.

use std::cmp::Ordering;

use safar_core::ScoredRoute;

fn by_risk_then_duration(a: &ScoredRoute, b: &ScoredRoute) -> Ordering {
    a.risk_score
        .partial_cmp(&b.risk_score)
        .unwrap_or(Ordering::Equal)
        .then(a.adjusted_duration.cmp(&b.adjusted_duration))
}

/// Sort routes ascending by risk, ties by duration then input order.
///
/// The sort is stable, so routes that tie on both keys keep their input
/// order ("first listed wins").
pub fn rank(routes: &mut [ScoredRoute]) {
    routes.sort_by(by_risk_then_duration);
}

/// Mark exactly one route as recommended.
///
/// Chooses the lowest risk score, breaking ties by shortest adjusted
/// duration and then first input order. All other `recommended` flags are
/// cleared. An empty list is returned unchanged; "no route found" is a
/// valid outcome, not an error. Returns the index of the chosen route.
pub fn recommend(routes: &mut [ScoredRoute]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, route) in routes.iter().enumerate() {
        let better = match best.and_then(|b| routes.get(b)) {
            None => true,
            Some(current) => by_risk_then_duration(route, current) == Ordering::Less,
        };
        if better {
            best = Some(index);
        }
    }
    for route in routes.iter_mut() {
        route.recommended = false;
    }
    if let Some(index) = best {
        if let Some(route) = routes.get_mut(index) {
            route.recommended = true;
        }
    }
    best
}
