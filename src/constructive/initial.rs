//! Initial-solution selector.

use rand::rngs::StdRng;
use tracing::debug;

use super::{deadline_insertion, nearest_feasible_neighbor, random_restarts};
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Route};

/// Number of shuffled permutations tried for diversification.
const RESTART_ATTEMPTS: usize = 3;

/// Result of the initial-solution selector.
///
/// When `feasible` is `false` the route is the deadline-order fallback and
/// `cost` is [`f64::INFINITY`]; callers must check `feasible` before
/// trusting `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialRoute {
    /// The selected route.
    pub route: Route,
    /// Evaluated cost of the route; infinite when infeasible.
    pub cost: f64,
    /// Whether the route passed the evaluator.
    pub feasible: bool,
}

/// Runs every constructive heuristic and keeps the cheapest feasible route.
///
/// Tries nearest-feasible-neighbor, deadline insertion, and a handful of
/// random restarts. If none produces a feasible route, falls back to the
/// plain deadline order so the metaheuristic drivers have something to
/// report as a diagnostic attempt.
pub fn initial_route(
    instance: &Instance,
    evaluator: &RouteEvaluator,
    rng: &mut StdRng,
) -> InitialRoute {
    let mut best: Option<(Route, f64)> = None;
    let mut consider = |route: Route, cost: f64, best: &mut Option<(Route, f64)>| {
        if best.as_ref().is_none_or(|(_, c)| cost < *c) {
            *best = Some((route, cost));
        }
    };

    if let Some(route) = nearest_feasible_neighbor(instance) {
        let eval = evaluator.evaluate(&route);
        if eval.feasible {
            consider(route, eval.cost, &mut best);
        }
    }

    if let Some(route) = deadline_insertion(instance, evaluator) {
        let eval = evaluator.evaluate(&route);
        if eval.feasible {
            consider(route, eval.cost, &mut best);
        }
    }

    for solution in random_restarts(instance, evaluator, rng, RESTART_ATTEMPTS) {
        let cost = solution.cost();
        consider(solution.into_route(), cost, &mut best);
    }

    match best {
        Some((route, cost)) => InitialRoute {
            route,
            cost,
            feasible: true,
        },
        None => {
            let route = Route::from_customers(instance.deadline_order().to_vec());
            let eval = evaluator.evaluate(&route);
            debug!(
                feasible = eval.feasible,
                "no heuristic found a feasible route, using deadline-order fallback"
            );
            InitialRoute {
                route,
                cost: eval.cost,
                feasible: eval.feasible,
            }
        }
    }
}
