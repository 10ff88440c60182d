//! Solution and solve outcome types.

use serde::Serialize;

use super::Route;

/// A feasible route together with its total travel cost.
///
/// Cost is the sum of travel legs only, including the return to the depot;
/// waiting time is never charged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    route: Route,
    cost: f64,
}

impl Solution {
    /// Creates a solution from a route and its evaluated cost.
    pub fn new(route: Route, cost: f64) -> Self {
        Self { route, cost }
    }

    /// The route, depot implicit at both ends.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total travel cost of the route.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the solution, returning the route.
    pub fn into_route(self) -> Route {
        self.route
    }
}

/// Outcome of a solving session.
///
/// Distinguishes the three failure shapes the engine can report: a route
/// that provably does not exist (`Infeasible`), a route that was not found
/// within the budget but may exist (`NotFound`), and a search aborted by
/// its wall-clock cutoff (`TimeLimitExceeded`, carrying the incumbent if
/// one was found).
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A complete exact search finished; the solution is optimal.
    Optimal(Solution),
    /// Best feasible solution found within the budget; optimality unknown.
    Feasible(Solution),
    /// The wall-clock cutoff fired; the best incumbent so far, if any.
    TimeLimitExceeded(Option<Solution>),
    /// A complete search proved that no feasible route exists.
    Infeasible,
    /// No feasible route was found within the budget. Carries the best
    /// infeasible attempt, if any, for diagnostics only — its cost is
    /// meaningless.
    NotFound(Option<Route>),
}

impl SolveOutcome {
    /// The feasible solution carried by this outcome, if any.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Optimal(s) | SolveOutcome::Feasible(s) => Some(s),
            SolveOutcome::TimeLimitExceeded(incumbent) => incumbent.as_ref(),
            SolveOutcome::Infeasible | SolveOutcome::NotFound(_) => None,
        }
    }

    /// Cost of the carried feasible solution, if any.
    pub fn best_cost(&self) -> Option<f64> {
        self.solution().map(Solution::cost)
    }

    /// Returns `true` if a feasible route is available.
    pub fn found_feasible(&self) -> bool {
        self.solution().is_some()
    }
}
