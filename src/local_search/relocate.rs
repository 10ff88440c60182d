//! Windowed single-customer relocation.
//!
//! # Algorithm
//!
//! For each position `i`, remove the customer there and try reinserting it
//! at a handful of nearby positions given by fixed offsets from `i`
//! (±1, ±3, ±5 by default) instead of scanning the whole route. The first
//! feasible reinsertion that reduces the evaluated cost is kept and the
//! pass restarts; rejected moves are reverted by reinserting the customer
//! at its original position.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::EPSILON;
use crate::evaluation::{Evaluation, RouteEvaluator};
use crate::models::Route;

/// Candidate offsets used when the caller has no preference.
pub const DEFAULT_RELOCATE_OFFSETS: [isize; 6] = [-5, -3, -1, 1, 3, 5];

/// Improves a route by windowed first-improvement relocation, in place.
///
/// Runs passes until none accepts a move or `max_passes` is exhausted, and
/// returns the evaluation of the final route. An infeasible input route is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, Route, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::evaluation::RouteEvaluator;
/// use tsptw::local_search::{windowed_relocate, DEFAULT_RELOCATE_OFFSETS};
///
/// // Customers on a line at 1, 2, 3; customer 3 is misplaced up front.
/// let windows: Vec<TimeWindow> = (0..3)
///     .map(|_| TimeWindow::new(0.0, 100.0, 0.0).unwrap())
///     .collect();
/// let mut m = TravelMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         m.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let mut route = Route::from_customers(vec![3, 1, 2]);
/// let eval = windowed_relocate(&mut route, &evaluator, &DEFAULT_RELOCATE_OFFSETS, 100);
/// assert_eq!(eval.cost, 6.0); // 0→1→2→3→0
/// ```
pub fn windowed_relocate(
    route: &mut Route,
    evaluator: &RouteEvaluator,
    offsets: &[isize],
    max_passes: usize,
) -> Evaluation {
    let mut current = evaluator.evaluate(route);
    if !current.feasible {
        return current;
    }

    let len = route.len();
    let mut improved = true;
    let mut passes = 0;

    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        'scan: for i in 0..len {
            for &offset in offsets {
                let Some(target) = i.checked_add_signed(offset) else {
                    continue;
                };
                if target >= len || target == i {
                    continue;
                }
                // Removal shifts everything after i left by one.
                let insert_pos = if target < i { target } else { target - 1 };
                if insert_pos == i {
                    continue;
                }

                let customer = route.remove(i);
                route.insert(insert_pos, customer);
                let candidate = evaluator.evaluate(route);
                if candidate.feasible && candidate.cost < current.cost - EPSILON {
                    current = candidate;
                    improved = true;
                    break 'scan;
                }
                let customer = route.remove(insert_pos);
                route.insert(i, customer);
            }
        }
    }

    current
}
