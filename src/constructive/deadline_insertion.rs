//! Greedy insertion in deadline order.
//!
//! # Algorithm
//!
//! Process customers by the instance's deadline priority order. Each
//! customer is inserted at the position of the current partial route that
//! keeps the route feasible and adds the least cost. For long routes only a
//! bounded, evenly spaced subset of positions is probed (at most 10, the
//! end position always included) to keep each insertion cheap.
//!
//! # Complexity
//!
//! O(n²) evaluations with the position bound, O(n³) time.

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Route};

/// Maximum number of insertion positions probed per customer.
const MAX_PROBED_POSITIONS: usize = 10;

/// Builds a full route by greedy insertion in deadline order.
///
/// Returns `None` if some customer has no insertion position that keeps
/// the partial route feasible.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::evaluation::RouteEvaluator;
/// use tsptw::constructive::deadline_insertion;
///
/// let windows = vec![
///     TimeWindow::new(0.0, 100.0, 1.0).unwrap(),
///     TimeWindow::new(0.0, 8.0, 1.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(3);
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j { m.set(i, j, 5.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
/// let route = deadline_insertion(&instance, &evaluator).unwrap();
/// // Customer 2 has the tighter deadline and ends up first.
/// assert_eq!(route.customers(), &[2, 1]);
/// ```
pub fn deadline_insertion(instance: &Instance, evaluator: &RouteEvaluator) -> Option<Route> {
    let mut route: Vec<usize> = Vec::with_capacity(instance.num_customers());

    for &customer in instance.deadline_order() {
        let slots = route.len() + 1;
        let step = (slots / slots.min(MAX_PROBED_POSITIONS)).max(1);
        let mut positions: Vec<usize> = (0..slots).step_by(step).collect();
        if positions.last() != Some(&route.len()) {
            positions.push(route.len());
        }

        let mut best: Option<(usize, f64)> = None;
        for &pos in &positions {
            route.insert(pos, customer);
            let eval = evaluator.evaluate_sequence(&route);
            route.remove(pos);
            if eval.feasible && best.is_none_or(|(_, cost)| eval.cost < cost) {
                best = Some((pos, eval.cost));
            }
        }

        let (pos, _) = best?;
        route.insert(pos, customer);
    }

    Some(Route::from_customers(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use crate::travel::TravelMatrix;

    fn uniform_instance(windows: Vec<TimeWindow>, travel: f64) -> Instance {
        let size = windows.len() + 1;
        let mut m = TravelMatrix::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    m.set(i, j, travel);
                }
            }
        }
        Instance::new(windows, m).expect("valid")
    }

    #[test]
    fn test_produces_feasible_route() {
        let windows = vec![
            TimeWindow::new(0.0, 50.0, 2.0).expect("valid"),
            TimeWindow::new(0.0, 20.0, 2.0).expect("valid"),
            TimeWindow::new(0.0, 80.0, 2.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 4.0);
        let evaluator = RouteEvaluator::new(&instance);
        let route = deadline_insertion(&instance, &evaluator).expect("constructs");
        assert_eq!(route.len(), 3);
        assert!(evaluator.evaluate(&route).feasible);
    }

    #[test]
    fn test_fails_when_no_position_feasible() {
        // Both customers demand service start by t=4 but travel is 5.
        let windows = vec![
            TimeWindow::new(0.0, 4.0, 1.0).expect("valid"),
            TimeWindow::new(0.0, 4.0, 1.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 5.0);
        let evaluator = RouteEvaluator::new(&instance);
        assert!(deadline_insertion(&instance, &evaluator).is_none());
    }

    #[test]
    fn test_empty_instance() {
        let instance = uniform_instance(vec![], 1.0);
        let evaluator = RouteEvaluator::new(&instance);
        let route = deadline_insertion(&instance, &evaluator).expect("constructs");
        assert!(route.is_empty());
    }

    #[test]
    fn test_large_route_probing_stays_feasible() {
        // 15 customers with generous identical windows; bounded probing must
        // still place every one of them feasibly.
        let windows: Vec<TimeWindow> = (0..15)
            .map(|_| TimeWindow::new(0.0, 10_000.0, 1.0).expect("valid"))
            .collect();
        let instance = uniform_instance(windows, 2.0);
        let evaluator = RouteEvaluator::new(&instance);
        let route = deadline_insertion(&instance, &evaluator).expect("constructs");
        assert_eq!(route.len(), 15);
        assert!(evaluator.evaluate(&route).feasible);
    }
}
