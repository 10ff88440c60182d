//! Randomized permutation restarts.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Draws `attempts` random customer permutations and returns the feasible
/// ones with their costs.
///
/// Cheap diversification only — the hit rate collapses as windows tighten,
/// so this is never used as a primary construction strategy.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::evaluation::RouteEvaluator;
/// use tsptw::constructive::random_restarts;
///
/// let windows = vec![
///     TimeWindow::new(0.0, 100.0, 1.0).unwrap(),
///     TimeWindow::new(0.0, 100.0, 1.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(3);
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j { m.set(i, j, 5.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
/// let mut rng = StdRng::seed_from_u64(1);
/// let found = random_restarts(&instance, &evaluator, &mut rng, 3);
/// assert_eq!(found.len(), 3); // wide windows: every permutation works
/// ```
pub fn random_restarts(
    instance: &Instance,
    evaluator: &RouteEvaluator,
    rng: &mut StdRng,
    attempts: usize,
) -> Vec<Solution> {
    let mut found = Vec::new();
    for _ in 0..attempts {
        let mut customers = instance.deadline_order().to_vec();
        customers.shuffle(rng);
        let eval = evaluator.evaluate_sequence(&customers);
        if eval.feasible {
            found.push(Solution::new(customers.into(), eval.cost));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use crate::travel::TravelMatrix;
    use rand::SeedableRng;

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
    fn test_keeps_only_feasible() {
        // Customer 1 must be served first (its window closes at 6); half of
        // the permutations of two customers are infeasible.
        let windows = vec![
            TimeWindow::new(0.0, 6.0, 1.0).expect("valid"),
            TimeWindow::new(0.0, 100.0, 1.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 5.0);
        let evaluator = RouteEvaluator::new(&instance);
        let mut rng = StdRng::seed_from_u64(3);
        for sol in random_restarts(&instance, &evaluator, &mut rng, 20) {
            assert!(evaluator.evaluate(sol.route()).feasible);
            assert_eq!(sol.route().customers()[0], 1);
        }
    }

    #[test]
    fn test_infeasible_instance_yields_nothing() {
        let windows = vec![TimeWindow::new(0.0, 1.0, 0.0).expect("valid")];
        let instance = uniform_instance(windows, 10.0);
        let evaluator = RouteEvaluator::new(&instance);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_restarts(&instance, &evaluator, &mut rng, 10).is_empty());
    }
}
