//! Depth-first branch and bound over partial routes.
//!
//! # Algorithm
//!
//! Extend a partial route one customer at a time, branching in deadline
//! priority order. A branch is cut when the customer is already routed,
//! when its window is already violated by the arrival time, or when the
//! accumulated travel cost plus the next leg cannot beat the incumbent
//! (travel times are non-negative, so partial cost is a valid lower bound).
//! A search that exhausts the tree proves its result: the incumbent is
//! optimal, or no feasible route exists.
//!
//! The traversal is an explicit frame stack rather than recursion, so
//! instance depth is bounded by heap, not the call stack, and the
//! wall-clock cutoff can fire at any node. Moves are undone in place when
//! a frame is popped; the route, clock, and cost are shared mutable state
//! across the whole search.
//!
//! # Complexity
//!
//! O(n!) time in the worst case; O(n) space beyond the incumbent.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Route, Solution, SolveOutcome};

/// One level of the search tree.
///
/// `cursor` indexes into the deadline order and marks the next branch to
/// try; `placed` is the customer this frame appended, with the clock and
/// cost to restore when it is popped.
struct Frame {
    cursor: usize,
    placed: Option<usize>,
    prev_time: f64,
    prev_cost: f64,
}

/// Exact solver for small instances.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::exact::BranchAndBound;
///
/// let windows = vec![
///     TimeWindow::new(0.0, 10.0, 2.0).unwrap(),
///     TimeWindow::new(5.0, 15.0, 3.0).unwrap(),
///     TimeWindow::new(0.0, 20.0, 1.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         if i != j { m.set(i, j, 5.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
///
/// let outcome = BranchAndBound::new(&instance).solve();
/// assert_eq!(outcome.best_cost(), Some(20.0));
/// ```
pub struct BranchAndBound<'a> {
    instance: &'a Instance,
    evaluator: RouteEvaluator<'a>,
}

impl<'a> BranchAndBound<'a> {
    /// Creates a solver for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            evaluator: RouteEvaluator::new(instance),
        }
    }

    /// Searches the whole tree.
    ///
    /// Returns [`SolveOutcome::Optimal`] or [`SolveOutcome::Infeasible`];
    /// both are proofs. Runtime is factorial in the worst case, so prefer
    /// [`solve_with_limit`](Self::solve_with_limit) beyond a dozen or so
    /// customers.
    pub fn solve(&self) -> SolveOutcome {
        self.search(None)
    }

    /// Searches under a wall-clock budget.
    pub fn solve_with_limit(&self, limit: Duration) -> SolveOutcome {
        self.search(Some(Instant::now() + limit))
    }

    /// Searches until the explicit deadline.
    pub fn solve_until(&self, deadline: Instant) -> SolveOutcome {
        self.search(Some(deadline))
    }

    fn search(&self, deadline: Option<Instant>) -> SolveOutcome {
        let n = self.instance.num_customers();
        if n == 0 {
            return SolveOutcome::Optimal(Solution::new(Route::new(), 0.0));
        }

        let order = self.instance.deadline_order();
        let mut visited = vec![false; n + 1];
        let mut route: Vec<usize> = Vec::with_capacity(n);
        let mut time = self.instance.start_time();
        let mut cost = 0.0;
        let mut best: Option<Vec<usize>> = None;
        let mut best_cost = f64::INFINITY;
        let mut nodes: u64 = 0;

        let mut stack = vec![Frame {
            cursor: 0,
            placed: None,
            prev_time: time,
            prev_cost: cost,
        }];

        while !stack.is_empty() {
            nodes += 1;
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!(nodes, best_cost, "cutoff fired");
                    let incumbent = best
                        .map(|r| Solution::new(Route::from_customers(r), best_cost));
                    return SolveOutcome::TimeLimitExceeded(incumbent);
                }
            }

            let top = stack.len() - 1;

            if route.len() == n {
                let last = route[n - 1];
                let total = cost + self.instance.travel(last, 0);
                if total < best_cost {
                    debug_assert_eq!(self.evaluator.evaluate_sequence(&route).cost, total);
                    best = Some(route.clone());
                    best_cost = total;
                    debug!(cost = best_cost, nodes, "new incumbent");
                }
                Self::undo(&mut stack, &mut visited, &mut route, &mut time, &mut cost);
                continue;
            }

            let mut descended = false;
            while stack[top].cursor < n {
                let customer = order[stack[top].cursor];
                stack[top].cursor += 1;
                if visited[customer] {
                    continue;
                }
                let last = route.last().copied().unwrap_or(0);
                let leg = self.instance.travel(last, customer);
                if cost + leg >= best_cost {
                    continue;
                }
                let arrival = time + leg;
                let window = self.instance.window(customer);
                if window.is_violated(arrival) {
                    continue;
                }

                visited[customer] = true;
                route.push(customer);
                stack.push(Frame {
                    cursor: 0,
                    placed: Some(customer),
                    prev_time: time,
                    prev_cost: cost,
                });
                cost += leg;
                time = arrival.max(window.earliest()) + window.service_duration();
                descended = true;
                break;
            }

            if !descended {
                Self::undo(&mut stack, &mut visited, &mut route, &mut time, &mut cost);
            }
        }

        debug!(nodes, best_cost, "tree exhausted");
        match best {
            Some(r) => SolveOutcome::Optimal(Solution::new(Route::from_customers(r), best_cost)),
            None => SolveOutcome::Infeasible,
        }
    }

    fn undo(
        stack: &mut Vec<Frame>,
        visited: &mut [bool],
        route: &mut Vec<usize>,
        time: &mut f64,
        cost: &mut f64,
    ) {
        // The stack is non-empty whenever this is called.
        let frame = stack.pop().expect("undo on empty stack");
        if let Some(customer) = frame.placed {
            visited[customer] = false;
            route.pop();
            *time = frame.prev_time;
            *cost = frame.prev_cost;
        }
    }
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

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.is_empty() {
            return vec![vec![]];
        }
        let mut out = Vec::new();
        for (i, &item) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut p in permutations(&rest) {
                p.insert(0, item);
                out.push(p);
            }
        }
        out
    }

    fn brute_force_optimum(instance: &Instance) -> Option<f64> {
        let n = instance.num_customers();
        let evaluator = RouteEvaluator::new(instance);
        let customers: Vec<usize> = (1..=n).collect();
        permutations(&customers)
            .into_iter()
            .filter_map(|p| {
                let eval = evaluator.evaluate_sequence(&p);
                eval.feasible.then_some(eval.cost)
            })
            .min_by(f64::total_cmp)
    }

    #[test]
    fn test_three_customer_uniform() {
        let windows = vec![
            TimeWindow::new(0.0, 10.0, 2.0).expect("valid"),
            TimeWindow::new(5.0, 15.0, 3.0).expect("valid"),
            TimeWindow::new(0.0, 20.0, 1.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 5.0);
        match BranchAndBound::new(&instance).solve() {
            SolveOutcome::Optimal(sol) => {
                assert_eq!(sol.cost(), 20.0);
                assert!(RouteEvaluator::new(&instance).evaluate(sol.route()).feasible);
            }
            other => panic!("expected Optimal, got {other:?}"),
        }
    }

    #[test]
    fn test_windows_force_non_greedy_route() {
        // Distances favor serving 1 and 2 on the way out, but their service
        // times would push the arrival at 3 past its deadline: 3 must come
        // first even though the depot leg to it is the longest.
        let windows = vec![
            TimeWindow::new(0.0, 100.0, 2.0).expect("valid"),
            TimeWindow::new(0.0, 100.0, 2.0).expect("valid"),
            TimeWindow::new(0.0, 4.0, 0.0).expect("valid"),
        ];
        let mut m = TravelMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    m.set(i, j, ((i as f64) - (j as f64)).abs());
                }
            }
        }
        let instance = Instance::new(windows, m).expect("valid");
        match BranchAndBound::new(&instance).solve() {
            SolveOutcome::Optimal(sol) => {
                assert_eq!(sol.route().customers()[0], 3);
                assert_eq!(sol.cost(), brute_force_optimum(&instance).expect("feasible"));
            }
            other => panic!("expected Optimal, got {other:?}"),
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        use rand::{rngs::StdRng, SeedableRng};
        for seed in 0..12u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = 1 + (seed as usize % 6);
            let (instance, _) = crate::generator::generate_feasible_instance(
                n,
                &crate::generator::GeneratorConfig::default(),
                &mut rng,
            );
            let expected = brute_force_optimum(&instance).expect("planted route is feasible");
            match BranchAndBound::new(&instance).solve() {
                SolveOutcome::Optimal(sol) => {
                    assert!(
                        (sol.cost() - expected).abs() < 1e-9,
                        "seed {seed}: got {}, expected {expected}",
                        sol.cost()
                    );
                }
                other => panic!("seed {seed}: expected Optimal, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_proves_infeasibility() {
        // latest=1 but minimum travel from the depot is 10.
        let windows = vec![
            TimeWindow::new(0.0, 1.0, 0.0).expect("valid"),
            TimeWindow::new(0.0, 50.0, 0.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 10.0);
        assert_eq!(BranchAndBound::new(&instance).solve(), SolveOutcome::Infeasible);
    }

    #[test]
    fn test_empty_instance_trivially_optimal() {
        let instance = uniform_instance(vec![], 5.0);
        match BranchAndBound::new(&instance).solve() {
            SolveOutcome::Optimal(sol) => {
                assert_eq!(sol.cost(), 0.0);
                assert!(sol.route().is_empty());
            }
            other => panic!("expected Optimal, got {other:?}"),
        }
    }

    #[test]
    fn test_single_customer() {
        let windows = vec![TimeWindow::new(0.0, 100.0, 2.0).expect("valid")];
        let instance = uniform_instance(windows, 7.0);
        assert_eq!(
            BranchAndBound::new(&instance).solve().best_cost(),
            Some(14.0)
        );
    }

    #[test]
    fn test_expired_deadline_reports_cutoff() {
        let windows = vec![
            TimeWindow::new(0.0, 100.0, 1.0).expect("valid"),
            TimeWindow::new(0.0, 100.0, 1.0).expect("valid"),
        ];
        let instance = uniform_instance(windows, 5.0);
        match BranchAndBound::new(&instance).solve_until(Instant::now()) {
            SolveOutcome::TimeLimitExceeded(incumbent) => assert!(incumbent.is_none()),
            other => panic!("expected TimeLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_asymmetric_travel() {
        // Going 1 then 2 is cheap in one direction only.
        let windows = vec![
            TimeWindow::new(0.0, 100.0, 0.0).expect("valid"),
            TimeWindow::new(0.0, 100.0, 0.0).expect("valid"),
        ];
        let m = TravelMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 1.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid");
        let instance = Instance::new(windows, m).expect("valid");
        match BranchAndBound::new(&instance).solve() {
            SolveOutcome::Optimal(sol) => {
                assert_eq!(sol.route().customers(), &[1, 2]);
                assert_eq!(sol.cost(), 3.0);
            }
            other => panic!("expected Optimal, got {other:?}"),
        }
    }
}
