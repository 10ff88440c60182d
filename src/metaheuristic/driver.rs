//! Iterated local search driver.
//!
//! # Algorithm
//!
//! Build an initial route, then alternate the two windowed operators —
//! 2-opt on even iterations, relocate on odd — until the deadline. When an
//! iteration fails to improve, every `stall_period`-th such iteration
//! applies a small random perturbation (swap two random positions) to the
//! current route even if that makes it worse or infeasible; the driver
//! simply re-evaluates and continues from wherever it lands. The best
//! feasible route ever seen is tracked separately from the current one, so
//! its cost is monotone non-increasing across the session.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constructive::initial_route;
use crate::evaluation::RouteEvaluator;
use crate::local_search::{windowed_relocate, windowed_two_opt, EPSILON};
use crate::models::{Instance, Solution, SolveOutcome};

/// Tuning knobs for [`LocalSearchDriver`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Wall-clock budget for [`LocalSearchDriver::solve`].
    pub time_limit: Duration,
    /// Seed for the session RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// 2-opt successor window.
    pub segment_window: usize,
    /// Relocate candidate offsets.
    pub relocate_offsets: Vec<isize>,
    /// Pass budget handed to each operator invocation.
    pub operator_passes: usize,
    /// Perturb after this many consecutive non-improving iterations.
    pub stall_period: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(30),
            seed: None,
            segment_window: 20,
            relocate_offsets: vec![-5, -3, -1, 1, 3, 5],
            operator_passes: 200,
            stall_period: 10,
        }
    }
}

/// One iterated-local-search session over a single instance.
///
/// The session exclusively owns its current route, best-known route, and
/// RNG; a fixed seed and a fixed deadline make it reproducible.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::metaheuristic::{DriverConfig, LocalSearchDriver};
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
/// let config = DriverConfig {
///     time_limit: Duration::from_millis(50),
///     seed: Some(7),
///     ..DriverConfig::default()
/// };
/// let outcome = LocalSearchDriver::new(&instance, config).solve();
/// assert_eq!(outcome.best_cost(), Some(20.0)); // four legs of 5
/// ```
pub struct LocalSearchDriver<'a> {
    instance: &'a Instance,
    evaluator: RouteEvaluator<'a>,
    config: DriverConfig,
    rng: StdRng,
}

impl<'a> LocalSearchDriver<'a> {
    /// Creates a session for the given instance.
    pub fn new(instance: &'a Instance, config: DriverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            instance,
            evaluator: RouteEvaluator::new(instance),
            config,
            rng,
        }
    }

    /// Runs the session under the configured time budget.
    pub fn solve(&mut self) -> SolveOutcome {
        let deadline = Instant::now() + self.config.time_limit;
        self.solve_until(deadline)
    }

    /// Runs the session until the explicit deadline.
    ///
    /// Returns [`SolveOutcome::Feasible`] with the best-known route, or
    /// [`SolveOutcome::NotFound`] carrying the best infeasible attempt when
    /// construction fails.
    pub fn solve_until(&mut self, deadline: Instant) -> SolveOutcome {
        let init = initial_route(self.instance, &self.evaluator, &mut self.rng);
        if !init.feasible {
            debug!("no feasible initial route");
            return SolveOutcome::NotFound(Some(init.route));
        }

        let mut current = init.route;
        let mut current_cost = init.cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut iteration: u64 = 0;

        while Instant::now() < deadline {
            iteration += 1;

            let eval = if iteration % 2 == 0 {
                windowed_two_opt(
                    &mut current,
                    &self.evaluator,
                    self.config.segment_window,
                    self.config.operator_passes,
                )
            } else {
                windowed_relocate(
                    &mut current,
                    &self.evaluator,
                    &self.config.relocate_offsets,
                    self.config.operator_passes,
                )
            };

            if eval.feasible && eval.cost < current_cost - EPSILON {
                current_cost = eval.cost;
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    debug!(cost = best_cost, iteration, "new best route");
                }
            } else if iteration % self.config.stall_period == 0 && current.len() > 4 {
                let (i, j) = self.random_pair(current.len());
                current.swap(i, j);
                // The perturbed route may be worse or even infeasible; the
                // search continues from it regardless.
                current_cost = self.evaluator.evaluate(&current).cost;
                trace!(iteration, "perturbation applied");
            }
        }

        debug!(cost = best_cost, iterations = iteration, "deadline reached");
        SolveOutcome::Feasible(Solution::new(best, best_cost))
    }

    fn random_pair(&mut self, len: usize) -> (usize, usize) {
        let i = self.rng.random_range(0..len);
        let mut j = self.rng.random_range(0..len);
        while j == i {
            j = self.rng.random_range(0..len);
        }
        (i, j)
    }
}
