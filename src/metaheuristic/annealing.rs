//! Simulated annealing over random position swaps.
//!
//! # Algorithm
//!
//! Start from the constructive initial route, then repeatedly swap two
//! random positions and decide via the configured
//! [`AcceptanceCriterion`] whether the swapped route becomes the new
//! current one. Infeasible neighbors are always rejected. The temperature
//! cools geometrically each iteration, so the search hardens into pure
//! hill-climbing as the deadline approaches. The best feasible route ever
//! seen is kept aside and is what the session reports.
//!
//! # Reference
//!
//! Kirkpatrick, S.; Gelatt, C. D.; Vecchi, M. P. (1983). "Optimization by
//! Simulated Annealing". Science 220 (4598).

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AcceptanceCriterion, DecayingAcceptance};
use crate::constructive::initial_route;
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution, SolveOutcome};

/// Tuning knobs for [`SimulatedAnnealing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied every iteration.
    pub cooling_rate: f64,
    /// Wall-clock budget for [`SimulatedAnnealing::solve`].
    pub time_limit: Duration,
    /// Seed for the session RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            time_limit: Duration::from_secs(30),
            seed: None,
        }
    }
}

/// One annealing session over a single instance.
///
/// Defaults to [`DecayingAcceptance`]; swap in
/// [`MetropolisAcceptance`](super::MetropolisAcceptance) via
/// [`with_acceptance`](Self::with_acceptance) for the classical rule.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::metaheuristic::{AnnealingConfig, SimulatedAnnealing};
///
/// let windows = vec![
///     TimeWindow::new(0.0, 50.0, 1.0).unwrap(),
///     TimeWindow::new(0.0, 50.0, 1.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(3);
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j { m.set(i, j, 3.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
///
/// let config = AnnealingConfig {
///     time_limit: Duration::from_millis(20),
///     seed: Some(1),
///     ..AnnealingConfig::default()
/// };
/// let outcome = SimulatedAnnealing::new(&instance, config).solve();
/// assert_eq!(outcome.best_cost(), Some(9.0));
/// ```
pub struct SimulatedAnnealing<'a> {
    instance: &'a Instance,
    evaluator: RouteEvaluator<'a>,
    config: AnnealingConfig,
    rng: StdRng,
    acceptance: Box<dyn AcceptanceCriterion>,
}

impl<'a> SimulatedAnnealing<'a> {
    /// Creates a session with the default acceptance rule.
    pub fn new(instance: &'a Instance, config: AnnealingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            instance,
            evaluator: RouteEvaluator::new(instance),
            config,
            rng,
            acceptance: Box::new(DecayingAcceptance),
        }
    }

    /// Replaces the acceptance rule.
    pub fn with_acceptance(mut self, acceptance: Box<dyn AcceptanceCriterion>) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Runs the session under the configured time budget.
    pub fn solve(&mut self) -> SolveOutcome {
        let deadline = Instant::now() + self.config.time_limit;
        self.solve_until(deadline)
    }

    /// Runs the session until the explicit deadline.
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

        // A single swap needs two distinct positions.
        if current.len() < 2 {
            return SolveOutcome::Feasible(Solution::new(best, best_cost));
        }

        let mut temperature = self.config.initial_temperature;
        let mut iteration: u64 = 0;

        while Instant::now() < deadline {
            iteration += 1;

            let len = current.len();
            let i = self.rng.random_range(0..len);
            let mut j = self.rng.random_range(0..len);
            while j == i {
                j = self.rng.random_range(0..len);
            }

            current.swap(i, j);
            let eval = self.evaluator.evaluate(&current);
            let accepted = eval.feasible
                && self
                    .acceptance
                    .accept(eval.cost - current_cost, temperature, &mut self.rng);

            if accepted {
                current_cost = eval.cost;
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    debug!(cost = best_cost, iteration, temperature, "new best route");
                }
            } else {
                current.swap(i, j);
            }

            temperature *= self.config.cooling_rate;
        }

        debug!(cost = best_cost, iterations = iteration, "deadline reached");
        SolveOutcome::Feasible(Solution::new(best, best_cost))
    }
}
