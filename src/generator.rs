//! Random feasible instance generation.
//!
//! # Algorithm
//!
//! Plant a random customer permutation, draw a symmetric integer travel
//! matrix and service durations, replay the planted route to get each
//! customer's natural arrival time, then open a window around that arrival:
//! `earliest` up to `slack/2` before it, `latest` up to `slack` after it.
//! The planted route is feasible by construction, so every generated
//! instance has at least one feasible route.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Instance, Route, TimeWindow};
use crate::travel::TravelMatrix;

/// Bounds for random instance generation. Values are drawn as integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on service durations (inclusive, lower bound 5).
    pub max_service: u32,
    /// Upper bound on travel times (inclusive, lower bound 10).
    pub max_travel: u32,
    /// Slack used to widen windows around the planted arrival times.
    pub window_slack: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_service: 50,
            max_travel: 100,
            window_slack: 30,
        }
    }
}

/// Generates a random instance with `n` customers and a planted feasible
/// route, which is returned alongside the instance.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tsptw::evaluation::RouteEvaluator;
/// use tsptw::generator::{generate_feasible_instance, GeneratorConfig};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (instance, planted) =
///     generate_feasible_instance(5, &GeneratorConfig::default(), &mut rng);
/// assert!(RouteEvaluator::new(&instance).evaluate(&planted).feasible);
/// ```
pub fn generate_feasible_instance(
    n: usize,
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> (Instance, Route) {
    let mut order: Vec<usize> = (1..=n).collect();
    order.shuffle(rng);

    let mut matrix = TravelMatrix::new(n + 1);
    for i in 0..=n {
        for j in (i + 1)..=n {
            let travel = rng.random_range(10..=config.max_travel.max(10)) as f64;
            matrix.set(i, j, travel);
            matrix.set(j, i, travel);
        }
    }

    let services: Vec<f64> = (0..n)
        .map(|_| rng.random_range(5..=config.max_service.max(5)) as f64)
        .collect();

    // Replay the planted route to find each customer's natural arrival.
    let mut arrival = vec![0.0; n + 1];
    let mut departure = 0.0;
    let mut location = 0;
    for &c in &order {
        arrival[c] = departure + matrix.get(location, c);
        departure = arrival[c] + services[c - 1];
        location = c;
    }

    let half_slack = config.window_slack / 2;
    let mut windows = vec![None; n];
    for &c in &order {
        let earliest = (arrival[c] - rng.random_range(0..=half_slack) as f64).max(0.0);
        let latest = arrival[c] + rng.random_range(0..=config.window_slack) as f64;
        windows[c - 1] = TimeWindow::new(earliest, latest, services[c - 1]);
    }
    let windows: Vec<TimeWindow> = windows
        .into_iter()
        .map(|w| w.expect("windows bracket the planted arrival"))
        .collect();

    let instance = Instance::new(windows, matrix).expect("generated instance is well-formed");
    (instance, Route::from_customers(order))
}
