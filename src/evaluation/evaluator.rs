//! Route evaluator: replay a route against the instance clock.
//!
//! # Algorithm
//!
//! Start at the depot at the instance start time. For each customer in
//! route order: add the travel leg to the running clock and cost; if the
//! arrival is after the customer's `latest`, the route is infeasible and
//! evaluation short-circuits. Otherwise wait until `earliest` if early,
//! then consume the service duration. After the last customer, the return
//! leg to the depot is added to the cost.
//!
//! Waiting is never charged as cost, but it advances the clock and can make
//! a later customer unreachable.

use crate::models::{Instance, Route};

/// Result of evaluating a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// `true` iff every service start falls within its customer's window.
    pub feasible: bool,
    /// Sum of travel legs, including the return to the depot.
    /// [`f64::INFINITY`] when infeasible — check `feasible` first.
    pub cost: f64,
    /// Arrival time back at the depot; for an infeasible route, the arrival
    /// time at the customer whose window was violated.
    pub finish_time: f64,
}

/// One scheduled stop in a replayed route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit {
    /// Customer being served.
    pub customer: usize,
    /// Arrival time at the customer.
    pub arrival: f64,
    /// Service start (arrival plus any waiting).
    pub service_start: f64,
    /// Departure time (service start plus service duration).
    pub departure: f64,
}

/// Evaluates routes against an instance's windows and travel times.
///
/// Stateless apart from the borrowed instance: evaluating the same route
/// twice always yields the same result.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, Route, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::evaluation::RouteEvaluator;
///
/// let windows = vec![
///     TimeWindow::new(0.0, 10.0, 2.0).unwrap(),
///     TimeWindow::new(5.0, 15.0, 3.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(3);
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j { m.set(i, j, 5.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let eval = evaluator.evaluate(&Route::from_customers(vec![1, 2]));
/// assert!(eval.feasible);
/// assert_eq!(eval.cost, 15.0); // three legs of 5
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Evaluates a route.
    pub fn evaluate(&self, route: &Route) -> Evaluation {
        self.evaluate_sequence(route.customers())
    }

    /// Evaluates an ordered customer sequence, which may be a partial route
    /// during construction.
    ///
    /// An empty sequence is feasible with cost zero.
    pub fn evaluate_sequence(&self, customers: &[usize]) -> Evaluation {
        if customers.is_empty() {
            return Evaluation {
                feasible: true,
                cost: 0.0,
                finish_time: self.instance.start_time(),
            };
        }

        let mut time = self.instance.start_time();
        let mut location = 0;
        let mut cost = 0.0;

        for &customer in customers {
            let leg = self.instance.travel(location, customer);
            cost += leg;
            time += leg;

            let window = self.instance.window(customer);
            if window.is_violated(time) {
                return Evaluation {
                    feasible: false,
                    cost: f64::INFINITY,
                    finish_time: time,
                };
            }
            time = time.max(window.earliest()) + window.service_duration();
            location = customer;
        }

        let return_leg = self.instance.travel(location, 0);
        Evaluation {
            feasible: true,
            cost: cost + return_leg,
            finish_time: time + return_leg,
        }
    }

    /// Replays a route into a full schedule of visits.
    ///
    /// Stops at the first violated window; the returned flag tells whether
    /// the whole route was feasible. Intended for diagnostics and output —
    /// the schedule is always derived, never stored.
    pub fn schedule(&self, route: &Route) -> (Vec<Visit>, bool) {
        let mut visits = Vec::with_capacity(route.len());
        let mut time = self.instance.start_time();
        let mut location = 0;

        for &customer in route.customers() {
            let arrival = time + self.instance.travel(location, customer);
            let window = self.instance.window(customer);
            if window.is_violated(arrival) {
                return (visits, false);
            }
            let service_start = arrival.max(window.earliest());
            let departure = service_start + window.service_duration();
            visits.push(Visit {
                customer,
                arrival,
                service_start,
                departure,
            });
            time = departure;
            location = customer;
        }
        (visits, true)
    }
}
