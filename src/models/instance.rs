//! Problem instance and time window types.

use serde::Serialize;
use thiserror::Error;

use crate::travel::TravelMatrix;

/// A service time window for a customer.
///
/// Service may *begin* no earlier than `earliest` and no later than `latest`.
/// Arriving early forces waiting until `earliest`; arriving after `latest`
/// makes the route infeasible. Once service begins it takes
/// `service_duration` before departure is possible.
///
/// # Examples
///
/// ```
/// use tsptw::models::TimeWindow;
///
/// let tw = TimeWindow::new(10.0, 20.0, 5.0).unwrap();
/// assert!(tw.contains(15.0));
/// assert!((tw.waiting_time(4.0) - 6.0).abs() < 1e-10);
/// assert!(tw.is_violated(20.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    earliest: f64,
    latest: f64,
    service_duration: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if any value is negative or non-finite, or if
    /// `earliest > latest`.
    pub fn new(earliest: f64, latest: f64, service_duration: f64) -> Option<Self> {
        if !earliest.is_finite() || !latest.is_finite() || !service_duration.is_finite() {
            return None;
        }
        if earliest < 0.0 || latest < 0.0 || service_duration < 0.0 || earliest > latest {
            return None;
        }
        Some(Self {
            earliest,
            latest,
            service_duration,
        })
    }

    /// Earliest allowable service start.
    pub fn earliest(&self) -> f64 {
        self.earliest
    }

    /// Latest allowable service start.
    pub fn latest(&self) -> f64 {
        self.latest
    }

    /// Time consumed by service once it begins.
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// Window width `latest - earliest`. Zero means a fixed appointment.
    pub fn width(&self) -> f64 {
        self.latest - self.earliest
    }

    /// Returns `true` if service may start at the given time.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.earliest && time <= self.latest
    }

    /// Returns the waiting time if arriving at the given time.
    ///
    /// Zero if the vehicle arrives within or after the window.
    pub fn waiting_time(&self, arrival: f64) -> f64 {
        if arrival < self.earliest {
            self.earliest - arrival
        } else {
            0.0
        }
    }

    /// Returns `true` if arriving at the given time violates this window.
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.latest
    }
}

/// Rejection reasons for malformed problem data.
///
/// Checked once when an instance is constructed or parsed, never during
/// search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// A customer's window closes before it opens.
    #[error("customer {customer}: window closes at {latest} before it opens at {earliest}")]
    WindowReversed {
        /// Customer index (1-based).
        customer: usize,
        /// Earliest service start.
        earliest: f64,
        /// Latest service start.
        latest: f64,
    },
    /// A customer has a negative or non-finite time value.
    #[error("customer {customer}: negative or non-finite time value")]
    InvalidTime {
        /// Customer index (1-based).
        customer: usize,
    },
    /// The travel matrix does not match the customer count.
    #[error("travel matrix must be {expected}x{expected}, found {found} entries per row")]
    MatrixDimension {
        /// Expected side length (`n + 1`).
        expected: usize,
        /// Side length or row length actually found.
        found: usize,
    },
    /// A travel time entry is negative or non-finite.
    #[error("invalid travel time from node {from} to node {to}")]
    InvalidTravel {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
    },
    /// A line of the text boundary format could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// An immutable TSPTW problem instance.
///
/// Node `0` is the depot and carries no window; customers are `1..=n`. The
/// instance owns the customer windows, the `(n+1) x (n+1)` travel matrix
/// (asymmetric travel times allowed), and the session start time. It also
/// precomputes the deadline priority order used by greedy insertion and as
/// the branching order of the exact solver.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
///
/// let windows = vec![
///     TimeWindow::new(0.0, 10.0, 2.0).unwrap(),
///     TimeWindow::new(5.0, 15.0, 3.0).unwrap(),
/// ];
/// let matrix = TravelMatrix::from_rows(vec![
///     vec![0.0, 4.0, 6.0],
///     vec![4.0, 0.0, 3.0],
///     vec![6.0, 3.0, 0.0],
/// ]).unwrap();
/// let instance = Instance::new(windows, matrix).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.travel(1, 2), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    windows: Vec<TimeWindow>,
    travel: TravelMatrix,
    start_time: f64,
    deadline_order: Vec<usize>,
}

impl Instance {
    /// Creates an instance starting at time zero.
    pub fn new(windows: Vec<TimeWindow>, travel: TravelMatrix) -> Result<Self, InstanceError> {
        Self::with_start_time(windows, travel, 0.0)
    }

    /// Creates an instance with an explicit depot departure time.
    ///
    /// Validates that the travel matrix is `(n+1) x (n+1)` for `n` customer
    /// windows and that every travel entry is non-negative and finite.
    pub fn with_start_time(
        windows: Vec<TimeWindow>,
        travel: TravelMatrix,
        start_time: f64,
    ) -> Result<Self, InstanceError> {
        let expected = windows.len() + 1;
        if travel.size() != expected {
            return Err(InstanceError::MatrixDimension {
                expected,
                found: travel.size(),
            });
        }
        for from in 0..travel.size() {
            for to in 0..travel.size() {
                let t = travel.get(from, to);
                if !t.is_finite() || t < 0.0 {
                    return Err(InstanceError::InvalidTravel { from, to });
                }
            }
        }
        let deadline_order = deadline_order(&windows);
        Ok(Self {
            windows,
            travel,
            start_time,
            deadline_order,
        })
    }

    /// Number of customers, excluding the depot.
    pub fn num_customers(&self) -> usize {
        self.windows.len()
    }

    /// Time window of the given customer.
    ///
    /// # Panics
    ///
    /// Panics if `customer` is `0` (the depot has no window) or greater
    /// than the customer count.
    pub fn window(&self, customer: usize) -> &TimeWindow {
        &self.windows[customer - 1]
    }

    /// Travel time from node `from` to node `to`.
    pub fn travel(&self, from: usize, to: usize) -> f64 {
        self.travel.get(from, to)
    }

    /// The underlying travel matrix.
    pub fn travel_matrix(&self) -> &TravelMatrix {
        &self.travel
    }

    /// Departure time from the depot.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Customers sorted by `(latest, latest - earliest, service_duration)`
    /// ascending, ties broken by index.
    ///
    /// Serves as the insertion order for greedy deadline insertion and as
    /// the branching priority of the exact solver.
    pub fn deadline_order(&self) -> &[usize] {
        &self.deadline_order
    }
}

fn deadline_order(windows: &[TimeWindow]) -> Vec<usize> {
    let mut order: Vec<usize> = (1..=windows.len()).collect();
    order.sort_by(|&a, &b| {
        let wa = &windows[a - 1];
        let wb = &windows[b - 1];
        wa.latest()
            .total_cmp(&wb.latest())
            .then(wa.width().total_cmp(&wb.width()))
            .then(wa.service_duration().total_cmp(&wb.service_duration()))
            .then(a.cmp(&b))
    });
    order
}
