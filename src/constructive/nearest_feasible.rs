//! Nearest-feasible-neighbor construction.
//!
//! # Algorithm
//!
//! Starting from the depot, repeatedly pick — among the unvisited customers
//! whose window is still reachable (arrival ≤ latest) — the one with the
//! smallest `earliest`, ties broken by lowest index, then advance the clock
//! through waiting and service. Serving the soonest-opening reachable
//! customer keeps tight early windows from expiring while the vehicle is
//! elsewhere.
//!
//! # Complexity
//!
//! O(n²).

use crate::models::{Instance, Route};

/// Builds a full route by the nearest-feasible-neighbor rule.
///
/// Returns `None` on a dead end: some customer is unvisited but no
/// unvisited customer is reachable in time. A dead end does not prove the
/// instance infeasible — only the exact solver can do that.
///
/// # Examples
///
/// ```
/// use tsptw::models::{Instance, TimeWindow};
/// use tsptw::travel::TravelMatrix;
/// use tsptw::constructive::nearest_feasible_neighbor;
///
/// let windows = vec![
///     TimeWindow::new(20.0, 40.0, 1.0).unwrap(),
///     TimeWindow::new(0.0, 10.0, 1.0).unwrap(),
/// ];
/// let mut m = TravelMatrix::new(3);
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j { m.set(i, j, 5.0); }
///     }
/// }
/// let instance = Instance::new(windows, m).unwrap();
/// // Customer 2 opens first and is picked first.
/// let route = nearest_feasible_neighbor(&instance).unwrap();
/// assert_eq!(route.customers(), &[2, 1]);
/// ```
pub fn nearest_feasible_neighbor(instance: &Instance) -> Option<Route> {
    let n = instance.num_customers();
    let mut visited = vec![false; n + 1];
    let mut route = Route::new();
    let mut time = instance.start_time();
    let mut location = 0;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for candidate in 1..=n {
            if visited[candidate] {
                continue;
            }
            let arrival = time + instance.travel(location, candidate);
            if instance.window(candidate).is_violated(arrival) {
                continue;
            }
            let opens_sooner = next.is_none_or(|best| {
                instance.window(candidate).earliest() < instance.window(best).earliest()
            });
            if opens_sooner {
                next = Some(candidate);
            }
        }

        let chosen = next?;
        visited[chosen] = true;
        let window = instance.window(chosen);
        let arrival = time + instance.travel(location, chosen);
        time = arrival.max(window.earliest()) + window.service_duration();
        location = chosen;
        route.push(chosen);
    }

    Some(route)
}
