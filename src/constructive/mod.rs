//! Constructive heuristics for building an initial feasible route.
//!
//! - [`nearest_feasible_neighbor`] — earliest-ready greedy over reachable customers, O(n²)
//! - [`deadline_insertion`] — greedy insertion in deadline order with bounded position probing
//! - [`random_restarts`] — shuffled-permutation restarts kept only when feasible
//! - [`initial_route`] — runs all of the above and keeps the cheapest feasible result
//!
//! Every heuristic either returns a route it has verified feasible or
//! reports failure; none returns a silently infeasible route. The one
//! exception is [`initial_route`]'s explicit fallback, which is flagged as
//! infeasible in its result.

mod deadline_insertion;
mod initial;
mod nearest_feasible;
mod random_restart;

pub use deadline_insertion::deadline_insertion;
pub use initial::{initial_route, InitialRoute};
pub use nearest_feasible::nearest_feasible_neighbor;
pub use random_restart::random_restarts;
