//! Windowed local-search operators.
//!
//! - [`windowed_two_opt`] — segment reversal bounded to a successor window
//! - [`windowed_relocate`] — single-customer move to nearby offset positions
//!
//! Both operators are first-improvement within their bounded window: the
//! first feasible cost-reducing move found is accepted and the pass
//! restarts. Passes repeat until one completes with no accepted move or the
//! pass budget runs out (the windows are not exhaustive neighborhoods, so
//! the budget is the guarantee of termination). Candidate moves are applied
//! to the single owned route buffer and reverted with their exact inverse
//! when rejected; no per-candidate clones. Every candidate is judged by the
//! [`RouteEvaluator`](crate::evaluation::RouteEvaluator), so an operator
//! given a feasible route never returns an infeasible or costlier one.

mod relocate;
mod two_opt;

pub use relocate::{windowed_relocate, DEFAULT_RELOCATE_OFFSETS};
pub use two_opt::windowed_two_opt;

/// Cost improvements smaller than this are treated as noise.
pub(crate) const EPSILON: f64 = 1e-10;
