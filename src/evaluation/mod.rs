//! Route feasibility checking and cost evaluation.
//!
//! The [`RouteEvaluator`] is the single authority on what counts as a
//! feasible route and what it costs; every heuristic and the exact solver
//! go through it (or assert against it) rather than re-deriving the rule.

mod evaluator;

pub use evaluator::{Evaluation, RouteEvaluator, Visit};
