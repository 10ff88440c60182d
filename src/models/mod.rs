//! Domain model types for the TSPTW engine.
//!
//! Provides the core abstractions: per-customer time windows, validated
//! immutable problem instances, routes as ordered customer sequences, and
//! the outcome types a solving session reports.

mod instance;
mod route;
mod solution;

pub use instance::{Instance, InstanceError, TimeWindow};
pub use route::Route;
pub use solution::{Solution, SolveOutcome};
