//! # tsptw
//!
//! Solving engine for the Traveling Salesman Problem with Time Windows:
//! a single vehicle leaves the depot, serves every customer within its
//! `[earliest, latest]` service-start window (waiting if early), and returns
//! to the depot, minimizing total travel time.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance, time windows, routes, solve outcomes
//! - [`travel`] — Dense travel-time matrix (asymmetric allowed)
//! - [`evaluation`] — Route feasibility checking and cost evaluation
//! - [`constructive`] — Initial-route heuristics (nearest-feasible-neighbor,
//!   deadline insertion, randomized restarts)
//! - [`local_search`] — Windowed improvement operators (2-opt, relocate)
//! - [`metaheuristic`] — Iterated local search and simulated annealing drivers
//! - [`exact`] — Branch-and-bound with feasibility pruning and time cutoff
//! - [`io`] — Text boundary format for instances and solve outcomes
//! - [`generator`] — Random feasible instance generation

pub mod constructive;
pub mod evaluation;
pub mod exact;
pub mod generator;
pub mod io;
pub mod local_search;
pub mod metaheuristic;
pub mod models;
pub mod travel;
