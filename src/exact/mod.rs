//! Exact search with optimality and infeasibility proofs.

mod branch_bound;

pub use branch_bound::BranchAndBound;
