//! Travel time matrices.
//!
//! Provides a dense travel-time matrix; travel times need not be symmetric
//! and need not satisfy the triangle inequality.

mod matrix;

pub use matrix::TravelMatrix;
