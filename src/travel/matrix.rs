//! Dense travel-time matrix.

use serde::Serialize;

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Entry `(from, to)` is the travel time from node `from` to node `to`.
/// Rows and columns include the depot at index 0. Nothing in the engine
/// assumes symmetry or the triangle inequality, and neither does this type.
///
/// # Examples
///
/// ```
/// use tsptw::travel::TravelMatrix;
///
/// let m = TravelMatrix::from_rows(vec![
///     vec![0.0, 5.0],
///     vec![7.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.get(1, 0), 7.0);
/// assert!(!m.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a travel matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a travel matrix from explicit rows.
    ///
    /// Returns `None` if any row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return None;
            }
            data.extend(row);
        }
        Some(Self { data, size })
    }

    /// Creates a travel matrix from a flat row-major grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel time from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, travel_time: f64) {
        self.data[from * self.size + to] = travel_time;
    }

    /// Number of nodes in this matrix (customers plus depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let m = TravelMatrix::new(3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(2, 1), 0.0);
    }

    #[test]
    fn test_from_rows() {
        let m = TravelMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0, 0.0]]).expect("valid");
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(0, 1), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(TravelMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0]]).is_none());
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(TravelMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut m = TravelMatrix::new(3);
        m.set(0, 1, 42.0);
        assert_eq!(m.get(0, 1), 42.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric() {
        let mut m = TravelMatrix::new(2);
        m.set(0, 1, 10.0);
        m.set(1, 0, 15.0);
        assert!(!m.is_symmetric(1e-10));
        m.set(1, 0, 10.0);
        assert!(m.is_symmetric(1e-10));
    }
}
