//! Route type.

use serde::Serialize;

/// An ordered sequence of distinct customer indices, implicitly bracketed
/// by the depot at both ends.
///
/// A route stores only the visiting order; arrival and departure times are
/// derived on demand by the [`RouteEvaluator`](crate::evaluation::RouteEvaluator)
/// and never stored, so they cannot drift from the order. The mutators come
/// in pairs with exact inverses (`reverse_segment` undoes itself,
/// `remove`/`insert` undo each other), which is what the local-search
/// operators rely on to revert rejected moves in place.
///
/// # Examples
///
/// ```
/// use tsptw::models::Route;
///
/// let mut route = Route::from_customers(vec![1, 2, 3, 4]);
/// route.reverse_segment(1, 3);
/// assert_eq!(route.customers(), &[1, 4, 3, 2]);
/// route.reverse_segment(1, 3);
/// assert_eq!(route.customers(), &[1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    customers: Vec<usize>,
}

impl Route {
    /// Creates an empty route (depot to depot, no customers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route from an ordered customer sequence.
    pub fn from_customers(customers: Vec<usize>) -> Self {
        Self { customers }
    }

    /// The customer indices in visiting order (depot excluded).
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if no customer is visited.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Appends a customer at the end of the route.
    pub fn push(&mut self, customer: usize) {
        self.customers.push(customer);
    }

    /// Inserts a customer before position `pos`.
    pub fn insert(&mut self, pos: usize, customer: usize) {
        self.customers.insert(pos, customer);
    }

    /// Removes and returns the customer at position `pos`.
    pub fn remove(&mut self, pos: usize) -> usize {
        self.customers.remove(pos)
    }

    /// Swaps the customers at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.customers.swap(i, j);
    }

    /// Reverses the segment `[i, j]` (both inclusive). Its own inverse.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        self.customers[i..=j].reverse();
    }

    /// Consumes the route, returning the customer sequence.
    pub fn into_customers(self) -> Vec<usize> {
        self.customers
    }
}

impl From<Vec<usize>> for Route {
    fn from(customers: Vec<usize>) -> Self {
        Self::from_customers(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let route = Route::new();
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
    }

    #[test]
    fn test_push_and_order() {
        let mut route = Route::new();
        route.push(3);
        route.push(1);
        assert_eq!(route.customers(), &[3, 1]);
    }

    #[test]
    fn test_swap() {
        let mut route = Route::from_customers(vec![1, 2, 3]);
        route.swap(0, 2);
        assert_eq!(route.customers(), &[3, 2, 1]);
    }

    #[test]
    fn test_remove_insert_are_inverse() {
        let original = Route::from_customers(vec![5, 2, 7, 1]);
        let mut route = original.clone();
        let c = route.remove(2);
        assert_eq!(c, 7);
        route.insert(0, c);
        assert_eq!(route.customers(), &[7, 5, 2, 1]);
        let c = route.remove(0);
        route.insert(2, c);
        assert_eq!(route, original);
    }

    #[test]
    fn test_reverse_segment_single() {
        let mut route = Route::from_customers(vec![1, 2, 3]);
        route.reverse_segment(1, 1);
        assert_eq!(route.customers(), &[1, 2, 3]);
    }
}
