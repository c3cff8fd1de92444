pub mod brute_force;

use num_traits::Float;
use std::fmt::Debug;

use crate::geometry::{Metric, Point};

pub use brute_force::search as brute_force_search;

/// Result of an exhaustive tour search.
#[derive(Debug, Clone)]
pub struct SearchResult<T>
where
    T: Float + Debug,
{
    /// The lowest-cost visiting order found. The return edge from the last
    /// point back to the first is implicit.
    pub tour: Vec<Point<T>>,
    /// Total cost of the tour, including the closing edge.
    pub cost: T,
    /// Number of orderings scored before the generator exhausted.
    pub permutations_examined: u64,
}

/// Total cost of visiting `points` in the order given by `order`,
/// returning to the starting point at the end.
///
/// An order of fewer than two points has no edges to travel and costs
/// zero.
pub fn cost<T, M>(points: &[Point<T>], order: &[usize], metric: &M) -> T
where
    T: Float + Debug,
    M: Metric<T>,
{
    if order.len() < 2 {
        return T::zero();
    }

    let mut total = T::zero();
    for pair in order.windows(2) {
        total = total + metric.distance(&points[pair[0]], &points[pair[1]]);
    }

    // Close the cycle from the last point back to the first.
    total + metric.distance(&points[order[order.len() - 1]], &points[order[0]])
}
