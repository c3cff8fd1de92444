use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::combinatorial::LexicalPermutations;
use crate::error::{Error, Result};
use crate::geometry::{Metric, Point};
use crate::tour::{cost, SearchResult};

/// Finds the minimum-cost closed tour over `points` by scoring every
/// visiting order against `metric` and keeping the running minimum.
///
/// Orderings are enumerated lexicographically; when two orderings tie on
/// cost, the one discovered first is retained. A single point yields a
/// trivial tour of cost zero.
///
/// # Example
/// ```
/// use tsp_brute::geometry::{Euclidean, Point};
/// use tsp_brute::tour::brute_force;
///
/// // Corners of the unit square; the optimal tour is its perimeter.
/// let points: Vec<Point<f64>> = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 1.0, 0.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 0.0, 1.0),
/// ];
///
/// let result = brute_force::search(&points, &Euclidean).unwrap();
/// assert!((result.cost - 4.0).abs() < 1e-9);
/// assert_eq!(result.tour.len(), 4);
/// ```
///
/// # Errors
/// Returns [`Error::EmptyPointSet`] when `points` is empty; no tour is
/// definable over zero points.
///
/// # Complexity
/// * Time: O(N! * N), intrinsic to exhaustive enumeration; practical for
///   N up to roughly 10 or 11
/// * Space: O(N) beyond the input; no list of permutations is ever
///   materialized in full
pub fn search<T, M>(points: &[Point<T>], metric: &M) -> Result<SearchResult<T>>
where
    T: Float + Debug,
    M: Metric<T>,
{
    if points.is_empty() {
        return Err(Error::EmptyPointSet);
    }

    let mut best_order: Vec<usize> = Vec::new();
    let mut best_cost = T::infinity();
    let mut examined: u64 = 0;

    for order in LexicalPermutations::new(points.len()) {
        let tour_cost = cost(points, &order, metric);
        examined += 1;

        if tour_cost < best_cost {
            debug!(
                "new best tour at permutation {}: cost {:?}",
                examined, tour_cost
            );
            best_cost = tour_cost;
            best_order = order;
        }
    }

    debug!("exhausted {} permutations of {} points", examined, points.len());

    Ok(SearchResult {
        tour: best_order.iter().map(|&index| points[index]).collect(),
        cost: best_cost,
        permutations_examined: examined,
    })
}
