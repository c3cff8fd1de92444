pub mod combinatorial;
pub mod error;
pub mod geometry;
pub mod io;
pub mod tour;

pub use combinatorial::LexicalPermutations;
pub use error::{Error, Result};
pub use geometry::{Euclidean, Manhattan, Metric, Point};
pub use tour::{brute_force_search, SearchResult};
