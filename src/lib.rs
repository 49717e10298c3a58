//! Find every set in a collection of Set cards
//!
//! A card holds one value per dimension, and three cards form a set when, in
//! every dimension, their values are either all identical or all different.
//! The pairwise solver finds all of them in O(k^2) for k unique cards.

pub mod card;
pub mod dimension;
pub mod error;
pub mod input;
pub mod multiplicity;
pub mod output;
pub mod solver;
pub mod third_card;
pub mod utils;

#[cfg(test)]
mod testing;

pub use card::{Card, CardSet, is_set};
pub use dimension::{Dimension, Dimensions};
pub use error::{CardError, SolverError};
pub use solver::{PairwiseSolver, SolveStats, brute_force_sets, possible_sets, solve};
