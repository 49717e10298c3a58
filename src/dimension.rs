/// Dimension configuration of a deck
///
/// A deck is described by a number of dimensions (color, number, shape...)
/// and by the size of the value range shared by all of them. Every card
/// value in dimension `d` lies in `0..dimensions.values_size()`.
///
/// The configuration is a plain value: build one per solve and hand it to
/// card construction and to the solver.

use crate::error::SolverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub index: usize,
    pub values_size: usize,
}

impl Dimension {
    /// True if `value` is a legal value for this dimension
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        value < self.values_size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    dims: Vec<Dimension>,
}

impl Dimensions {
    /// Build `count` dimensions, all sharing the same value range
    pub fn new(count: usize, values_size: usize) -> Result<Self, SolverError> {
        if count == 0 {
            return Err(SolverError::NoDimensions {
                dimension_count: count,
            });
        }
        if values_size == 0 {
            return Err(SolverError::EmptyValueRange { values_size });
        }
        let dims = (0..count)
            .map(|index| Dimension { index, values_size })
            .collect();
        Ok(Self { dims })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Never true for a successfully built configuration
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Shared value-range size (exclusive upper bound of card values)
    #[inline]
    pub fn values_size(&self) -> usize {
        self.dims[0].values_size
    }

    pub fn get(&self, index: usize) -> Option<&Dimension> {
        self.dims.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dimension> {
        self.dims.iter()
    }
}

impl<'a> IntoIterator for &'a Dimensions {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
