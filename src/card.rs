/// Cards and sets of three cards
///
/// A card is an immutable vector holding one value per dimension. A `CardSet`
/// is an unordered triple of cards which forms a valid set: in every
/// dimension, the three values are either all identical or all pairwise
/// distinct.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::dimension::Dimensions;
use crate::error::CardError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Card {
    values: Vec<usize>,
}

impl Card {
    /// Build a card, checking its length and every value against `dims`
    pub fn new(dims: &Dimensions, values: Vec<usize>) -> Result<Self, CardError> {
        if values.len() != dims.len() {
            return Err(CardError::WrongLength {
                expected: dims.len(),
                actual: values.len(),
            });
        }
        for (dim, &value) in dims.iter().zip(&values) {
            if !dim.contains(value) {
                return Err(CardError::ValueOutOfRange {
                    dimension: dim.index,
                    value,
                    values_size: dim.values_size,
                });
            }
        }
        Ok(Self { values })
    }

    /// Build a card from values already known to be valid for the deck.
    pub(crate) fn from_valid(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// Value in the given dimension, `None` past the last dimension
    #[inline]
    pub fn value(&self, dimension: usize) -> Option<usize> {
        self.values.get(dimension).copied()
    }

    #[inline]
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

/// True if the three cards form a valid set
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    debug_assert!(a.len() == b.len() && b.len() == c.len());
    a.values
        .iter()
        .zip(&b.values)
        .zip(&c.values)
        .all(|((x, y), z)| (x == y && y == z) || (x != y && y != z && x != z))
}

/// An unordered triple of cards.
///
/// Members are kept sorted, so two triples holding the same cards in any
/// order compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardSet {
    cards: [Card; 3],
}

impl CardSet {
    pub fn new(a: Card, b: Card, c: Card) -> Self {
        let mut cards = [a, b, c];
        cards.sort();
        Self { cards }
    }

    /// The three cards, in ascending order
    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    pub fn is_valid(&self) -> bool {
        let [a, b, c] = &self.cards;
        is_set(a, b, c)
    }
}

impl Display for CardSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [a, b, c] = &self.cards;
        write!(f, "{{{a} {b} {c}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card(dims: &Dimensions, values: &[usize]) -> Card {
        Card::new(dims, values.to_vec()).expect("valid card")
    }

    #[test]
    fn test_new_checks_length() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert_eq!(
            Card::new(&dims, vec![0, 1]),
            Err(CardError::WrongLength { expected: 3, actual: 2 })
        );
        assert_eq!(
            Card::new(&dims, vec![0, 1, 2, 0]),
            Err(CardError::WrongLength { expected: 3, actual: 4 })
        );
    }

    #[test]
    fn test_new_checks_range() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert_eq!(
            Card::new(&dims, vec![0, 3, 1]),
            Err(CardError::ValueOutOfRange { dimension: 1, value: 3, values_size: 3 })
        );
    }

    #[test]
    fn test_value_is_bounds_checked() {
        let dims = Dimensions::new(2, 3).unwrap();
        let c = card(&dims, &[2, 1]);
        assert_eq!(c.value(0), Some(2));
        assert_eq!(c.value(1), Some(1));
        assert_eq!(c.value(2), None);
    }

    #[test]
    fn test_content_equality_and_hash() {
        let dims = Dimensions::new(2, 3).unwrap();
        let mut seen = HashSet::new();
        seen.insert(card(&dims, &[0, 1]));
        assert!(seen.contains(&card(&dims, &[0, 1])));
        assert!(!seen.contains(&card(&dims, &[1, 0])));
    }

    #[test]
    fn test_is_set() {
        let dims = Dimensions::new(4, 3).unwrap();
        // all same / all different mix
        assert!(is_set(
            &card(&dims, &[0, 0, 1, 2]),
            &card(&dims, &[0, 1, 1, 1]),
            &card(&dims, &[0, 2, 1, 0]),
        ));
        // two equal and one different in dimension 3
        assert!(!is_set(
            &card(&dims, &[0, 0, 1, 2]),
            &card(&dims, &[0, 1, 1, 2]),
            &card(&dims, &[0, 2, 1, 0]),
        ));
        let same = card(&dims, &[1, 1, 1, 1]);
        assert!(is_set(&same, &same, &same));
    }

    #[test]
    fn test_card_set_is_permutation_invariant() {
        let dims = Dimensions::new(2, 3).unwrap();
        let a = card(&dims, &[0, 0]);
        let b = card(&dims, &[0, 1]);
        let c = card(&dims, &[0, 2]);
        let abc = CardSet::new(a.clone(), b.clone(), c.clone());
        let bac = CardSet::new(b.clone(), a.clone(), c.clone());
        let cba = CardSet::new(c.clone(), b.clone(), a.clone());
        assert_eq!(abc, bac);
        assert_eq!(abc, cba);

        let mut sets = HashSet::new();
        sets.insert(abc);
        sets.insert(bac);
        sets.insert(cba);
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn test_display() {
        let dims = Dimensions::new(2, 3).unwrap();
        let set = CardSet::new(card(&dims, &[0, 2]), card(&dims, &[0, 0]), card(&dims, &[0, 1]));
        assert_eq!(set.to_string(), "{(0,0) (0,1) (0,2)}");
        assert!(set.is_valid());
    }
}
