//! Test helpers shared by the module tests.

use crate::card::Card;
use crate::dimension::Dimensions;

/// Build cards from literal value slices, panicking on invalid input.
#[track_caller]
pub(crate) fn cards(dims: &Dimensions, values: &[&[usize]]) -> Vec<Card> {
    values
        .iter()
        .map(|v| Card::new(dims, v.to_vec()).expect("valid test card"))
        .collect()
}

/// Every distinct card of the deck, in ascending order.
///
/// Card `i` is the base-`values_size` representation of `i`, most
/// significant digit in dimension 0.
pub(crate) fn full_deck(dims: &Dimensions) -> Vec<Card> {
    let base = dims.values_size();
    let total = base.pow(dims.len() as u32);
    (0..total)
        .map(|i| {
            let mut rem = i;
            let mut values = vec![0; dims.len()];
            for d in (0..dims.len()).rev() {
                values[d] = rem % base;
                rem /= base;
            }
            Card::new(dims, values).expect("deck card in range")
        })
        .collect()
}
