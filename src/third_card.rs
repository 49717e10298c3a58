/// Derive the cards completing a set with two given cards
///
/// Any two cards can start a set. Once they are chosen, each dimension of
/// the missing card is constrained:
/// - where the two cards agree, the third card must carry the same value
/// - where they differ, it must carry a value different from both
/// The completing cards are the cartesian product of these per-dimension
/// candidate lists. With three values per dimension there is exactly one
/// completing card; with a larger range there can be several, and with a
/// range of two values two different cards can never be completed.
///
/// No existence check is done here: looking the candidates up in the deck is
/// the solver's job.

use crate::card::Card;
use crate::dimension::Dimensions;

/// Candidate values of the third card, one list per dimension
pub fn candidate_values(dims: &Dimensions, card1: &Card, card2: &Card) -> Vec<Vec<usize>> {
    card1
        .values()
        .iter()
        .zip(card2.values())
        .map(|(&v1, &v2)| {
            if v1 == v2 {
                vec![v1]
            } else {
                (0..dims.values_size())
                    .filter(|&v| v != v1 && v != v2)
                    .collect()
            }
        })
        .collect()
}

/// All cards which form a valid set together with `card1` and `card2`.
///
/// Returns exactly `[card1]` when both cards are identical. Otherwise none of
/// the returned cards equals `card1` or `card2`.
pub fn third_cards(dims: &Dimensions, card1: &Card, card2: &Card) -> Vec<Card> {
    debug_assert_eq!(card1.len(), dims.len());
    debug_assert_eq!(card2.len(), dims.len());

    if card1 == card2 {
        return vec![card1.clone()];
    }

    let candidates = candidate_values(dims, card1, card2);
    cartesian_product(&candidates)
        .into_iter()
        .map(Card::from_valid)
        .collect()
}

/// Enumerate every combination picking one value per list.
///
/// Iterative odometer: the last dimension turns fastest, so the output is
/// ordered dimension-index-major. Each combination is a freshly owned vector.
fn cartesian_product(lists: &[Vec<usize>]) -> Vec<Vec<usize>> {
    if lists.is_empty() || lists.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let total: usize = lists.iter().map(Vec::len).product();
    let mut product = Vec::with_capacity(total);
    let mut odometer = vec![0usize; lists.len()];

    loop {
        product.push(
            odometer
                .iter()
                .zip(lists)
                .map(|(&pos, list)| list[pos])
                .collect(),
        );

        // advance the odometer, carrying towards dimension 0
        let mut d = lists.len();
        loop {
            if d == 0 {
                return product;
            }
            d -= 1;
            odometer[d] += 1;
            if odometer[d] < lists[d].len() {
                break;
            }
            odometer[d] = 0;
        }
    }
}
