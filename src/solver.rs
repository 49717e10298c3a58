/// Find every set that can be formed from a collection of cards
///
/// Any second card may follow any first card, and the pair then fixes a small
/// list of third cards completing the set (see `third_card`). So instead of
/// checking all triples of cards, the solver walks the pairs of unique cards
/// and looks each candidate third card up in the multiplicity table: this
/// runs in O(k^2) for k unique cards, instead of O(n^3) for n input cards.
///
/// Bookkeeping of the multiplicity table during the walk:
/// - card1 = unique[i] reserves one copy for the whole inner loop
/// - card2 = unique[j], j >= i, reserves one more copy if still available;
///   j starts at i so that a triple of identical cards can be found
/// - a candidate card3 forms a set if at least one copy remains
/// - card2's copy is returned after each pair, while card1 is exhausted
///   for good once its inner loop is over, so it is never looked at again
///
/// card3 is looked up but never reserved: the result holds every possible
/// set, several of which may share the same physical card. This is not a
/// partition of the input into disjoint sets.

use std::collections::HashSet;

use separator::Separatable;

use crate::card::{Card, CardSet, is_set};
use crate::dimension::Dimensions;
use crate::error::SolverError;
use crate::multiplicity::MultiplicityTable;
use crate::third_card::third_cards;
use crate::utils::debug_print;

/// Counters collected while solving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub input_cards: usize,
    pub unique_cards: usize,
    pub pairs_examined: u64,
    pub candidates_checked: u64,
    pub sets_found: usize,
}

impl SolveStats {
    pub fn to_string(&self) -> String {
        format!(
            "{} cards ({} unique): {} pairs examined, {} third cards checked, {} sets found",
            self.input_cards.separated_string(),
            self.unique_cards.separated_string(),
            self.pairs_examined.separated_string(),
            self.candidates_checked.separated_string(),
            self.sets_found.separated_string()
        )
    }
}

pub struct PairwiseSolver<'d> {
    dims: &'d Dimensions,
    stats: SolveStats,
}

impl<'d> PairwiseSolver<'d> {
    pub fn new(dims: &'d Dimensions) -> Self {
        Self {
            dims,
            stats: SolveStats::default(),
        }
    }

    /// Counters of the last run
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Return all distinct sets which can be formed from `cards`
    pub fn run(&mut self, cards: &[Card]) -> HashSet<CardSet> {
        let mut result = HashSet::new();
        self.stats = SolveStats {
            input_cards: cards.len(),
            ..SolveStats::default()
        };

        // map each card to its number of copies, then work on unique cards only
        let mut table = MultiplicityTable::from_cards(cards);
        let unique = table.unique_cards();
        self.stats.unique_cards = unique.len();
        debug_print(&format!(
            "run: {} input cards reduced to {} unique cards",
            cards.len().separated_string(),
            unique.len().separated_string()
        ));

        for (i, card1) in unique.iter().enumerate() {
            // only earlier card1s are exhausted, so this always succeeds
            let Some(mut held1) = table.reserve(card1) else {
                debug_print(&format!("run: card {card1} unavailable as card1"));
                continue;
            };

            for card2 in &unique[i..] {
                // when card2 == card1, one copy is already held as card1
                let Some(held2) = held1.reserve(card2) else {
                    continue;
                };
                self.stats.pairs_examined += 1;

                for card3 in third_cards(self.dims, card1, card2) {
                    self.stats.candidates_checked += 1;
                    if held2.is_available(&card3) {
                        debug_assert!(is_set(card1, card2, &card3));
                        result.insert(CardSet::new(card1.clone(), card2.clone(), card3));
                    }
                }
                // held2 dropped: card2's count is restored
            }

            held1.consume();
        }

        self.stats.sets_found = result.len();
        debug_print(&format!("run: {}", self.stats.to_string()));
        result
    }
}

/// All distinct sets which can be formed from `cards`
pub fn possible_sets(dims: &Dimensions, cards: &[Card]) -> HashSet<CardSet> {
    PairwiseSolver::new(dims).run(cards)
}

/// Turn raw value vectors into cards, failing on the first malformed record.
///
/// Records are numbered from 1 in the error.
pub fn build_cards(dims: &Dimensions, records: &[Vec<usize>]) -> Result<Vec<Card>, SolverError> {
    records
        .iter()
        .enumerate()
        .map(|(i, values)| {
            Card::new(dims, values.clone())
                .map_err(|source| SolverError::MalformedCard { record: i + 1, source })
        })
        .collect()
}

/// Configure the dimensions, validate the raw cards, and find every set.
pub fn solve(
    records: &[Vec<usize>],
    dimension_count: usize,
    values_size: usize,
) -> Result<HashSet<CardSet>, SolverError> {
    let dims = Dimensions::new(dimension_count, values_size)?;
    let cards = build_cards(&dims, records)?;
    Ok(possible_sets(&dims, &cards))
}

/// Reference search: check every triple of input positions.
///
/// O(n^3) in the number of input cards, used to verify the pairwise solver.
pub fn brute_force_sets(cards: &[Card]) -> HashSet<CardSet> {
    let mut result = HashSet::new();
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_set(&cards[i], &cards[j], &cards[k]) {
                    result.insert(CardSet::new(
                        cards[i].clone(),
                        cards[j].clone(),
                        cards[k].clone(),
                    ));
                }
            }
        }
    }
    result
}
