/// Multiplicity table of a deck: how many copies of each unique card are
/// still available during a solve
///
/// Reserving a copy hands out a `Reservation` guard. The guard gives access to
/// the table while it is held (so a second card can be reserved, and third
/// cards looked up, underneath it) and puts the count back when dropped,
/// whatever the exit path. `Reservation::consume` drops the card out of the
/// table for good instead.
///
/// At any time, a card's count plus its active reservations never exceeds the
/// number of copies found in the input.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::card::Card;

#[derive(Debug, Clone, Default)]
pub struct MultiplicityTable {
    counts: HashMap<Card, usize>,
}

impl MultiplicityTable {
    /// Count the copies of every card of `cards`
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Unique cards of the deck, sorted.
    ///
    /// The solver indexes into this list, so it is extracted once and kept
    /// for the whole run.
    pub fn unique_cards(&self) -> Vec<Card> {
        let mut unique: Vec<Card> = self.counts.keys().cloned().collect();
        unique.sort();
        unique
    }

    /// Copies currently available, 0 for unknown cards
    #[inline]
    pub fn count(&self, card: &Card) -> usize {
        self.counts.get(card).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_available(&self, card: &Card) -> bool {
        self.count(card) >= 1
    }

    /// Number of unique cards
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total copies currently available
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Take one copy of `card` if any is available.
    ///
    /// The count is restored to its current value when the returned guard
    /// is dropped.
    pub fn reserve(&mut self, card: &Card) -> Option<Reservation<'_>> {
        let restore_to = self.count(card);
        if restore_to == 0 {
            return None;
        }
        self.counts.insert(card.clone(), restore_to - 1);
        Some(Reservation {
            table: self,
            card: card.clone(),
            restore_to,
        })
    }
}

/// One copy of a card taken out of a `MultiplicityTable`
#[derive(Debug)]
pub struct Reservation<'a> {
    table: &'a mut MultiplicityTable,
    card: Card,
    restore_to: usize,
}

impl Reservation<'_> {
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Release the reservation with the card exhausted: its count drops to 0
    /// and it is never available again in this table.
    pub fn consume(mut self) {
        self.restore_to = 0;
    }
}

impl Deref for Reservation<'_> {
    type Target = MultiplicityTable;

    fn deref(&self) -> &MultiplicityTable {
        self.table
    }
}

impl DerefMut for Reservation<'_> {
    fn deref_mut(&mut self) -> &mut MultiplicityTable {
        self.table
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        self.table.counts.insert(self.card.clone(), self.restore_to);
    }
}
