//! Rendering of the discovered sets
//!
//! Sets are sorted first so that the output does not depend on hash order.

use std::collections::HashSet;

use serde::Serialize;

use crate::card::CardSet;
use crate::dimension::Dimensions;

#[derive(Serialize)]
struct SetsReport<'a> {
    dimensions: usize,
    values: usize,
    count: usize,
    sets: &'a [CardSet],
}

pub fn sorted_sets(sets: &HashSet<CardSet>) -> Vec<CardSet> {
    let mut sorted: Vec<CardSet> = sets.iter().cloned().collect();
    sorted.sort();
    sorted
}

/// One set per line: `(0,0) (0,1) (0,2)`
pub fn render_text(sets: &[CardSet]) -> String {
    let mut text = String::new();
    for set in sets {
        let [a, b, c] = set.cards();
        text.push_str(&format!("{a} {b} {c}\n"));
    }
    text
}

pub fn render_json(dims: &Dimensions, sets: &[CardSet]) -> serde_json::Result<String> {
    let report = SetsReport {
        dimensions: dims.len(),
        values: dims.values_size(),
        count: sets.len(),
        sets,
    };
    serde_json::to_string_pretty(&report)
}
