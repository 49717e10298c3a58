//! Input deck loading
//!
//! The input is a small text file:
//! - first line: `dimensionCount,valueRangeSize`
//! - every following line: one card, as comma-separated integer values
//!
//! Blank lines are skipped and whitespace around values is ignored. This
//! module only checks that the file is well formed text; whether each card
//! has the right length and in-range values is checked when the cards are
//! built by `solver::solve`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::card::CardSet;
use crate::error::SolverError;
use crate::solver::solve;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    #[display("cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[display("input is empty: expected a 'dimensions,values' header line")]
    MissingHeader,
    #[display("line {line}: expected 'dimensions,values', found '{text}'")]
    BadHeader { line: usize, text: String },
    #[display("line {line}: '{token}' is not a non-negative integer")]
    BadNumber { line: usize, token: String },
    #[display("{_0}")]
    #[from]
    Solver(#[error(source)] SolverError),
}

/// Header values plus the raw card records of a deck file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeck {
    pub dimension_count: usize,
    pub values_size: usize,
    pub records: Vec<Vec<usize>>,
}

impl RawDeck {
    /// Find every set of the deck
    pub fn solve(&self) -> Result<HashSet<CardSet>, InputError> {
        Ok(solve(&self.records, self.dimension_count, self.values_size)?)
    }
}

fn parse_values(line: usize, text: &str) -> Result<Vec<usize>, InputError> {
    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<usize>().map_err(|_| InputError::BadNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a deck from its text form
pub fn parse_deck(text: &str) -> Result<RawDeck, InputError> {
    // (1-based line number, content) of non-blank lines
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(InputError::MissingHeader)?;
    let bad_header = || InputError::BadHeader {
        line: header_line,
        text: header.to_string(),
    };
    let (dimension_count, values_size) = match parse_values(header_line, header) {
        Ok(values) if values.len() == 2 => (values[0], values[1]),
        _ => return Err(bad_header()),
    };

    let records = lines
        .map(|(line, content)| parse_values(line, content))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawDeck {
        dimension_count,
        values_size,
        records,
    })
}

/// Read and parse a deck file
pub fn load_deck(path: &Path) -> Result<RawDeck, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_deck(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    fn make_test_dir(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("set_solver_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).expect("create temp dir");
        p
    }

    #[test]
    fn test_parse_deck() {
        let deck = parse_deck("2,3\n0,0\n0, 1\n\n 0,2 \n").unwrap();
        assert_eq!(deck.dimension_count, 2);
        assert_eq!(deck.values_size, 3);
        assert_eq!(deck.records, vec![vec![0, 0], vec![0, 1], vec![0, 2]]);
        assert_eq!(deck.solve().unwrap().len(), 1);
    }

    #[test]
    fn test_header_only() {
        let deck = parse_deck("4,3\n").unwrap();
        assert!(deck.records.is_empty());
        assert!(deck.solve().unwrap().is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(parse_deck(""), Err(InputError::MissingHeader)));
        assert!(matches!(parse_deck("\n  \n"), Err(InputError::MissingHeader)));
    }

    #[test]
    fn test_bad_header() {
        match parse_deck("\n4\n0,0,0,0") {
            Err(InputError::BadHeader { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "4");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(parse_deck("a,3\n"), Err(InputError::BadHeader { .. })));
    }

    #[test]
    fn test_bad_number() {
        match parse_deck("2,3\n0,1\n0,-1\n") {
            Err(InputError::BadNumber { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "-1");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_card_is_reported_by_solve() {
        let deck = parse_deck("2,3\n0,1\n0,1,2\n").unwrap();
        match deck.solve() {
            Err(InputError::Solver(SolverError::MalformedCard { record, source })) => {
                assert_eq!(record, 2);
                assert_eq!(source, CardError::WrongLength { expected: 2, actual: 3 });
            }
            other => panic!("unexpected result: {other:?}"),
        }
        let deck = parse_deck("0,3\n").unwrap();
        assert!(matches!(
            deck.solve(),
            Err(InputError::Solver(SolverError::NoDimensions { .. }))
        ));
    }

    #[test]
    fn test_load_deck_from_file() {
        let dir = make_test_dir("load");
        let path = dir.join("deck.txt");
        fs::write(&path, "1,3\n0\n0\n0\n").expect("write deck");

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.records.len(), 3);
        assert_eq!(deck.solve().unwrap().len(), 1);

        let missing = dir.join("missing.txt");
        assert!(matches!(load_deck(&missing), Err(InputError::Io { .. })));

        let _ = fs::remove_dir_all(&dir);
    }
}
