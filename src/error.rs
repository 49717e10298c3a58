//! Error types shared by card construction and the solver entry point.

/// Reasons a raw value vector cannot become a `Card`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CardError {
    #[display("expected {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[display("value {value} in dimension {dimension} is outside [0, {values_size})")]
    ValueOutOfRange {
        dimension: usize,
        value: usize,
        values_size: usize,
    },
}

/// Errors reported by `solve` before any search happens.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    #[display("invalid configuration: dimension count must be at least 1 (got {dimension_count})")]
    NoDimensions { dimension_count: usize },
    #[display("invalid configuration: value range size must be at least 1 (got {values_size})")]
    EmptyValueRange { values_size: usize },
    #[display("malformed card #{record}: {source}")]
    MalformedCard { record: usize, source: CardError },
}
