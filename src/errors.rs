use crate::intervals::Interval;

/// Errors reported by interval construction, parsing and set operations.
///
/// All operations either fully succeed or return one of these synchronously;
/// a pure value type has no transient failure modes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A multi-value source did not contain exactly two bounds.
    #[error("expected exactly 2 bounds, found {0}")]
    InvalidArity(usize),

    /// A textual interval did not match the grammar.
    #[error("cannot parse interval: {0}")]
    ParseError(String),

    /// A checked intersection or union was invoked on disjoint intervals.
    #[error("disjoint intervals {0} and {1} cannot be combined")]
    IncompatibleRange(Interval, Interval),

    /// The interval cannot be enumerated as consecutive integers.
    #[error("interval {0} does not have finite integer bounds")]
    NonIntegerBounds(Interval),
}
