//! Error types for attribute construction and matching

use thiserror::Error;

use crate::attribute::ComparisonKind;

/// Errors raised while building an [`Attribute`](crate::attribute::Attribute).
///
/// An attribute that fails any of these checks is never produced, so the
/// matching engine only ever sees legal kind/value pairings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// The comparison kind cannot be used with this kind of value
    #[error("{kind} comparison is not supported for {value} attributes")]
    UnsupportedKind {
        kind: ComparisonKind,
        value: &'static str,
    },

    /// A numeric component is NaN or infinite
    #[error("numeric value at position {position} is not finite: {found}")]
    NonFinite { position: usize, found: f64 },

    /// A vector attribute carries no components
    #[error("vector attribute has no components")]
    EmptyVector,

    /// Comparison kind text did not name a known kind
    #[error("unknown comparison kind: {0}")]
    UnknownComparisonKind(String),

    /// Numeric attributes must state how they are compared
    #[error("{0} attributes require an explicit comparison kind")]
    MissingKind(&'static str),
}

/// Errors raised while comparing attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A required attribute reached the dispatch with a pairing the
    /// constructors reject. Indicates a programming error, not a data condition.
    #[error("invariant violation: {kind} comparison on {value} value")]
    InvariantViolation {
        kind: ComparisonKind,
        value: &'static str,
    },
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;
