//! Error types for neurogene_core.
//!
//! Every genetic and neural operation reports failures through [`GeneticsError`].
//! All of them are local programming errors: the receiver is left untouched.

use thiserror::Error;

/// Main error type for neurogene_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticsError {
    /// Gene count, or for two parents the gene count and range, does not match
    #[error("length mismatch: expected {expected} genes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A numeric argument lies outside its valid range
    #[error("range error: {0}")]
    Range(String),

    /// A gene slice exceeds the sequence
    #[error("index error: range {from}..{} exceeds {available} genes", .from + .length)]
    Index {
        from: usize,
        length: usize,
        available: usize,
    },

    /// Boundary arrays must have exactly two entries
    #[error("arity error: boundaries ({boundaries}) and active flags ({flags}) must both have length 2")]
    Arity { boundaries: usize, flags: usize },

    /// Malformed layer list
    #[error("topology error: {0}")]
    Topology(String),
}

/// Result type alias for neurogene_core operations.
pub type Result<T> = std::result::Result<T, GeneticsError>;

impl GeneticsError {
    /// Creates a new length mismatch error.
    #[must_use]
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    /// Creates a new range error.
    #[must_use]
    pub fn range<S: Into<String>>(msg: S) -> Self {
        Self::Range(msg.into())
    }

    /// Creates a new topology error.
    #[must_use]
    pub fn topology<S: Into<String>>(msg: S) -> Self {
        Self::Topology(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneticsError::length_mismatch(6, 5);
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 6 genes, found 5"
        );
    }

    #[test]
    fn test_index_error_display() {
        let err = GeneticsError::Index {
            from: 2,
            length: 3,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "index error: range 2..5 exceeds 4 genes"
        );
    }

    #[test]
    fn test_range_error_display() {
        let err = GeneticsError::range("probability 1.5 outside [0, 1]");
        assert!(err.to_string().contains("probability 1.5"));
    }
}
