use std::error::Error;
use std::fmt;

use crate::math::OperandKind;

/// Result alias used by every check in the crate.
pub type CheckResult<T> = Result<T, InvalidInput>;

/// Reason an input was rejected before any numeric work was done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The argument is not one of the array kinds the operation accepts.
    UnsupportedKind {
        operation: &'static str,
        kind: OperandKind,
    },
    Dimensionality {
        operand: &'static str,
        expected: usize,
        found: usize,
    },
    NotSquare {
        rows: usize,
        cols: usize,
    },
    /// Inner dimensions of a matrix-vector pair disagree.
    ShapeMismatch {
        operand: &'static str,
        expected: usize,
        found: usize,
    },
    /// Only raised when `CheckConfig::require_finite` is set.
    NonFinite {
        operand: &'static str,
    },
}

impl InvalidInput {
    pub(crate) fn logged(self, operation: &str) -> Self {
        log::debug!("{}: rejecting input: {}", operation, self);
        self
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::UnsupportedKind { operation, kind } => {
                write!(f, "{} does not accept a {}", operation, kind)
            }
            InvalidInput::Dimensionality {
                operand,
                expected,
                found,
            } => write!(
                f,
                "{} must be {}-dimensional, got {} dimensions",
                operand, expected, found
            ),
            InvalidInput::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got shape ({}, {})", rows, cols)
            }
            InvalidInput::ShapeMismatch {
                operand,
                expected,
                found,
            } => write!(
                f,
                "{} has length {} but the matrix requires {}",
                operand, found, expected
            ),
            InvalidInput::NonFinite { operand } => {
                write!(f, "{} contains NaN or infinite entries", operand)
            }
        }
    }
}

impl Error for InvalidInput {}
