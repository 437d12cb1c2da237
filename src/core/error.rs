// src/core/error.rs

use std::fmt;

/// Errors raised by the number theory routines.
///
/// Degenerate inputs such as `factor(0)` are not errors; they follow the
/// empty-product convention instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    /// An operation received a value outside of its domain.
    InvalidArgument {
        operation: &'static str,
        value: i64,
    },
    /// A list of prime powers that does not describe a factorization of a `u64`.
    InvalidFactorization {
        reason: &'static str,
        prime: u64,
    },
}

impl NumberTheoryError {
    pub fn invalid_argument(operation: &'static str, value: i64) -> Self {
        NumberTheoryError::InvalidArgument { operation, value }
    }
}

impl fmt::Display for NumberTheoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberTheoryError::InvalidArgument { operation, value } => {
                write!(f, "{}: a positive integer is expected, got {}", operation, value)
            }
            NumberTheoryError::InvalidFactorization { reason, prime } => {
                write!(f, "invalid factorization at prime {}: {}", prime, reason)
            }
        }
    }
}

impl std::error::Error for NumberTheoryError {}
