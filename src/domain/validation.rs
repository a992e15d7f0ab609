//! Validation outcome types.

use serde::Serialize;

use crate::error::{AppError, Result};

/// A single violated post-condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Result size differs from the requested count.
    CountMismatch {
        /// Requested count.
        expected: usize,
        /// Actual count.
        actual: usize,
    },
    /// Numbers not starting with the expected prefix.
    WrongPrefix {
        /// Number of offending elements.
        count: usize,
    },
    /// Numbers whose length differs from the expected length.
    WrongLength {
        /// Number of offending elements.
        count: usize,
    },
    /// Numbers containing a non-digit character.
    NonNumeric {
        /// Number of offending elements.
        count: usize,
    },
    /// Elements appearing more than once.
    Duplicates {
        /// Number of surplus copies.
        count: usize,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { expected, actual } => {
                write!(f, "expected {expected} numbers, got {actual}")
            }
            Self::WrongPrefix { count } => write!(f, "incorrect prefix in {count} number(s)"),
            Self::WrongLength { count } => write!(f, "incorrect length in {count} number(s)"),
            Self::NonNumeric { count } => {
                write!(f, "non-numeric characters in {count} number(s)")
            }
            Self::Duplicates { count } => write!(f, "found {count} duplicate(s)"),
        }
    }
}

/// Metrics and violations collected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Number of elements checked.
    pub total_count: usize,
    /// Number of distinct elements.
    pub unique_count: usize,
    /// `total_count - unique_count`.
    pub duplicates_found: usize,
    /// Elements starting with the expected prefix.
    pub correct_prefix: usize,
    /// Elements with the expected length.
    pub correct_length: usize,
    /// Elements made only of ASCII digits.
    pub all_numeric: usize,
    /// Every violated check, in check order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Whether every check passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Turn a failed report into `ValidationFailure`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` carrying every violation when any check failed.
    pub fn ensure_passed(self) -> Result<Self> {
        if self.is_passed() {
            Ok(self)
        } else {
            Err(AppError::ValidationFailure(self.violations))
        }
    }
}
