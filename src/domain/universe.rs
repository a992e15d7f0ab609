//! Suffix universe.

use serde::Serialize;

use crate::error::{AppError, Result};

/// Widest suffix whose universe still fits in a `u64` (10^19 < 2^64).
pub const MAX_SUFFIX_LENGTH: u32 = 19;

/// The range `[0, 10^suffix_length)` of possible suffix values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Universe {
    suffix_length: u32,
}

impl Universe {
    /// Create the universe for a suffix width.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the width is zero or wider than
    /// [`MAX_SUFFIX_LENGTH`].
    pub fn new(suffix_length: u32) -> Result<Self> {
        if suffix_length == 0 || suffix_length > MAX_SUFFIX_LENGTH {
            return Err(AppError::InvalidConfig(format!(
                "suffix length must be 1-{MAX_SUFFIX_LENGTH}, got {suffix_length}"
            )));
        }
        Ok(Self { suffix_length })
    }

    /// Width of every suffix in digits.
    #[must_use]
    pub const fn suffix_length(&self) -> u32 {
        self.suffix_length
    }

    /// Number of distinct suffixes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        10u64.pow(self.suffix_length)
    }

    /// Human-readable shape of numbers in this universe, e.g. `019XXXXXXXX`.
    #[must_use]
    pub fn pattern(&self, prefix: &str) -> String {
        format!("{prefix}{}", "X".repeat(self.suffix_length as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(Universe::new(1).unwrap().size(), 10);
        assert_eq!(Universe::new(8).unwrap().size(), 100_000_000);
        assert_eq!(
            Universe::new(MAX_SUFFIX_LENGTH).unwrap().size(),
            10_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_invalid_widths() {
        assert!(Universe::new(0).is_err());
        assert!(Universe::new(MAX_SUFFIX_LENGTH + 1).is_err());
    }

    #[test]
    fn test_pattern() {
        let universe = Universe::new(8).unwrap();
        assert_eq!(universe.pattern("019"), "019XXXXXXXX");
    }
}
