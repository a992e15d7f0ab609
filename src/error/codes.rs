//! Process exit codes.
//!
//! Codes are organized by the category of the failure:
//! - 0: Success
//! - 2: Configuration errors
//! - 3-4: Generation errors (capacity, overflow)
//! - 5: Post-generation validation errors
//! - 6-7: Output/system errors (file, report)

/// Exit code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(u8);

impl ExitCode {
    /// Run completed and the output file was written.
    pub const SUCCESS: Self = Self(0);

    // ===== Configuration Errors =====

    /// Invalid configuration parameters.
    pub const INVALID_CONFIG: Self = Self(2);

    // ===== Generation Errors =====

    /// Requested count exceeds the number of available suffixes.
    pub const CAPACITY_EXCEEDED: Self = Self(3);

    /// Suffix value does not fit the configured suffix width.
    pub const OVERFLOW: Self = Self(4);

    // ===== Validation Errors =====

    /// Generated numbers violate a post-condition.
    pub const VALIDATION_FAILURE: Self = Self(5);

    // ===== Output/System Errors =====

    /// Output file could not be created or written.
    pub const IO_FAILURE: Self = Self(6);

    /// End-of-run report could not be rendered.
    pub const REPORT_FAILURE: Self = Self(7);

    /// Get the exit code as a u8.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the category of this exit code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            0 => ErrorCategory::None,
            2 => ErrorCategory::Configuration,
            3 | 4 => ErrorCategory::Generation,
            5 => ErrorCategory::Validation,
            6 | 7 => ErrorCategory::Output,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.0)
    }
}

/// Error category based on exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No error.
    None,
    /// Configuration-related errors.
    Configuration,
    /// Sampling and formatting errors.
    Generation,
    /// Post-generation validation errors.
    Validation,
    /// File system errors.
    Output,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Configuration => write!(f, "configuration"),
            Self::Generation => write!(f, "generation"),
            Self::Validation => write!(f, "validation"),
            Self::Output => write!(f, "output"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::SUCCESS.as_u8(), 0);
        assert_eq!(ExitCode::INVALID_CONFIG.as_u8(), 2);
        assert_eq!(ExitCode::CAPACITY_EXCEEDED.as_u8(), 3);
        assert_eq!(ExitCode::VALIDATION_FAILURE.as_u8(), 5);
        assert_eq!(ExitCode::IO_FAILURE.as_u8(), 6);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ExitCode::SUCCESS.category(), ErrorCategory::None);
        assert_eq!(
            ExitCode::INVALID_CONFIG.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(ExitCode::OVERFLOW.category(), ErrorCategory::Generation);
        assert_eq!(
            ExitCode::VALIDATION_FAILURE.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ExitCode::IO_FAILURE.category(), ErrorCategory::Output);
        assert_eq!(ExitCode::REPORT_FAILURE.category(), ErrorCategory::Output);
    }
}
