//! Error handling module.
//!
//! This module provides the unified error type for a generation run and its
//! mapping to process exit codes.

pub mod codes;

pub use codes::{ErrorCategory, ExitCode};

use crate::domain::Violation;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested count exceeds the number of distinct suffixes.
    #[error(
        "requested count exceeds available combinations: requested {requested}, available {available}"
    )]
    CapacityExceeded {
        /// Number of values asked for.
        requested: u64,
        /// Size of the universe.
        available: u64,
    },

    /// Suffix value wider than the configured suffix length.
    #[error("suffix {value} does not fit in {width} digits")]
    Overflow {
        /// Offending suffix value.
        value: u64,
        /// Configured suffix width.
        width: u32,
    },

    /// Generated data violates one or more post-conditions.
    #[error("validation failed: {}", join_violations(.0))]
    ValidationFailure(Vec<Violation>),

    /// Output file could not be created or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// End-of-run report could not be rendered.
    #[error("Report error: {0}")]
    Report(String),
}

impl AppError {
    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::CapacityExceeded { .. } => ExitCode::CAPACITY_EXCEEDED,
            Self::Overflow { .. } => ExitCode::OVERFLOW,
            Self::ValidationFailure(_) => ExitCode::VALIDATION_FAILURE,
            Self::Io(_) => ExitCode::IO_FAILURE,
            Self::InvalidConfig(_) => ExitCode::INVALID_CONFIG,
            Self::Report(_) => ExitCode::REPORT_FAILURE,
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
