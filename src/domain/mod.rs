//! Domain models for the mobile number generator.
//!
//! This module contains the value types that flow through a generation run:
//! the suffix universe, formatted numbers and validation outcomes.

pub mod phone;
pub mod universe;
pub mod validation;

pub use phone::PhoneNumber;
pub use universe::{MAX_SUFFIX_LENGTH, Universe};
pub use validation::{ValidationReport, Violation};
