//! Service layer module.
//!
//! Contains the generation pipeline: sampling, formatting, validation and reporting.

pub mod formatter;
pub mod generator;
pub mod report;
pub mod sampler;
pub mod validator;

pub use formatter::format_phone_number;
pub use generator::{Generated, PhoneNumberGenerator};
pub use report::GenerationReport;
pub use sampler::{UniqueSuffixSampler, sample};
pub use validator::validate;
