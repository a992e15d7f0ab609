//! # Mobile Number Generator
//!
//! Produces a reproducible set of unique mobile numbers sharing a fixed prefix
//! and exports them as a single-column spreadsheet:
//!
//! - **Sampling**: distinct suffixes drawn without replacement from `[0, 10^L)`
//! - **Formatting**: prefix followed by the zero-padded suffix
//! - **Validation**: count, prefix, length, digits and distinctness checked together
//! - **Export**: sorted numbers written as text cells to an `.xlsx` workbook
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌───────────┐   ┌──────────┐
//! │  Config  │ → │ Sampler  │ → │ Formatter │ → │ Validator │ → │  Export  │
//! │ (layers) │   │ (seeded) │   │ (+ sort)  │   │ (report)  │   │  (xlsx)  │
//! └──────────┘   └──────────┘   └───────────┘   └───────────┘   └──────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod service;

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::export::TableSink;
use crate::service::{GenerationReport, PhoneNumberGenerator, validate};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the table was written.
    pub output: PathBuf,
    /// Report describing the run.
    pub report: GenerationReport,
}

/// Run one generation pass and hand the result to `sink`.
///
/// This function:
/// 1. Derives the suffix universe from configuration
/// 2. Samples, formats and sorts the numbers
/// 3. Validates the result
/// 4. Writes the table through the sink
///
/// Nothing is written unless every step before export succeeded.
///
/// # Errors
///
/// Returns an error if:
/// - The requested count exceeds the available combinations
/// - A suffix does not fit the configured width
/// - The generated numbers fail validation
/// - The sink cannot write its output
pub fn run(config: &AppConfig, sink: &dyn TableSink) -> Result<RunSummary> {
    let generator = PhoneNumberGenerator::new(&config.generator)?;
    let generated = generator.generate(config.generator.count)?;

    let validation = validate(
        &generated.numbers,
        config.generator.count,
        generator.prefix(),
        generator.number_length(),
    );
    if !validation.is_passed() {
        error!(
            violations = validation.violations.len(),
            "Dataset validation failed"
        );
    }
    let validation = validation.ensure_passed()?;

    let output = sink.write_column(&config.output.column_name, &generated.numbers)?;

    let report = GenerationReport::new(
        generator.prefix(),
        generator.universe().pattern(generator.prefix()),
        config.generator.seed,
        &generated.numbers,
        generated.elapsed,
        validation,
    );

    info!(
        count = generated.numbers.len(),
        output = %output.display(),
        "Dataset generation completed"
    );

    Ok(RunSummary { output, report })
}

/// Initialize logging based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once keeps the first subscriber.
pub fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only the report.
    let result = if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
