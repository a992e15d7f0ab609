//! Phone number generation service.
//!
//! Composes sampling and formatting into the sorted result collection.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::GeneratorConfig;
use crate::domain::{PhoneNumber, Universe};
use crate::error::Result;
use crate::service::formatter::format_phone_number;
use crate::service::sampler::UniqueSuffixSampler;

/// Numbers produced by one run plus how long it took.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Sorted, pairwise distinct numbers.
    pub numbers: Vec<PhoneNumber>,
    /// Wall time spent sampling, formatting and sorting.
    pub elapsed: Duration,
}

/// Service for prefixed phone number generation.
pub struct PhoneNumberGenerator {
    /// Shared leading digits.
    prefix: String,
    /// Suffix universe.
    universe: Universe,
    /// Seeded sampler.
    sampler: UniqueSuffixSampler,
}

impl PhoneNumberGenerator {
    /// Create a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the suffix length derived from the
    /// configuration is out of range.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let universe = config.universe()?;
        let sampler = UniqueSuffixSampler::new(config.seed);

        info!(
            pattern = %universe.pattern(&config.prefix),
            combinations = universe.size(),
            seed = sampler.seed(),
            "Generator initialized"
        );

        Ok(Self {
            prefix: config.prefix.clone(),
            universe,
            sampler,
        })
    }

    /// The suffix universe.
    #[must_use]
    pub const fn universe(&self) -> Universe {
        self.universe
    }

    /// The shared prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Length of every generated number.
    #[must_use]
    pub fn number_length(&self) -> usize {
        self.prefix.len() + self.universe.suffix_length() as usize
    }

    /// Generate `count` unique numbers, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if `count` is larger than the universe, or
    /// `Overflow` if a sampled suffix does not fit the suffix width.
    pub fn generate(&self, count: usize) -> Result<Generated> {
        let started = Instant::now();
        info!(count, "Generating unique mobile numbers");

        let suffixes = self.sampler.sample(self.universe.size(), count)?;

        let mut numbers = suffixes
            .into_iter()
            .map(|suffix| {
                format_phone_number(suffix, self.universe.suffix_length(), &self.prefix)
            })
            .collect::<Result<Vec<_>>>()?;
        numbers.sort_unstable();

        let elapsed = started.elapsed();
        info!(
            count = numbers.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Generation completed"
        );

        Ok(Generated { numbers, elapsed })
    }
}
