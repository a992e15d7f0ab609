//! Generator configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::{MAX_SUFFIX_LENGTH, Universe};

/// Number generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Leading digits shared by every number.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Total number of digits per number, prefix included.
    #[serde(default = "default_total_length")]
    pub total_length: u32,

    /// How many numbers to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Random seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_prefix() -> String {
    "019".to_string()
}

const fn default_total_length() -> u32 {
    11
}

const fn default_count() -> usize {
    3000
}

const fn default_seed() -> u64 {
    42
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            total_length: default_total_length(),
            count: default_count(),
            seed: default_seed(),
        }
    }
}

impl GeneratorConfig {
    /// Number of digits after the prefix.
    ///
    /// Zero when the prefix is as long as or longer than the whole number.
    #[must_use]
    pub fn suffix_length(&self) -> u32 {
        u32::try_from(self.prefix.len())
            .map_or(0, |prefix_len| self.total_length.saturating_sub(prefix_len))
    }

    /// The suffix universe derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the suffix length is out of range.
    pub fn universe(&self) -> crate::error::Result<Universe> {
        Universe::new(self.suffix_length())
    }

    /// Validate the generator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not a digit string or leaves no room
    /// for a suffix that fits in 64 bits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() || !self.prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Message(format!(
                "generator.prefix must be numeric, got: {:?}",
                self.prefix
            )));
        }

        if self.prefix.len() >= self.total_length as usize {
            return Err(ConfigError::Message(format!(
                "generator.prefix length ({}) must be less than generator.total_length ({})",
                self.prefix.len(),
                self.total_length
            )));
        }

        if self.suffix_length() > MAX_SUFFIX_LENGTH {
            return Err(ConfigError::Message(format!(
                "generator suffix length must be at most {MAX_SUFFIX_LENGTH}, got {}",
                self.suffix_length()
            )));
        }

        Ok(())
    }
}
