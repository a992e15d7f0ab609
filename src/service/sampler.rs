//! Unique suffix sampling.
//!
//! Draws distinct integers from `[0, universe_size)` without replacement using a
//! partial Fisher-Yates shuffle over a virtual array. Only the slots that have
//! been swapped are materialized, so time and space stay proportional to the
//! requested count, not the universe size.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{AppError, Result};

/// Seeded sampler of distinct suffix values.
///
/// Output is a pure function of `(seed, universe_size, count)` for a given
/// build of the crate. Reproducibility across `rand` versions is not promised.
#[derive(Debug, Clone, Copy)]
pub struct UniqueSuffixSampler {
    seed: u64,
}

impl UniqueSuffixSampler {
    /// Create a sampler for a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `count` distinct integers from `[0, universe_size)`.
    ///
    /// Values are returned in draw order.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if `count > universe_size`. The check happens
    /// before anything is allocated.
    pub fn sample(&self, universe_size: u64, count: usize) -> Result<Vec<u64>> {
        let requested = count as u64;
        if requested > universe_size {
            return Err(AppError::CapacityExceeded {
                requested,
                available: universe_size,
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        // Slot -> value for every slot of the virtual array that no longer holds
        // its own index. Slots below the cursor are removed once consumed.
        let mut displaced: HashMap<u64, u64> = HashMap::with_capacity(count);
        let mut picked = Vec::with_capacity(count);

        for cursor in 0..requested {
            let slot = rng.random_range(cursor..universe_size);
            let at_slot = displaced.get(&slot).copied().unwrap_or(slot);
            let at_cursor = displaced.remove(&cursor).unwrap_or(cursor);
            if slot != cursor {
                displaced.insert(slot, at_cursor);
            }
            picked.push(at_slot);
        }

        debug!(
            seed = self.seed,
            universe_size,
            count,
            displaced = displaced.len(),
            "Sampled unique suffixes"
        );

        Ok(picked)
    }
}

/// Draw `count` distinct integers from `[0, universe_size)` with `seed`.
///
/// # Errors
///
/// Returns `CapacityExceeded` if `count > universe_size`.
pub fn sample(universe_size: u64, count: usize, seed: u64) -> Result<Vec<u64>> {
    UniqueSuffixSampler::new(seed).sample(universe_size, count)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_is_distinct_and_in_range() {
        let values = sample(100_000_000, 3000, 42).unwrap();
        assert_eq!(values.len(), 3000);

        let unique: HashSet<_> = values.iter().copied().collect();
        assert_eq!(unique.len(), 3000);
        assert!(values.iter().all(|&v| v < 100_000_000));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let first = sample(1_000_000, 500, 7).unwrap();
        let second = sample(1_000_000, 500, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = sample(100_000_000, 100, 1).unwrap();
        let b = sample(100_000_000, 100, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_full_universe_is_a_permutation() {
        let mut values = sample(1000, 1000, 42).unwrap();
        values.sort_unstable();
        assert_eq!(values, (0..1000).collect::<Vec<u64>>());
    }

    #[test]
    fn test_small_universes() {
        for universe_size in 1..=20u64 {
            for count in 0..=universe_size as usize {
                let values = sample(universe_size, count, universe_size).unwrap();
                let unique: HashSet<_> = values.iter().copied().collect();
                assert_eq!(values.len(), count);
                assert_eq!(unique.len(), count);
                assert!(values.iter().all(|&v| v < universe_size));
            }
        }
    }

    #[test]
    fn test_single_element_universe() {
        assert_eq!(sample(1, 1, 42).unwrap(), vec![0]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(sample(100, 0, 42).unwrap().is_empty());
        assert!(sample(0, 0, 42).unwrap().is_empty());
    }

    #[test]
    fn test_capacity_exceeded() {
        let err = sample(10, 3000, 42).unwrap_err();
        match err {
            AppError::CapacityExceeded {
                requested,
                available,
            } => {
                assert_eq!(requested, 3000);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_capacity_check_runs_before_allocation() {
        // An allocation of usize::MAX elements would abort the test process.
        assert!(matches!(
            sample(10, usize::MAX, 42),
            Err(AppError::CapacityExceeded { .. })
        ));
    }
}
