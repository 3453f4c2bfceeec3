//! Bloom filter
//!
//! A fixed-size bit array probed by `k` seeded hash rounds:
//! - `add` sets the bit chosen by every round
//! - `check` reports membership only if every chosen bit is set
//!
//! Membership answers never produce false negatives. False positives grow
//! with the number of elements added relative to the filter size.

mod bitarray;
mod bloom;
mod hasher;
mod shared;

pub use bitarray::BitArray;
pub use bloom::BloomFilter;
pub use hasher::IndexHasher;
pub use shared::SharedBloomFilter;

use crate::config::{DEFAULT_NUM_BITS, DEFAULT_NUM_HASHES, MAX_NUM_HASHES};
use crate::{Result, SieveError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

/// Filter geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of bits in the array (`m`)
    pub num_bits: usize,
    /// Number of hash rounds per element (`k`)
    pub num_hashes: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_NUM_BITS,
            num_hashes: DEFAULT_NUM_HASHES,
        }
    }
}

impl FilterConfig {
    /// Create a configuration with explicit geometry
    pub fn new(num_bits: usize, num_hashes: usize) -> Self {
        Self {
            num_bits,
            num_hashes,
        }
    }

    /// Derive the geometry that keeps the false positive rate near `fp_rate`
    /// once `expected_items` elements have been added
    pub fn for_capacity(expected_items: usize, fp_rate: f64) -> Result<Self> {
        if expected_items == 0 {
            return Err(SieveError::InvalidParameter(
                "expected_items must be at least 1".into(),
            ));
        }
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(SieveError::InvalidParameter(format!(
                "fp_rate must be in (0, 1), got {}",
                fp_rate
            )));
        }

        let n = expected_items as f64;
        let ln2 = std::f64::consts::LN_2;
        let num_bits = (-n * fp_rate.ln() / (ln2 * ln2)).ceil().max(1.0) as usize;

        // Optimal number of hash functions
        let num_hashes = ((num_bits as f64 / n) * ln2).round() as usize;
        let num_hashes = num_hashes.clamp(1, MAX_NUM_HASHES);

        Ok(Self {
            num_bits,
            num_hashes,
        })
    }

    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Check that both dimensions are positive
    pub fn validate(&self) -> Result<(NonZeroUsize, NonZeroUsize)> {
        let num_bits = NonZeroUsize::new(self.num_bits).ok_or_else(|| {
            SieveError::InvalidParameter("num_bits must be at least 1".into())
        })?;
        let num_hashes = NonZeroUsize::new(self.num_hashes).ok_or_else(|| {
            SieveError::InvalidParameter("num_hashes must be at least 1".into())
        })?;
        if self.num_hashes > u32::MAX as usize {
            return Err(SieveError::InvalidParameter(format!(
                "num_hashes must fit a 32-bit seed, got {}",
                self.num_hashes
            )));
        }
        Ok((num_bits, num_hashes))
    }

    /// Theoretical false positive rate after `num_items` distinct additions
    pub fn false_positive_rate(&self, num_items: usize) -> f64 {
        let k = self.num_hashes as f64;
        let m = self.num_bits as f64;
        let n = num_items as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }
}
