//! Single-threaded Bloom filter

use super::{BitArray, FilterConfig, IndexHasher};
use crate::{Element, Result};
use std::fmt;
use tracing::{debug, trace};

/// Bloom filter over a fixed-size bit array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: BitArray,
    hasher: IndexHasher,
}

impl BloomFilter {
    /// Create an empty filter with `num_bits` bits and `num_hashes` rounds
    pub fn new(num_bits: usize, num_hashes: usize) -> Result<Self> {
        Self::with_config(FilterConfig::new(num_bits, num_hashes))
    }

    /// Create an empty filter from a configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        let (num_bits, num_hashes) = config.validate()?;
        debug!(
            num_bits = num_bits.get(),
            num_hashes = num_hashes.get(),
            "created bloom filter"
        );

        Ok(Self {
            bits: BitArray::new(num_bits.get()),
            hasher: IndexHasher::new(num_bits, num_hashes),
        })
    }

    /// Create an empty filter sized for `expected_items` at `fp_rate`
    pub fn with_capacity(expected_items: usize, fp_rate: f64) -> Result<Self> {
        Self::with_config(FilterConfig::for_capacity(expected_items, fp_rate)?)
    }

    /// Add an element to the filter
    pub fn add<E: Element + ?Sized>(&mut self, element: &E) -> Result<()> {
        // all indices are derived before any bit is set
        let indices = self.indices(element)?;
        self.set_indices(&indices);
        Ok(())
    }

    /// Add every element, or none if any element fails to encode
    pub fn add_all<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Element,
    {
        let mut pending = Vec::new();
        for element in elements {
            pending.extend(self.indices(&element)?);
        }
        self.set_indices(&pending);
        Ok(())
    }

    /// Set precomputed bit positions
    pub(crate) fn set_indices(&mut self, indices: &[usize]) {
        let mut newly_set = 0usize;
        for &index in indices {
            if self.bits.set(index) {
                newly_set += 1;
            }
        }
        trace!(newly_set, "added element");
    }

    /// Check whether an element may have been added
    ///
    /// `false` is definitive. `true` may be a false positive.
    pub fn check<E: Element + ?Sized>(&self, element: &E) -> Result<bool> {
        let bytes = element.encode()?;
        for index in self.hasher.indices(&bytes) {
            if !self.bits.get(index?) {
                trace!("element absent");
                return Ok(false);
            }
        }
        trace!("element possibly present");
        Ok(true)
    }

    /// Bit positions an element maps to, one per round
    pub fn indices<E: Element + ?Sized>(&self, element: &E) -> Result<Vec<usize>> {
        let bytes = element.encode()?;
        let indices = self.hasher.indices(&bytes).collect::<Result<Vec<_>>>()?;
        Ok(indices)
    }

    /// Number of bits (`m`)
    pub fn num_bits(&self) -> usize {
        self.hasher.num_bits()
    }

    /// Number of hash rounds (`k`)
    pub fn num_hashes(&self) -> usize {
        self.hasher.num_hashes()
    }

    /// Geometry of this filter
    pub fn config(&self) -> FilterConfig {
        FilterConfig::new(self.num_bits(), self.num_hashes())
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Check if nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Fraction of bits set
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.num_bits() as f64
    }

    /// Theoretical false positive rate after `num_items` distinct additions
    pub fn false_positive_rate(&self, num_items: usize) -> f64 {
        self.config().false_positive_rate(num_items)
    }

    /// False positive rate implied by the bits currently set
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.num_hashes() as i32)
    }

    /// Underlying bit array
    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Packed bit storage
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::with_config(FilterConfig::default()).expect("default geometry is non-zero")
    }
}

impl fmt::Display for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BloomFilter size: {}>", self.num_bits())
    }
}
