//! Seeded MurmurHash3 index derivation
//!
//! Round `i` hashes the element's bytes with MurmurHash3 (x86, 32-bit) using
//! `i` as the seed and reduces the unsigned result modulo the filter size.
//! `add` and `check` both go through [`IndexHasher::indices`].

use crate::{Result, SieveError};
use std::num::NonZeroUsize;

/// Maps element bytes to `num_hashes` bit positions in `[0, num_bits)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHasher {
    num_bits: NonZeroUsize,
    num_hashes: NonZeroUsize,
}

impl IndexHasher {
    /// Create a hasher for a filter of `num_bits` bits and `num_hashes` rounds
    pub fn new(num_bits: NonZeroUsize, num_hashes: NonZeroUsize) -> Self {
        Self {
            num_bits,
            num_hashes,
        }
    }

    /// Number of bits indices are reduced into
    pub fn num_bits(&self) -> usize {
        self.num_bits.get()
    }

    /// Number of rounds
    pub fn num_hashes(&self) -> usize {
        self.num_hashes.get()
    }

    /// Raw unsigned hash of `bytes` for one round
    pub fn round_hash(bytes: &[u8], round: u32) -> Result<u32> {
        let mut reader = bytes;
        murmur3::murmur3_32(&mut reader, round).map_err(|e| {
            SieveError::InvalidInput(format!("failed to hash element: {}", e))
        })
    }

    /// Bit position for one round
    #[inline]
    pub fn index(&self, bytes: &[u8], round: u32) -> Result<usize> {
        let hash = Self::round_hash(bytes, round)?;
        Ok((hash as u64 % self.num_bits.get() as u64) as usize)
    }

    /// Bit positions for every round, in round order
    ///
    /// Positions may repeat when two rounds collide.
    pub fn indices<'a>(&'a self, bytes: &'a [u8]) -> impl Iterator<Item = Result<usize>> + 'a {
        (0..self.num_hashes.get()).map(move |round| self.index(bytes, round as u32))
    }
}
