//! Thread-safe handle around a [`BloomFilter`]

use super::{BloomFilter, FilterConfig};
use crate::{Element, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-protected Bloom filter
///
/// One writer at a time; checks run concurrently and always observe
/// complete additions.
#[derive(Debug, Clone)]
pub struct SharedBloomFilter {
    inner: Arc<RwLock<BloomFilter>>,
}

impl SharedBloomFilter {
    /// Wrap an existing filter
    pub fn new(filter: BloomFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    /// Create an empty shared filter from a configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        Ok(Self::new(BloomFilter::with_config(config)?))
    }

    /// Add an element
    pub fn add<E: Element + ?Sized>(&self, element: &E) -> Result<()> {
        // encode and hash outside the lock
        let indices = self.inner.read().indices(element)?;
        let mut filter = self.inner.write();
        filter.set_indices(&indices);
        Ok(())
    }

    /// Check whether an element may have been added
    pub fn check<E: Element + ?Sized>(&self, element: &E) -> Result<bool> {
        self.inner.read().check(element)
    }

    /// Geometry of the wrapped filter
    pub fn config(&self) -> FilterConfig {
        self.inner.read().config()
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.inner.read().count_ones()
    }

    /// Copy of the current filter state
    pub fn snapshot(&self) -> BloomFilter {
        self.inner.read().clone()
    }
}

impl From<BloomFilter> for SharedBloomFilter {
    fn from(filter: BloomFilter) -> Self {
        Self::new(filter)
    }
}
