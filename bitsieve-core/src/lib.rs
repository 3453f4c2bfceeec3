//! bitsieve Core - Fixed-Size Bloom Filter
//!
//! A probabilistic set-membership structure:
//! - No false negatives: every added element checks as present
//! - Tunable false positive rate through the bit count `m` and round count `k`
//! - Deterministic across processes: rounds are MurmurHash3 (x86, 32-bit)
//!   seeded with the round number
//!
//! # Architecture
//!
//! - **Element**: canonical byte encoding for everything that can be added
//! - **IndexHasher**: the single round-to-index routine shared by `add` and `check`
//! - **BitArray**: packed, set-only bit storage
//! - **BloomFilter**: the filter itself, plus `SharedBloomFilter` for
//!   concurrent use
//!
//! ```
//! use bitsieve_core::BloomFilter;
//!
//! let mut filter = BloomFilter::default();
//! filter.add("hello")?;
//! filter.add("world")?;
//! assert!(filter.check("hello")?);
//! assert!(!filter.check("hello world")?);
//! # Ok::<(), bitsieve_core::SieveError>(())
//! ```

pub mod element;
pub mod filter;

mod error;

pub use element::Element;
pub use error::{Result, SieveError};
pub use filter::{BitArray, BloomFilter, FilterConfig, IndexHasher, SharedBloomFilter};

/// bitsieve version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod config {
    /// Default number of bits (`m`)
    pub const DEFAULT_NUM_BITS: usize = 15;

    /// Default number of hash rounds (`k`)
    pub const DEFAULT_NUM_HASHES: usize = 3;

    /// Upper bound on rounds chosen by capacity sizing
    pub const MAX_NUM_HASHES: usize = 30;

    /// False positive rate used when only a capacity is given
    pub const DEFAULT_FP_RATE: f64 = 0.01;
}
