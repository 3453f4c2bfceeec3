//! Packed, fixed-length bit storage

/// Fixed-length bit array packed eight bits per byte
///
/// Bit `i` lives in byte `i / 8` at offset `i % 8` (least significant bit
/// first). Bits can only be set, never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    bytes: Vec<u8>,
    len: usize,
}

impl BitArray {
    /// Create an all-zero bit array holding `len` bits
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0u8; (len + 7) / 8],
            len,
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array holds no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set a bit, returning whether it was previously unset
    #[inline]
    pub fn set(&mut self, bit: usize) -> bool {
        debug_assert!(bit < self.len, "bit {} out of range {}", bit, self.len);
        let byte = bit / 8;
        let mask = 1u8 << (bit % 8);
        let was_unset = self.bytes[byte] & mask == 0;
        self.bytes[byte] |= mask;
        was_unset
    }

    /// Read a bit
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        debug_assert!(bit < self.len, "bit {} out of range {}", bit, self.len);
        (self.bytes[bit / 8] >> (bit % 8)) & 1 == 1
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        // padding bits in the last byte are never set
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate over every bit in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |bit| self.get(bit))
    }
}
