//! Byte and Word Address types.
//!
//! This module defines strong types for the two address flavors the oracle
//! accepts, preventing accidental mixing of the two. It provides:
//! 1. **Type Safety:** Distinguishes byte-granular bus addresses from word-granular
//!    image addresses at compile time.
//! 2. **Index Arithmetic:** Modulo-wrapped word and fetch-block index computation.
//! 3. **Region Dispatch:** The uncached/cached partition test.

use super::constants::{BLOCK_BYTES, BLOCK_WORDS, WORD_BYTES};

/// A byte-granular address as observed on the bus.
///
/// Byte addresses are used by the consistency entry points (`ircheck`,
/// `drcheck`, `dwrite`). They wrap modulo the configured memory size, so
/// every value is a valid address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteAddr(pub u32);

/// A word-granular address into the raw backing image.
///
/// Word addresses are used by the raw image entry points (`pmem_read`,
/// `pmem_write`), which index words directly rather than bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordAddr(pub u32);

impl ByteAddr {
    /// Creates a new byte address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// A new `ByteAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }

    /// Returns the index of the addressed word, wrapped modulo `num_words`.
    ///
    /// # Arguments
    ///
    /// * `num_words` - Total number of words in the memory.
    ///
    /// # Returns
    ///
    /// A word index in `0..num_words`.
    #[inline]
    pub fn word_index(&self, num_words: usize) -> usize {
        (self.0 as usize / WORD_BYTES) % num_words
    }

    /// Returns the base word index of the enclosing fetch block.
    ///
    /// The address is rounded down to a 16-byte block before indexing, so
    /// the result is always a multiple of the block word count. When
    /// `num_words` is itself a multiple of the block word count (enforced
    /// by configuration validation), the whole block `base..base + 4` stays
    /// in bounds.
    ///
    /// # Arguments
    ///
    /// * `num_words` - Total number of words in the memory.
    ///
    /// # Returns
    ///
    /// The word index of the first word of the fetch block.
    #[inline]
    pub fn block_word_index(&self, num_words: usize) -> usize {
        (self.0 as usize / BLOCK_BYTES) * BLOCK_WORDS % num_words
    }

    /// Returns `true` when the address falls in the uncached region.
    ///
    /// # Arguments
    ///
    /// * `boundary` - First byte address of the cached region.
    #[inline]
    pub fn is_uncached(&self, boundary: u32) -> bool {
        self.0 < boundary
    }
}

impl WordAddr {
    /// Creates a new word address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit word address value.
    ///
    /// # Returns
    ///
    /// A new `WordAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit word address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }

    /// Returns the addressed word index, wrapped modulo `num_words`.
    ///
    /// # Arguments
    ///
    /// * `num_words` - Total number of words in the memory.
    ///
    /// # Returns
    ///
    /// A word index in `0..num_words`.
    #[inline]
    pub fn index(&self, num_words: usize) -> usize {
        self.0 as usize % num_words
    }
}
