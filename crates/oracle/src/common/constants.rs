//! Global Oracle Constants.
//!
//! This module defines system-wide constants used across the oracle. It includes:
//! 1. **Word Geometry:** The bus word size and the fetch block shape.
//! 2. **Strobe Constants:** Byte-lane count and per-lane masking.

/// Size of a bus word in bytes (32-bit data bus).
pub const WORD_BYTES: usize = 4;

/// Number of words in an instruction-fetch block.
pub const BLOCK_WORDS: usize = 4;

/// Size of an instruction-fetch block in bytes (16-byte aligned fetches).
pub const BLOCK_BYTES: usize = WORD_BYTES * BLOCK_WORDS;

/// Number of byte lanes covered by a write strobe.
pub const STROBE_LANES: usize = 4;

/// Mask of a single byte lane within a word.
pub const LANE_MASK: u32 = 0xFF;
