//! Common utilities and types used throughout the memory oracle.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the oracle. It includes:
//! 1. **Address Types:** Strong types for byte-granular and word-granular addresses.
//! 2. **Constants:** Word geometry, fetch-block shape, and strobe widths.
//! 3. **Data Shapes:** Fetch blocks, strobe expansion, and write merging.
//! 4. **Error Handling:** Configuration validation errors.

/// Address type definitions (byte and word addresses).
pub mod addr;

/// Common constants used throughout the oracle.
pub mod constants;

/// Bus data shapes and strobe arithmetic.
pub mod data;

/// Configuration error types.
pub mod error;

pub use addr::{ByteAddr, WordAddr};
pub use constants::{BLOCK_BYTES, BLOCK_WORDS, WORD_BYTES};
pub use data::{BlockData, merge_word, strobe_mask};
pub use error::ConfigError;
