//! Configuration Error definitions.
//!
//! This module defines the oracle's only fallible surface. It provides:
//! 1. **Validation Errors:** Rejected memory geometries, raised at construction.
//! 2. **Error Trait Integration:** `std::error::Error` via `thiserror` for
//!    host-side reporting.
//!
//! Check mismatches are deliberately *not* errors: a failed comparison is the
//! result the oracle exists to produce and is reported as a verdict instead.

use thiserror::Error;

/// Errors raised when validating an oracle configuration.
///
/// Both the memory size and the uncached boundary must be multiples of the
/// 16-byte fetch block so that a fetch block never straddles the region
/// boundary and block-base index arithmetic never leaves the word arrays.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured memory size is zero.
    #[error("memory size must be non-zero")]
    ZeroMemSize,

    /// The configured memory size is not a whole number of fetch blocks.
    #[error("memory size {0:#x} is not a multiple of the 16-byte fetch block")]
    UnalignedMemSize(usize),

    /// The uncached region boundary is not fetch-block aligned.
    #[error("uncached boundary {0:#x} is not a multiple of the 16-byte fetch block")]
    UnalignedBoundary(u32),

    /// The uncached region boundary lies beyond the end of memory.
    #[error("uncached boundary {boundary:#x} exceeds memory size {mem_size:#x}")]
    BoundaryOutOfRange {
        /// First byte address of the cached region.
        boundary: u32,
        /// Total memory size in bytes.
        mem_size: usize,
    },
}
