//! Raw backing memory for the simulated core.
//!
//! This module holds the flat, word-addressed memory image used by the
//! simulated core's instruction/data path emulation. The image is entirely
//! separate from the dual-region consistency model: it always reflects the
//! last raw write verbatim and carries no pending-value history.

/// Raw memory image implementation.
pub mod image;

pub use image::ImageBuffer;
