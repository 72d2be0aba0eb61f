//! Reference memory oracle for cache/interconnect verification.
//!
//! This crate implements the ground-truth memory model a hardware simulation
//! harness checks observed bus transactions against. It provides the following:
//! 1. **Raw Image:** The flat word-addressed memory the simulated core executes against.
//! 2. **Consistency Model:** Uncached (immediate) and cached (pending-history) stores.
//! 3. **Checks:** Tolerant instruction-fetch and strict data-read reconciliation.
//! 4. **Verdicts:** Pass/fail results with candidate-value sets for diagnostics.
//! 5. **Configuration:** Validated memory geometry, deserializable from JSON.
//!
//! The oracle is single-threaded and synchronous: hosts integrating it with a
//! multithreaded simulator must serialize all calls.

/// Common types and constants (addresses, block shapes, strobes, errors).
pub mod common;
/// Oracle configuration (defaults, validation, JSON deserialization).
pub mod config;
/// Raw backing memory image.
pub mod mem;
/// Consistency-checking engine (queues, checks, verdicts).
pub mod oracle;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main oracle type; holds the image, both stores, and the region boundary.
pub use crate::oracle::Oracle;
