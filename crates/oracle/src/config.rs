//! Configuration system for the memory oracle.
//!
//! This module defines the configuration structures used to parameterize the
//! oracle. It provides:
//! 1. **Defaults:** Baseline memory geometry (total size, uncached boundary).
//! 2. **Structures:** The root `Config` and its `memory` section.
//! 3. **Validation:** Geometry checks that make every later operation total.
//!
//! Configuration is supplied via JSON from the simulation harness
//! (`Config::from_json`) or use `Config::default()` for standalone runs.

use serde::Deserialize;

use crate::common::constants::{BLOCK_BYTES, WORD_BYTES};
use crate::common::error::ConfigError;

/// Default configuration constants for the oracle.
///
/// These values define the baseline memory geometry when not explicitly
/// overridden by the harness configuration.
mod defaults {
    /// Total size of the modeled memory (1 MiB).
    ///
    /// All bus addresses wrap modulo this capacity; there are no faulting
    /// addresses.
    pub const MEM_SIZE: usize = 1024 * 1024;

    /// First byte address of the cached region (256 KiB).
    ///
    /// Addresses below this boundary are uncached (immediate consistency);
    /// addresses at or above it are cached (pending-value history).
    pub const UNCACHED_SIZE: u32 = 256 * 1024;
}

/// Memory geometry configuration.
///
/// Defines the total capacity of the modeled memory and the static
/// uncached/cached partition.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Total memory size in bytes
    #[serde(default = "MemoryConfig::default_mem_size")]
    pub mem_size: usize,

    /// First byte address of the cached region
    #[serde(default = "MemoryConfig::default_uncached_size")]
    pub uncached_size: u32,
}

impl MemoryConfig {
    /// Returns the default total memory size in bytes.
    fn default_mem_size() -> usize {
        defaults::MEM_SIZE
    }

    /// Returns the default uncached region size in bytes.
    fn default_uncached_size() -> u32 {
        defaults::UNCACHED_SIZE
    }

    /// Returns the number of 32-bit words in the configured memory.
    pub fn num_words(&self) -> usize {
        self.mem_size / WORD_BYTES
    }

    /// Validates the memory geometry.
    ///
    /// Both sizes must be multiples of the 16-byte fetch block and the
    /// uncached boundary must not exceed the memory size, so that fetch
    /// blocks never straddle the region boundary and index arithmetic
    /// stays in bounds.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a usable geometry, or the first violated constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mem_size == 0 {
            return Err(ConfigError::ZeroMemSize);
        }
        if self.mem_size % BLOCK_BYTES != 0 {
            return Err(ConfigError::UnalignedMemSize(self.mem_size));
        }
        if self.uncached_size as usize % BLOCK_BYTES != 0 {
            return Err(ConfigError::UnalignedBoundary(self.uncached_size));
        }
        if self.uncached_size as usize > self.mem_size {
            return Err(ConfigError::BoundaryOutOfRange {
                boundary: self.uncached_size,
                mem_size: self.mem_size,
            });
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    /// Creates a default memory configuration.
    ///
    /// Uses the baseline total size and uncached boundary from the
    /// `defaults` module.
    fn default() -> Self {
        Self {
            mem_size: defaults::MEM_SIZE,
            uncached_size: defaults::UNCACHED_SIZE,
        }
    }
}

/// Root configuration for the oracle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Memory geometry configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults, so `{}` is a complete
    /// configuration.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text supplied by the harness.
    ///
    /// # Returns
    ///
    /// The parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates all configuration sections.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.memory.validate()
    }
}
