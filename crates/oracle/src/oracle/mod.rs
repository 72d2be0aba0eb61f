//! Reference Memory Oracle.
//!
//! This module implements the consistency-checking engine used to validate a
//! cache/interconnect implementation against ground-truth memory. It tracks,
//! per memory word, a bounded history of values a correctly-behaving cache
//! may still legitimately return, and reconciles observed reads against that
//! history with two strictness policies:
//! 1. **Instruction Fetch (`ircheck`):** Tolerant, per-word matching against
//!    any unretired value, with permanent retirement of older entries once a
//!    newer value is observed.
//! 2. **Data Access (`drcheck`):** Strict matching against the newest value
//!    only, under a byte-lane mask.
//! 3. **Write Commit (`dwrite`):** Strobe-merged updates that grow the
//!    pending history of cached words.
//! 4. **Raw Image (`pmem_read`/`pmem_write`):** The flat memory the simulated
//!    core executes against, independent of the consistency model.

/// Per-word pending-value queue implementation.
pub mod queue;

/// Pass/fail verdicts with candidate-value sets.
pub mod verdict;

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::common::addr::{ByteAddr, WordAddr};
use crate::common::constants::BLOCK_WORDS;
use crate::common::data::{BlockData, merge_word, strobe_mask};
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::mem::ImageBuffer;

pub use queue::PendingQueue;
pub use verdict::{DataVerdict, FetchVerdict, Verdict};

/// The reference memory oracle.
///
/// Holds three cooperating views of the same address space:
/// - the raw backing **image** the simulated core executes against,
/// - the **uncached** store, one word per index, with immediate consistency,
/// - the **cached** store, one pending-value queue per index, tolerating
///   bounded staleness for instruction fetches.
///
/// All three views are seeded at construction with each word's own index,
/// giving a deterministic, reproducible baseline for comparison. Every
/// operation is total: addresses wrap modulo the word count and strobes are
/// masked to their four defined lanes.
pub struct Oracle {
    image: ImageBuffer,
    uncached: Vec<u32>,
    cached: Vec<PendingQueue>,
    num_words: usize,
    uncached_boundary: u32,
}

impl Oracle {
    /// Creates an oracle from a validated configuration.
    ///
    /// Seeds every word of the image, the uncached store, and each pending
    /// queue with the word's own index.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory geometry; validated before any allocation.
    ///
    /// # Returns
    ///
    /// A freshly seeded oracle.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the geometry is rejected by
    /// [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let num_words = config.memory.num_words();
        let image = ImageBuffer::new(num_words);
        let mut uncached = Vec::with_capacity(num_words);
        let mut cached = Vec::with_capacity(num_words);
        for index in 0..num_words {
            let seed = index as u32;
            image.write_word(index, seed);
            uncached.push(seed);
            cached.push(PendingQueue::seeded(seed));
        }

        Ok(Self {
            image,
            uncached,
            cached,
            num_words,
            uncached_boundary: config.memory.uncached_size,
        })
    }

    /// Returns the total number of words in the modeled memory.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Returns the first byte address of the cached region.
    pub fn uncached_boundary(&self) -> u32 {
        self.uncached_boundary
    }

    /// Returns the current value of an uncached store word.
    ///
    /// # Arguments
    ///
    /// * `index` - Word index, wrapped modulo the word count.
    pub fn uncached_word(&self, index: usize) -> u32 {
        self.uncached[index % self.num_words]
    }

    /// Returns the pending-value queue of a cached store word.
    ///
    /// # Arguments
    ///
    /// * `index` - Word index, wrapped modulo the word count.
    pub fn pending(&self, index: usize) -> &PendingQueue {
        &self.cached[index % self.num_words]
    }

    /// Reads a word from the raw backing image.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address, wrapped modulo the word count.
    ///
    /// # Returns
    ///
    /// The word last written at that index (or its seed).
    pub fn pmem_read(&self, addr: WordAddr) -> u32 {
        self.image.read_word(addr.index(self.num_words))
    }

    /// Writes a word to the raw backing image under a byte-lane strobe.
    ///
    /// Selected bytes come from `data`; unselected bytes keep the previous
    /// word's value. The image has no interaction with the pending-value
    /// queues.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address, wrapped modulo the word count.
    /// * `data` - Incoming write data.
    /// * `strobe` - Per-byte-lane write-enable bits.
    pub fn pmem_write(&mut self, addr: WordAddr, data: u32, strobe: u8) {
        let index = addr.index(self.num_words);
        let merged = merge_word(self.image.read_word(index), data, strobe);
        self.image.write_word(index, merged);
    }

    /// Checks an observed instruction fetch against the oracle.
    ///
    /// The address is rounded down to its 16-byte, 4-word block. Uncached
    /// blocks must match the stored words exactly; a single mismatch yields
    /// one candidate tuple holding the four current stored values. Cached
    /// blocks reconcile each word position independently against its pending
    /// history, retiring entries older than the first match. On failure the
    /// candidate set is the cartesian product of the four per-position
    /// candidate sets: every plausible block the implementation could have
    /// correctly returned, not just the failing positions.
    ///
    /// Whichever entries were skipped over during a successful match remain
    /// retired: observing a newer value permanently discards older history.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address anywhere inside the fetched block.
    /// * `observed` - The 4-word block the implementation returned.
    ///
    /// # Returns
    ///
    /// A [`FetchVerdict`]; candidates are populated only on failure.
    ///
    /// # Panics
    ///
    /// This function will not panic. Indexing is guaranteed safe because the
    /// block base index is a multiple of 4 below `num_words`, and validation
    /// keeps `num_words` a multiple of the block word count.
    pub fn ircheck(&mut self, addr: ByteAddr, observed: BlockData) -> FetchVerdict {
        let base = addr.block_word_index(self.num_words);

        if addr.is_uncached(self.uncached_boundary) {
            for (offset, &word) in observed.iter().enumerate() {
                if self.uncached[base + offset] != word {
                    let expected = [
                        self.uncached[base],
                        self.uncached[base + 1],
                        self.uncached[base + 2],
                        self.uncached[base + 3],
                    ];
                    debug!(addr = addr.val(), "uncached fetch mismatch");
                    let mut candidates = BTreeSet::new();
                    let _ = candidates.insert(expected);
                    return FetchVerdict::fail(candidates);
                }
            }
            return FetchVerdict::pass();
        }

        let mut position: [BTreeSet<u32>; BLOCK_WORDS] = Default::default();
        let mut pass = true;
        for offset in 0..BLOCK_WORDS {
            // Every position reconciles (and retires) even after an earlier
            // mismatch, so each contributes its full candidate set.
            if !self.cached[base + offset].reconcile(observed[offset], &mut position[offset]) {
                pass = false;
            }
        }

        if pass {
            return FetchVerdict::pass();
        }

        let mut candidates = BTreeSet::new();
        for &a in &position[0] {
            for &b in &position[1] {
                for &c in &position[2] {
                    for &d in &position[3] {
                        let _ = candidates.insert([a, b, c, d]);
                    }
                }
            }
        }
        debug!(
            addr = addr.val(),
            count = candidates.len(),
            "fetch mismatch against pending history"
        );
        FetchVerdict::fail(candidates)
    }

    /// Checks an observed data read against the oracle.
    ///
    /// Strict, newest-only policy: uncached addresses compare the masked
    /// stored word, cached addresses compare only the masked newest entry of
    /// the pending history, never older entries. On mismatch the single
    /// stored word is the candidate.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the accessed word.
    /// * `strobe` - Byte lanes the read actually consumed.
    /// * `observed` - The word the implementation returned.
    ///
    /// # Returns
    ///
    /// A [`DataVerdict`]; the candidate is populated only on failure.
    pub fn drcheck(&self, addr: ByteAddr, strobe: u8, observed: u32) -> DataVerdict {
        let index = addr.word_index(self.num_words);
        let mask = strobe_mask(strobe);
        let expected = if addr.is_uncached(self.uncached_boundary) {
            self.uncached[index]
        } else {
            self.cached[index].newest()
        };

        if expected & mask == observed & mask {
            DataVerdict::pass()
        } else {
            debug!(
                addr = addr.val(),
                expected, observed, "data read mismatch against newest value"
            );
            let mut candidates = BTreeSet::new();
            let _ = candidates.insert(expected);
            DataVerdict::fail(candidates)
        }
    }

    /// Commits an observed write to the oracle's model.
    ///
    /// Merges the selected bytes over the word's current value (uncached
    /// current, or cached newest). A merge that changes the value overwrites
    /// an uncached word in place, or appends to a cached word's pending
    /// history. A merge equal to the current value is an idempotent no-op:
    /// no state changes and no queue growth.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the written word.
    /// * `strobe` - Per-byte-lane write-enable bits.
    /// * `data` - Incoming write data.
    pub fn dwrite(&mut self, addr: ByteAddr, strobe: u8, data: u32) {
        let index = addr.word_index(self.num_words);
        if addr.is_uncached(self.uncached_boundary) {
            let merged = merge_word(self.uncached[index], data, strobe);
            if merged != self.uncached[index] {
                self.uncached[index] = merged;
            }
        } else {
            let queue = &mut self.cached[index];
            let merged = merge_word(queue.newest(), data, strobe);
            if merged != queue.newest() {
                trace!(
                    addr = addr.val(),
                    value = merged,
                    depth = queue.depth() + 1,
                    "pending history grows"
                );
                queue.push(merged);
            }
        }
    }
}

impl fmt::Debug for Oracle {
    /// Formats the oracle's geometry without dumping its stores.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oracle")
            .field("num_words", &self.num_words)
            .field("uncached_boundary", &self.uncached_boundary)
            .finish_non_exhaustive()
    }
}
