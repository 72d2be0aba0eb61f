//! Check Verdict definitions.
//!
//! This module defines the result type returned by the oracle's comparison
//! entry points. A mismatch is not an error: it is the outcome the oracle
//! exists to detect, so it travels as a first-class pass/fail value together
//! with the set of values that would have been accepted.

use std::collections::BTreeSet;

use crate::common::data::BlockData;

/// Outcome of a consistency check.
///
/// On failure, `candidates` holds every value the implementation could have
/// correctly returned, for diagnostic use by the harness. On success the set
/// is empty. An ordered set keeps diagnostic output deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict<T: Ord> {
    /// Whether the observed value was acceptable.
    pub pass: bool,
    /// Every value that would have satisfied the check (failure only).
    pub candidates: BTreeSet<T>,
}

impl<T: Ord> Verdict<T> {
    /// Creates a passing verdict with no candidates.
    ///
    /// # Returns
    ///
    /// A `Verdict` with `pass` set and an empty candidate set.
    pub fn pass() -> Self {
        Self {
            pass: true,
            candidates: BTreeSet::new(),
        }
    }

    /// Creates a failing verdict carrying the acceptable values.
    ///
    /// # Arguments
    ///
    /// * `candidates` - Every value that would have satisfied the check.
    ///
    /// # Returns
    ///
    /// A `Verdict` with `pass` cleared.
    pub fn fail(candidates: BTreeSet<T>) -> Self {
        Self {
            pass: false,
            candidates,
        }
    }
}

/// Verdict of an instruction-fetch check: candidates are 4-word blocks.
pub type FetchVerdict = Verdict<BlockData>;

/// Verdict of a data-read check: candidates are single words.
pub type DataVerdict = Verdict<u32>;
