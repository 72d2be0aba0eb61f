//! Bus Data Shapes and Strobe Arithmetic.
//!
//! This module defines the data shapes carried by oracle operations and the
//! byte-lane arithmetic shared by the raw image and the consistency model:
//! 1. **Fetch Blocks:** The 4-word tuple returned by an instruction fetch.
//! 2. **Strobe Expansion:** Turning a 4-bit lane strobe into a 32-bit byte mask.
//! 3. **Write Merging:** Combining selected write bytes with a word's current bytes.

use super::constants::{LANE_MASK, STROBE_LANES};

/// A 4-word instruction-fetch block, ordered by ascending word index.
pub type BlockData = [u32; super::constants::BLOCK_WORDS];

/// Expands a byte-lane strobe into a 32-bit byte mask.
///
/// Each set strobe bit selects the corresponding byte lane of the word.
/// Bits above the four defined lanes are ignored, so any `u8` is a valid
/// strobe.
///
/// # Arguments
///
/// * `strobe` - Per-byte-lane write-enable bits (lane 0 is bit 0).
///
/// # Returns
///
/// A mask with `0xFF` in every selected lane and `0x00` elsewhere.
#[inline]
pub fn strobe_mask(strobe: u8) -> u32 {
    let mut mask = 0;
    for lane in 0..STROBE_LANES {
        if strobe & (1 << lane) != 0 {
            mask |= LANE_MASK << (lane * 8);
        }
    }
    mask
}

/// Merges write data over a current word under a byte-lane strobe.
///
/// Selected lanes take their bytes from `data`; unselected lanes keep the
/// bytes of `current`.
///
/// # Arguments
///
/// * `current` - The word's value before the write.
/// * `data` - The incoming write data.
/// * `strobe` - Per-byte-lane write-enable bits.
///
/// # Returns
///
/// The merged word.
#[inline]
pub fn merge_word(current: u32, data: u32, strobe: u8) -> u32 {
    let mask = strobe_mask(strobe);
    (data & mask) | (current & !mask)
}
