//! Instruction-Fetch Check Unit Tests.
//!
//! Verifies the tolerant per-word fetch policy: exact matching in the
//! uncached region, pending-history matching with retirement in the cached
//! region, and cartesian-product candidate reporting on failure.

use std::collections::BTreeSet;

use memoracle_core::common::{BlockData, ByteAddr};
use pretty_assertions::assert_eq;

use crate::common::{CACHED_BASE_WORD, oracle, word_byte_addr};

fn block_set(blocks: &[BlockData]) -> BTreeSet<BlockData> {
    blocks.iter().copied().collect()
}

// ══════════════════════════════════════════════════════════
// 1. Uncached region: exact matching
// ══════════════════════════════════════════════════════════

#[test]
fn uncached_fresh_fetch_passes() {
    let mut oracle = oracle();
    let verdict = oracle.ircheck(ByteAddr::new(0), [0, 1, 2, 3]);
    assert!(verdict.pass);
    assert!(verdict.candidates.is_empty());
}

#[test]
fn uncached_single_word_mismatch_fails_whole_block() {
    let mut oracle = oracle();
    let verdict = oracle.ircheck(ByteAddr::new(0), [0, 1, 2, 99]);
    assert!(!verdict.pass);
    assert_eq!(verdict.candidates, block_set(&[[0, 1, 2, 3]]));
}

#[test]
fn uncached_fetch_sees_committed_write() {
    let mut oracle = oracle();
    oracle.dwrite(word_byte_addr(1), 0xF, 0xAABB_CCDD);
    let verdict = oracle.ircheck(ByteAddr::new(0), [0, 0xAABB_CCDD, 2, 3]);
    assert!(verdict.pass);
}

#[test]
fn uncached_fetch_never_tolerates_stale_values() {
    let mut oracle = oracle();
    oracle.dwrite(word_byte_addr(1), 0xF, 0xAABB_CCDD);
    let verdict = oracle.ircheck(ByteAddr::new(0), [0, 1, 2, 3]);
    assert!(!verdict.pass);
    assert_eq!(verdict.candidates, block_set(&[[0, 0xAABB_CCDD, 2, 3]]));
}

// ══════════════════════════════════════════════════════════
// 2. Cached region: tolerant matching
// ══════════════════════════════════════════════════════════

#[test]
fn cached_fresh_fetch_passes() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let seed = base as u32;
    let verdict = oracle.ircheck(word_byte_addr(base), [seed, seed + 1, seed + 2, seed + 3]);
    assert!(verdict.pass);
}

#[test]
fn cached_fetch_accepts_newest_and_retires_older() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let addr = word_byte_addr(base);
    oracle.dwrite(addr, 0xF, 0xAAAA_AAAA);
    oracle.dwrite(addr, 0xF, 0xBBBB_BBBB);

    let seed = base as u32;
    let verdict = oracle.ircheck(addr, [0xBBBB_BBBB, seed + 1, seed + 2, seed + 3]);
    assert!(verdict.pass);
    assert_eq!(
        oracle.pending(base).iter().collect::<Vec<_>>(),
        vec![0xBBBB_BBBB],
        "seed and older write must be retired"
    );
}

#[test]
fn cached_fetch_accepts_stale_value_without_retiring_it() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let addr = word_byte_addr(base);
    oracle.dwrite(addr, 0xF, 0xAAAA_AAAA);
    oracle.dwrite(addr, 0xF, 0xBBBB_BBBB);

    // The seed is still the queue front and therefore still legitimate.
    let seed = base as u32;
    let verdict = oracle.ircheck(addr, [seed, seed + 1, seed + 2, seed + 3]);
    assert!(verdict.pass);
    assert_eq!(
        oracle.pending(base).iter().collect::<Vec<_>>(),
        vec![seed, 0xAAAA_AAAA, 0xBBBB_BBBB]
    );
}

#[test]
fn cached_fetch_mid_block_address_checks_whole_block() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let seed = base as u32;
    // Byte address inside the third word of the block.
    let addr = ByteAddr::new((base * 4 + 9) as u32);
    let verdict = oracle.ircheck(addr, [seed, seed + 1, seed + 2, seed + 3]);
    assert!(verdict.pass);
}

// ══════════════════════════════════════════════════════════
// 3. Cached region: failure and candidate products
// ══════════════════════════════════════════════════════════

#[test]
fn cached_fetch_failure_reports_remaining_queue() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let addr = word_byte_addr(base);
    let seed = base as u32;
    oracle.dwrite(addr, 0xF, 0xAAAA_AAAA);
    oracle.dwrite(addr, 0xF, 0xBBBB_BBBB);

    // Retire down to [0xAAAA_AAAA, 0xBBBB_BBBB] first.
    let verdict = oracle.ircheck(addr, [0xAAAA_AAAA, seed + 1, seed + 2, seed + 3]);
    assert!(verdict.pass);

    // The seed is gone: observing it now fails, and the candidate set's
    // projection onto this word is exactly the remaining queue contents.
    let verdict = oracle.ircheck(addr, [seed, seed + 1, seed + 2, seed + 3]);
    assert!(!verdict.pass);
    assert_eq!(
        verdict.candidates,
        block_set(&[
            [0xAAAA_AAAA, seed + 1, seed + 2, seed + 3],
            [0xBBBB_BBBB, seed + 1, seed + 2, seed + 3],
        ])
    );
}

#[test]
fn cached_fetch_failure_takes_cartesian_product() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let seed = base as u32;
    oracle.dwrite(word_byte_addr(base), 0xF, 0xAAAA_AAAA);
    oracle.dwrite(word_byte_addr(base + 1), 0xF, 0xCCCC_CCCC);

    // Observe garbage in the two written positions: each contributes two
    // candidates (seed and write), matched positions contribute one.
    let verdict = oracle.ircheck(
        word_byte_addr(base),
        [0xDEAD_0000, 0xDEAD_0001, seed + 2, seed + 3],
    );
    assert!(!verdict.pass);
    assert_eq!(
        verdict.candidates,
        block_set(&[
            [seed, seed + 1, seed + 2, seed + 3],
            [seed, 0xCCCC_CCCC, seed + 2, seed + 3],
            [0xAAAA_AAAA, seed + 1, seed + 2, seed + 3],
            [0xAAAA_AAAA, 0xCCCC_CCCC, seed + 2, seed + 3],
        ])
    );
}

#[test]
fn cached_fetch_failure_still_leaves_queues_non_empty() {
    let mut oracle = oracle();
    let base = CACHED_BASE_WORD;
    let addr = word_byte_addr(base);
    oracle.dwrite(addr, 0xF, 0xAAAA_AAAA);

    let seed = base as u32;
    let verdict = oracle.ircheck(addr, [0xDEAD_BEEF, seed + 1, seed + 2, seed + 3]);
    assert!(!verdict.pass);
    for offset in 0..4 {
        assert!(oracle.pending(base + offset).depth() >= 1);
    }
}
