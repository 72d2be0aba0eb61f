//! Configuration Unit Tests.
//!
//! Verifies default geometry, JSON deserialization with partial documents,
//! and validation of every rejected geometry.

use memoracle_core::Config;
use memoracle_core::common::ConfigError;
use memoracle_core::oracle::Oracle;
use pretty_assertions::assert_eq;

use crate::common::config;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

#[test]
fn default_geometry() {
    let cfg = Config::default();
    assert_eq!(cfg.memory.mem_size, 1024 * 1024);
    assert_eq!(cfg.memory.uncached_size, 256 * 1024);
    assert_eq!(cfg.memory.num_words(), 256 * 1024);
}

#[test]
fn default_geometry_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
}

// ══════════════════════════════════════════════════════════
// 2. JSON deserialization
// ══════════════════════════════════════════════════════════

#[test]
fn empty_document_yields_defaults() {
    let cfg = Config::from_json("{}").expect("empty document is a complete config");
    assert_eq!(cfg.memory.mem_size, Config::default().memory.mem_size);
    assert_eq!(cfg.memory.uncached_size, Config::default().memory.uncached_size);
}

#[test]
fn partial_document_keeps_other_defaults() {
    let cfg = Config::from_json(r#"{ "memory": { "mem_size": 4096 } }"#)
        .expect("partial document parses");
    assert_eq!(cfg.memory.mem_size, 4096);
    assert_eq!(cfg.memory.uncached_size, 256 * 1024);
}

#[test]
fn full_document() {
    let cfg = Config::from_json(r#"{ "memory": { "mem_size": 8192, "uncached_size": 2048 } }"#)
        .expect("full document parses");
    assert_eq!(cfg.memory.mem_size, 8192);
    assert_eq!(cfg.memory.uncached_size, 2048);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn malformed_document_is_rejected() {
    assert!(Config::from_json("not json").is_err());
    assert!(Config::from_json(r#"{ "memory": { "mem_size": "big" } }"#).is_err());
}

// ══════════════════════════════════════════════════════════
// 3. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn zero_mem_size_rejected() {
    assert_eq!(config(0, 0).validate(), Err(ConfigError::ZeroMemSize));
}

#[test]
fn unaligned_mem_size_rejected() {
    assert_eq!(
        config(4100, 0).validate(),
        Err(ConfigError::UnalignedMemSize(4100))
    );
}

#[test]
fn unaligned_boundary_rejected() {
    assert_eq!(
        config(4096, 8).validate(),
        Err(ConfigError::UnalignedBoundary(8))
    );
}

#[test]
fn boundary_past_end_rejected() {
    assert_eq!(
        config(4096, 8192).validate(),
        Err(ConfigError::BoundaryOutOfRange {
            boundary: 8192,
            mem_size: 4096,
        })
    );
}

#[test]
fn boundary_equal_to_mem_size_allowed() {
    // Degenerate but legal: the cached region is empty.
    assert_eq!(config(4096, 4096).validate(), Ok(()));
}

#[test]
fn construction_rejects_invalid_geometry() {
    assert!(Oracle::new(&config(0, 0)).is_err());
    assert!(Oracle::new(&config(4100, 0)).is_err());
}

#[test]
fn errors_render_for_diagnostics() {
    let err = config(4096, 8192).validate().unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("0x2000"));
    assert!(rendered.contains("0x1000"));
}
