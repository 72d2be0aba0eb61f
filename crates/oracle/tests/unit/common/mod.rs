//! Unit tests for common oracle building blocks.
