//! Property-based tests for the directory store.
