//! Test modules for Lehua Complete.
//!
//! Unit tests live next to the code they cover; this module holds the
//! cross-cutting suites:
//! - Configuration loading and validation
//! - Error context and reporting
//! - Property-based tests for the trie and the prefix buffer
//! - Shared fixtures and proptest strategies

pub mod ulu_trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, raw_query_strategy, vocabulary_strategy, word_strategy, TestFixture,
};
