// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Complete Library
//!
//! A prefix-matching autocomplete engine. The core is a 26-ary trie with
//! two enumerators, depth-first for every completion and breadth-first for
//! the first N, backed by a growable prefix buffer and a FIFO work queue.
//! Around it sit a completer facade, a word-list loader, layered
//! configuration and the error types shared by the `lehua` binary.
//!
//! # Example
//!
//! ```
//! use lehua_complete_lib::data_structures::{LauBuffer, UluTrie};
//!
//! let mut trie = UluTrie::new();
//! for word in ["teleport", "telephone", "telegram"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! let mut query = LauBuffer::from("Tele!");
//! query.sanitize();
//!
//! assert_eq!(
//!     trie.enumerate_bounded(&query, 2).unwrap(),
//!     vec!["telegram", "teleport"]
//! );
//! ```

pub mod completer;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lehua Complete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
