// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the Lehua completion engine.
//!
//! Leaves first: the growable prefix buffer, the FIFO work queue, and the
//! trie that drives both traversals. All implementations are safe Rust with
//! single-owner storage.

pub mod hele_queue;
pub mod lau_buffer;
pub mod ulu_trie;

// Re-export common data structures
pub use hele_queue::HeleQueue;
pub use lau_buffer::{LauBuffer, LauBufferError, LauBufferResult};
pub use ulu_trie::{TerminalPolicy, UluTrie, UluTrieConfig, UluTrieError, UluTrieResult};
