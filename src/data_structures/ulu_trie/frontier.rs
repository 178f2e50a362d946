// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Frontier entries for the breadth-first enumeration.

use super::node::TrieNode;
use crate::data_structures::lau_buffer::LauBuffer;

/// A pending position in the breadth-first walk.
///
/// The node reference is borrowed from the trie; the prefix buffer is owned
/// by the entry and released with it, whichever way the entry leaves the
/// queue.
#[derive(Debug)]
pub struct FrontierEntry<'a> {
    node: &'a TrieNode,
    prefix: LauBuffer,
}

impl<'a> FrontierEntry<'a> {
    /// Pairs a node with the prefix that spells the path to it.
    pub fn new(node: &'a TrieNode, prefix: LauBuffer) -> Self {
        Self { node, prefix }
    }

    /// The trie position of this entry.
    pub fn node(&self) -> &'a TrieNode {
        self.node
    }

    /// The prefix accumulated to reach [`node`](Self::node).
    pub fn prefix(&self) -> &LauBuffer {
        &self.prefix
    }

    /// Consumes the entry, keeping only its prefix.
    pub fn into_prefix(self) -> LauBuffer {
        self.prefix
    }

    /// Builds the entry for `child`, reached from this entry through `letter`.
    ///
    /// The child's prefix is a fresh duplicate with `letter` appended.
    pub fn branch(&self, letter: u8, child: &'a TrieNode) -> FrontierEntry<'a> {
        let mut prefix = self.prefix.duplicate();
        prefix.append(letter);
        FrontierEntry {
            node: child,
            prefix,
        }
    }
}
