// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Ulu Trie.
//!
//! Each node owns its children outright, so the tree has exactly one owner
//! per node and is released post-order when the root goes away.

/// Number of letters in the trie alphabet (`'a'..='z'`).
pub const ALPHABET_SIZE: usize = 26;

/// A node in the Ulu Trie.
///
/// A node is either prefix-only or word-terminal. Insertion is the only
/// transition and it only ever goes from prefix-only to word-terminal.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child slots indexed by letter, `'a'` first
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells a vocabulary word
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new prefix-only node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node terminates a vocabulary word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Returns the child reached through `letter`, if any.
    ///
    /// Bytes outside `'a'..='z'` never have a child.
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        letter_index(letter).and_then(|index| self.children[index].as_deref())
    }

    /// Iterates over present children in ascending letter order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|node| (b'a' + index as u8, node)))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// Maps a letter to its child slot.
pub(crate) fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}
