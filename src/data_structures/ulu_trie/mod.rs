// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ulu Trie Implementation
//!
//! A 26-ary prefix tree over the lowercase ASCII alphabet, with two ways of
//! listing the vocabulary words below a query prefix:
//!
//! * [`UluTrie::enumerate_all`] walks the matched subtree depth-first and
//!   returns every completion in lexicographic order.
//! * [`UluTrie::enumerate_bounded`] walks it breadth-first through a
//!   [`HeleQueue`] and stops as soon as `N` completions are found, so the
//!   shortest completions come first, ties broken lexicographically.
//!
//! # Prefix Localization
//!
//! Both enumerators first follow the query from the root for as long as
//! matching children exist. If only part of the query matches, completion
//! proceeds from the deepest node reached. A query that matches nothing,
//! including the empty query, yields no completions.
//!
//! # Word-Terminal Nodes
//!
//! With the default [`TerminalPolicy::Stop`], a node that completes a word
//! is reported and *not* expanded further: after inserting `tele` and
//! `telegram`, the query `tel` yields only `tele`. [`TerminalPolicy::Descend`]
//! reports the word and keeps expanding, so the same query yields both.

mod error;
mod frontier;
mod node;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::data_structures::hele_queue::HeleQueue;
use crate::data_structures::lau_buffer::LauBuffer;

pub use error::UluTrieError;
pub use frontier::FrontierEntry;
pub use node::{TrieNode, ALPHABET_SIZE};

/// Result type for Ulu Trie operations
pub type UluTrieResult<T> = Result<T, UluTrieError>;

/// What the enumerators do when they reach a word-terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalPolicy {
    /// Report the word and do not expand its children
    #[default]
    Stop,
    /// Report the word and keep expanding its children
    Descend,
}

/// Configuration options for the Ulu Trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UluTrieConfig {
    /// Maximum word length accepted by insertion (bounds recursion depth)
    pub max_depth: usize,

    /// Behaviour of both enumerators at word-terminal nodes
    pub terminal_policy: TerminalPolicy,
}

impl Default for UluTrieConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            terminal_policy: TerminalPolicy::Stop,
        }
    }
}

/// Result of prefix localization.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    /// Deepest node reached by the query
    pub node: &'a TrieNode,

    /// Number of query characters consumed to reach `node`
    pub matched: usize,
}

/// Ulu Trie stores a vocabulary of lowercase words for prefix completion.
///
/// The trie is single-owner: insertion takes `&mut self` and enumeration
/// takes `&self`, so one writer or many readers at a time is enforced by the
/// borrow checker. Sharing across threads needs an outer lock, see
/// [`SharedCompleter`](crate::completer::SharedCompleter).
#[derive(Debug, Default)]
pub struct UluTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: UluTrieConfig,

    /// Number of distinct words inserted
    word_count: usize,

    /// Number of nodes below the root
    node_count: usize,
}

impl UluTrie {
    /// Creates a new empty `UluTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(UluTrieConfig::default())
    }

    /// Creates a new empty `UluTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: UluTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            word_count: 0,
            node_count: 0,
        }
    }

    /// Returns the trie configuration.
    pub fn config(&self) -> &UluTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// The word ends at the first `'\n'` or `'\0'`, or at the end of the
    /// string; a trailing record separator is never stored. The word is
    /// validated in full before any node is created, so a rejected word
    /// leaves the trie untouched.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert, lowercase `a-z` only.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is new, `false` if it was already present.
    /// * `Err(UluTrieError)` - If the word is empty, too long, or outside the alphabet.
    pub fn insert(&mut self, word: &str) -> UluTrieResult<bool> {
        let end = word
            .find(|c: char| c == '\n' || c == '\0')
            .unwrap_or(word.len());
        let word = &word[..end];

        if word.is_empty() {
            return Err(UluTrieError::EmptyWord);
        }
        if let Some((position, character)) =
            word.char_indices().find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(UluTrieError::InvalidCharacter {
                word: word.to_string(),
                character,
                position,
            });
        }
        if word.len() > self.config.max_depth {
            return Err(UluTrieError::WordTooLong {
                word: word.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let mut current = &mut self.root;
        for letter in word.bytes() {
            let slot = &mut current.children[usize::from(letter - b'a')];
            if slot.is_none() {
                self.node_count += 1;
            }
            current = &mut **slot.get_or_insert_with(Box::default);
        }

        let is_new = !current.is_end_of_word;
        current.is_end_of_word = true;
        if is_new {
            self.word_count += 1;
        }

        Ok(is_new)
    }

    /// Walks `query` from the root as far as matching children exist.
    ///
    /// # Returns
    ///
    /// The deepest node reached and how many bytes of `query` were consumed.
    /// The root with `matched == 0` is returned when nothing matches.
    pub fn locate(&self, query: &[u8]) -> Located<'_> {
        let mut node = &self.root;
        let mut matched = 0;

        for &letter in query {
            match node.child(letter) {
                Some(next) => {
                    node = next;
                    matched += 1;
                }
                None => break,
            }
        }

        Located { node, matched }
    }

    /// Checks if a word is present in the trie.
    pub fn contains(&self, word: &str) -> bool {
        let located = self.locate(word.as_bytes());
        !word.is_empty() && located.matched == word.len() && located.node.is_end_of_word()
    }

    /// Lists every completion of `query`, depth-first.
    ///
    /// Children are visited in ascending letter order, so the result is
    /// sorted lexicographically.
    ///
    /// # Arguments
    ///
    /// * `query` - A sanitized query prefix.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - All completions; empty when no prefix of the query matches.
    /// * `Err(UluTrieError::Buffer)` - If a completion is not valid text.
    pub fn enumerate_all(&self, query: &LauBuffer) -> UluTrieResult<Vec<String>> {
        let Some((located, prefix)) = self.seed(query) else {
            return Ok(Vec::new());
        };

        let mut completions = Vec::new();
        self.walk(located.node, &prefix, &mut completions)?;

        debug!(
            query = %query,
            matched = located.matched,
            completions = completions.len(),
            "Enumerated all completions"
        );
        Ok(completions)
    }

    /// Lists at most `limit` completions of `query`, breadth-first.
    ///
    /// The walk stops the moment `limit` completions are collected; every
    /// frontier entry still queued at that point is released before
    /// returning. Fewer than `limit` completions are returned only when
    /// fewer exist.
    ///
    /// # Arguments
    ///
    /// * `query` - A sanitized query prefix.
    /// * `limit` - Maximum number of completions.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Up to `limit` completions, shortest first.
    /// * `Err(UluTrieError::Buffer)` - If a completion is not valid text.
    pub fn enumerate_bounded(&self, query: &LauBuffer, limit: usize) -> UluTrieResult<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let Some((located, prefix)) = self.seed(query) else {
            return Ok(Vec::new());
        };

        let mut frontier = HeleQueue::with_initial(FrontierEntry::new(located.node, prefix));
        let mut completions = Vec::new();

        while completions.len() < limit {
            let Some(entry) = frontier.pop_front() else {
                break;
            };

            if entry.node().is_end_of_word() {
                completions.push(entry.prefix().as_str()?.to_owned());
                let stop_here = self.config.terminal_policy == TerminalPolicy::Stop;
                if stop_here || completions.len() == limit {
                    continue;
                }
            }

            for (letter, child) in entry.node().children() {
                frontier.push_back(entry.branch(letter, child));
            }
        }

        let discarded = frontier.drain().count();
        trace!(
            discarded,
            high_water_mark = frontier.high_water_mark(),
            "Released unexplored frontier entries"
        );
        debug!(
            query = %query,
            matched = located.matched,
            limit,
            completions = completions.len(),
            "Enumerated bounded completions"
        );
        Ok(completions)
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Releases every node and resets the trie to empty.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
        self.node_count = 0;
    }

    /// Localizes `query` and builds the starting prefix from the matched part.
    fn seed(&self, query: &LauBuffer) -> Option<(Located<'_>, LauBuffer)> {
        let located = self.locate(query.as_bytes());
        if located.matched == 0 {
            debug!(query = %query, "No prefix of the query is in the trie");
            return None;
        }

        let mut prefix = query.duplicate();
        prefix.truncate(located.matched);
        Some((located, prefix))
    }

    /// Depth-first helper; each branch gets its own prefix copy.
    fn walk(
        &self,
        node: &TrieNode,
        prefix: &LauBuffer,
        completions: &mut Vec<String>,
    ) -> UluTrieResult<()> {
        if node.is_end_of_word() {
            completions.push(prefix.as_str()?.to_owned());
            if self.config.terminal_policy == TerminalPolicy::Stop {
                return Ok(());
            }
        }

        for (letter, child) in node.children() {
            let mut branch = prefix.duplicate();
            branch.append(letter);
            self.walk(child, &branch, completions)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> UluTrie {
        let mut trie = UluTrie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    fn descending_trie_with(words: &[&str]) -> UluTrie {
        let mut trie = UluTrie::with_config(UluTrieConfig {
            terminal_policy: TerminalPolicy::Descend,
            ..Default::default()
        });
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = UluTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);

        // Test insertion
        assert!(trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 5);
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains(""));

        // Re-insertion is a no-op
        assert!(!trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 5);

        // Shared prefixes reuse nodes
        assert!(trie.insert("help").unwrap());
        assert_eq!(trie.node_count(), 6);

        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains("hello"));
    }

    #[test]
    fn test_insert_stops_at_record_separator() {
        let mut trie = UluTrie::new();
        assert!(trie.insert("teleport\n").unwrap());
        assert!(!trie.insert("teleport\0junk").unwrap());

        assert!(trie.contains("teleport"));
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn test_insert_rejects_bad_words() {
        let mut trie = UluTrie::with_config(UluTrieConfig {
            max_depth: 4,
            ..Default::default()
        });

        assert_eq!(trie.insert(""), Err(UluTrieError::EmptyWord));
        assert_eq!(trie.insert("\n"), Err(UluTrieError::EmptyWord));
        assert_eq!(
            trie.insert("abC"),
            Err(UluTrieError::InvalidCharacter {
                word: "abC".to_string(),
                character: 'C',
                position: 2,
            })
        );
        assert!(matches!(
            trie.insert("abcde"),
            Err(UluTrieError::WordTooLong { max_depth: 4, .. })
        ));

        // Nothing was partially inserted
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_locate() {
        let trie = trie_with(&["teleport", "telephone", "telegram"]);

        let located = trie.locate(b"tele");
        assert_eq!(located.matched, 4);
        assert_eq!(located.node.children().count(), 2);

        let located = trie.locate(b"telex");
        assert_eq!(located.matched, 4);

        let located = trie.locate(b"xyz");
        assert_eq!(located.matched, 0);
        assert!(std::ptr::eq(located.node, trie.root()));

        assert_eq!(trie.locate(b"te1e").matched, 2);
    }

    #[test]
    fn test_bounded_returns_level_order() {
        let trie = trie_with(&["teleport", "telephone", "telegram"]);
        let query = LauBuffer::from("tele");

        // telegram and teleport are both eight letters, telephone is nine
        assert_eq!(
            trie.enumerate_bounded(&query, 2).unwrap(),
            vec!["telegram", "teleport"]
        );
        assert_eq!(
            trie.enumerate_bounded(&query, 3).unwrap(),
            vec!["telegram", "teleport", "telephone"]
        );
        assert_eq!(trie.enumerate_bounded(&query, 10).unwrap().len(), 3);
        assert!(trie.enumerate_bounded(&query, 0).unwrap().is_empty());
    }

    #[test]
    fn test_all_returns_lexicographic_order() {
        let trie = trie_with(&["apple", "ape", "banana", "apostle"]);
        let query = LauBuffer::from("ap");

        assert_eq!(
            trie.enumerate_all(&query).unwrap(),
            vec!["ape", "apostle", "apple"]
        );
    }

    #[test]
    fn test_unmatched_and_empty_queries() {
        let trie = trie_with(&["apple", "ape", "banana", "apostle"]);

        for query in ["xyz", ""] {
            let query = LauBuffer::from(query);
            assert!(trie.enumerate_all(&query).unwrap().is_empty());
            assert!(trie.enumerate_bounded(&query, 5).unwrap().is_empty());
        }
    }

    #[test]
    fn test_partial_match_completes_matched_prefix() {
        let trie = trie_with(&["teleport", "telephone", "telegram", "apple"]);
        let query = LauBuffer::from("telex");

        assert_eq!(
            trie.enumerate_all(&query).unwrap(),
            vec!["telegram", "telephone", "teleport"]
        );
        assert_eq!(
            trie.enumerate_bounded(&query, 1).unwrap(),
            vec!["telegram"]
        );
    }

    #[test]
    fn test_stop_policy_hides_longer_words() {
        let trie = trie_with(&["tele", "telegram"]);
        let query = LauBuffer::from("tel");

        assert_eq!(trie.enumerate_all(&query).unwrap(), vec!["tele"]);
        assert_eq!(trie.enumerate_bounded(&query, 5).unwrap(), vec!["tele"]);

        // Querying past the terminal node reaches the longer word
        let query = LauBuffer::from("teleg");
        assert_eq!(trie.enumerate_all(&query).unwrap(), vec!["telegram"]);
    }

    #[test]
    fn test_descend_policy_reports_longer_words() {
        let trie = descending_trie_with(&["tele", "telegram", "telegraph", "tell"]);
        let query = LauBuffer::from("tel");

        assert_eq!(
            trie.enumerate_all(&query).unwrap(),
            vec!["tele", "telegram", "telegraph", "tell"]
        );
        assert_eq!(
            trie.enumerate_bounded(&query, 3).unwrap(),
            vec!["tele", "tell", "telegram"]
        );
    }

    #[test]
    fn test_query_on_exact_word() {
        let trie = trie_with(&["ape", "apex"]);
        let query = LauBuffer::from("ape");

        // The query node itself is terminal
        assert_eq!(trie.enumerate_all(&query).unwrap(), vec!["ape"]);
        assert_eq!(trie.enumerate_bounded(&query, 2).unwrap(), vec!["ape"]);
    }
}
