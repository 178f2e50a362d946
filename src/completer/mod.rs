// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Completer facade.
//!
//! [`Completer`] pairs a trie with its configuration and takes raw user
//! queries: each one is cut to the configured length, sanitized to the
//! trie alphabet, then handed to one of the two enumerators.
//! [`SharedCompleter`] puts a completer behind a reader-writer lock so one
//! vocabulary can serve several threads.

pub mod vocabulary;

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::engine::EngineConfig;
use crate::config::input::InputConfig;
use crate::config::LehuaConfig;
use crate::data_structures::lau_buffer::LauBuffer;
use crate::data_structures::ulu_trie::UluTrie;
use crate::error::LehuaResult;

pub use vocabulary::LoadReport;

/// Prefix completion over a vocabulary.
#[derive(Debug)]
pub struct Completer {
    trie: UluTrie,
    engine: EngineConfig,
    input: InputConfig,
}

impl Completer {
    /// Creates a completer with an empty vocabulary.
    pub fn new(engine: EngineConfig, input: InputConfig) -> Self {
        Self {
            trie: UluTrie::with_config(engine.trie_config()),
            engine,
            input,
        }
    }

    /// Creates a completer from the engine and input sections of `config`.
    pub fn from_config(config: &LehuaConfig) -> Self {
        Self::new(config.engine.clone(), config.input.clone())
    }

    /// Creates a completer and fills it from a word-list file.
    pub fn from_word_list<P: AsRef<Path>>(
        path: P,
        engine: EngineConfig,
        input: InputConfig,
    ) -> LehuaResult<Self> {
        let mut completer = Self::new(engine, input);
        completer.load_word_list(path)?;
        Ok(completer)
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &UluTrie {
        &self.trie
    }

    /// Returns the engine settings.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Adds one word to the vocabulary.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is new.
    /// * `Err(LehuaError::Trie)` - If the trie rejects the word.
    pub fn insert_word(&mut self, word: &str) -> LehuaResult<bool> {
        Ok(self.trie.insert(word)?)
    }

    /// Adds every word of a word-list file to the vocabulary.
    pub fn load_word_list<P: AsRef<Path>>(&mut self, path: P) -> LehuaResult<LoadReport> {
        vocabulary::load_word_list(&mut self.trie, path, &self.input)
    }

    /// Normalizes a raw query to the trie alphabet.
    ///
    /// The query is first cut to `max_query_length` bytes, then sanitized.
    /// The result may be empty.
    pub fn prepare_query(&self, raw: &str) -> LauBuffer {
        let bytes = raw.as_bytes();
        let cut = bytes.len().min(self.input.max_query_length);
        let mut query = LauBuffer::new(&bytes[..cut]);
        query.sanitize();
        query
    }

    /// Completes `raw` with at most `engine.default_limit` words.
    pub fn complete(&self, raw: &str) -> LehuaResult<Vec<String>> {
        self.complete_bounded(raw, self.engine.default_limit)
    }

    /// Completes `raw` with at most `limit` words, shortest first.
    pub fn complete_bounded(&self, raw: &str, limit: usize) -> LehuaResult<Vec<String>> {
        let query = self.prepare_query(raw);
        Ok(self.trie.enumerate_bounded(&query, limit)?)
    }

    /// Completes `raw` with every matching word, in lexicographic order.
    pub fn complete_all(&self, raw: &str) -> LehuaResult<Vec<String>> {
        let query = self.prepare_query(raw);
        Ok(self.trie.enumerate_all(&query)?)
    }
}

/// A [`Completer`] shared between threads.
///
/// Insertions take the write lock and queries the read lock, so queries run
/// in parallel and never observe a half-inserted word.
#[derive(Debug, Clone)]
pub struct SharedCompleter {
    inner: Arc<RwLock<Completer>>,
}

impl SharedCompleter {
    /// Wraps `completer` for sharing.
    pub fn new(completer: Completer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(completer)),
        }
    }

    /// Adds one word under the write lock.
    pub fn insert_word(&self, word: &str) -> LehuaResult<bool> {
        self.inner.write().insert_word(word)
    }

    /// Loads a word list under the write lock.
    pub fn load_word_list<P: AsRef<Path>>(&self, path: P) -> LehuaResult<LoadReport> {
        self.inner.write().load_word_list(path)
    }

    /// See [`Completer::complete`].
    pub fn complete(&self, raw: &str) -> LehuaResult<Vec<String>> {
        self.inner.read().complete(raw)
    }

    /// See [`Completer::complete_bounded`].
    pub fn complete_bounded(&self, raw: &str, limit: usize) -> LehuaResult<Vec<String>> {
        self.inner.read().complete_bounded(raw, limit)
    }

    /// See [`Completer::complete_all`].
    pub fn complete_all(&self, raw: &str) -> LehuaResult<Vec<String>> {
        self.inner.read().complete_all(raw)
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
