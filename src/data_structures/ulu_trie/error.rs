// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ulu Trie.
//!
//! Only insertion can fail on bad input. Queries are never rejected: a
//! character without a matching child simply ends prefix localization.

use crate::data_structures::lau_buffer::LauBufferError;

/// Errors that can occur in Ulu Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum UluTrieError {
    /// Error when a word has no characters before its terminator.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside `'a'..='z'`.
    #[error("Word '{word}' contains '{character}' at byte {position}, outside the a-z alphabet")]
    InvalidCharacter {
        /// The rejected word.
        word: String,
        /// The offending character.
        character: char,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// Error when a word exceeds the maximum depth allowed.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error raised while materializing a completion from its prefix buffer.
    #[error("Prefix buffer error: {0}")]
    Buffer(#[from] LauBufferError),
}
