// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Growable Buffer.
//!
//! An append-only, resizable byte sequence used by the trie traversals to
//! materialize prefixes without walking back up from the root. The buffer
//! keeps an explicit logical length next to its storage and always writes a
//! zero sentinel immediately after the logical content.
//!
//! # Growth Policy
//!
//! Storage is a boxed slice whose length *is* the capacity. When an append
//! would make `length + 1 == capacity`, the storage is reallocated to
//! `2 * length + 1` bytes and the existing content (terminator included) is
//! copied over. There is no shrink operation.
//!
//! # Example
//!
//! ```
//! use lehua_complete_lib::data_structures::lau_buffer::LauBuffer;
//!
//! let mut prefix = LauBuffer::from("tele");
//! let mut branch = prefix.duplicate();
//! branch.append(b'p');
//!
//! assert_eq!(prefix.as_bytes(), b"tele");
//! assert_eq!(branch.as_bytes(), b"telep");
//!
//! prefix.sanitize();
//! assert_eq!(prefix.len(), 4);
//! ```

mod error;

use std::fmt;

pub use error::{LauBufferError, LauBufferResult};

/// Sentinel byte written right after the logical content.
pub const TERMINATOR: u8 = 0;

/// A growable byte buffer with an authoritative length and a zero sentinel.
///
/// Invariant: `capacity() > len()` at all times, leaving room for the
/// terminator.
pub struct LauBuffer {
    /// Backing storage; its length is the buffer capacity
    characters: Box<[u8]>,

    /// Number of logical characters
    length: usize,
}

impl LauBuffer {
    /// Creates a buffer holding a copy of `source`.
    ///
    /// The storage is sized to exactly `source.len() + 1` bytes.
    pub fn new(source: &[u8]) -> Self {
        let length = source.len();
        let mut characters = vec![TERMINATOR; length + 1].into_boxed_slice();
        characters[..length].copy_from_slice(source);

        Self { characters, length }
    }

    /// Creates a buffer from the first `length` bytes of `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - The bytes to copy from.
    /// * `length` - How many bytes of `source` to copy.
    ///
    /// # Returns
    ///
    /// * `Ok(LauBuffer)` - A buffer with capacity `length + 1`.
    /// * `Err(LauBufferError::LengthOutOfBounds)` - If `source` is shorter than `length`.
    pub fn with_length(source: &[u8], length: usize) -> LauBufferResult<Self> {
        if length > source.len() {
            return Err(LauBufferError::LengthOutOfBounds {
                length,
                available: source.len(),
            });
        }
        Ok(Self::new(&source[..length]))
    }

    /// Returns the number of logical characters.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.characters.len()
    }

    /// Appends one byte at the logical end, growing the storage if needed.
    ///
    /// Growing relocates the storage, so views obtained through
    /// [`as_bytes`](Self::as_bytes) cannot be held across this call; the
    /// borrow checker rejects that already.
    pub fn append(&mut self, character: u8) {
        if self.length + 1 == self.capacity() {
            self.grow();
        }
        self.characters[self.length] = character;
        self.length += 1;
        self.characters[self.length] = TERMINATOR;
    }

    /// Removes and returns the last character. Storage is not shrunk.
    pub fn pop(&mut self) -> Option<u8> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;
        let character = self.characters[self.length];
        self.characters[self.length] = TERMINATOR;
        Some(character)
    }

    /// Shortens the logical content to `length` characters.
    ///
    /// Has no effect when `length` is not smaller than the current length.
    pub fn truncate(&mut self, length: usize) {
        if length < self.length {
            self.length = length;
            self.characters[length] = TERMINATOR;
        }
    }

    /// Returns an independent deep copy of this buffer.
    ///
    /// The copy has the same length and capacity, and its storage shares no
    /// memory with the original: appending to one never changes the other.
    pub fn duplicate(&self) -> Self {
        Self {
            characters: self.characters.clone(),
            length: self.length,
        }
    }

    /// Normalizes the buffer in place to the trie alphabet.
    ///
    /// ASCII letters are kept and folded to lowercase; digits, punctuation,
    /// whitespace and non-ASCII bytes are dropped. The operation is
    /// idempotent and may leave the buffer empty.
    pub fn sanitize(&mut self) {
        let mut write = 0;
        for read in 0..self.length {
            let byte = self.characters[read];
            if byte.is_ascii_alphabetic() {
                self.characters[write] = byte.to_ascii_lowercase();
                write += 1;
            }
        }
        self.length = write;
        self.characters[write] = TERMINATOR;
    }

    /// Returns the logical content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.characters[..self.length]
    }

    /// Returns the logical content followed by the sentinel byte.
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.characters[..=self.length]
    }

    /// Views the logical content as text.
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The content, if it is valid UTF-8.
    /// * `Err(LauBufferError::InvalidUtf8)` - Otherwise.
    pub fn as_str(&self) -> LauBufferResult<&str> {
        std::str::from_utf8(self.as_bytes()).map_err(|e| LauBufferError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
    }

    fn grow(&mut self) {
        // An empty buffer would otherwise "grow" to a single byte.
        let new_capacity = (2 * self.length + 1).max(self.length + 2);
        let mut characters = vec![TERMINATOR; new_capacity].into_boxed_slice();
        characters[..=self.length].copy_from_slice(&self.characters[..=self.length]);
        self.characters = characters;
    }
}

impl Clone for LauBuffer {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Default for LauBuffer {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl From<&str> for LauBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl PartialEq for LauBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for LauBuffer {}

impl fmt::Debug for LauBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauBuffer")
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .field("length", &self.length)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for LauBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
