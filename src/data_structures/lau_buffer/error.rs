// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau Buffer.

/// Errors that can occur in Lau Buffer operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LauBufferError {
    /// A buffer was requested with more characters than the source holds.
    #[error("Requested length {length} exceeds source length {available}")]
    LengthOutOfBounds {
        /// The requested logical length.
        length: usize,
        /// The number of bytes actually available in the source.
        available: usize,
    },

    /// The buffer content is not valid UTF-8 and cannot be viewed as text.
    #[error("Buffer content is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Index of the first byte that breaks UTF-8 validity.
        valid_up_to: usize,
    },
}

/// Result type for Lau Buffer operations
pub type LauBufferResult<T> = std::result::Result<T, LauBufferError>;
