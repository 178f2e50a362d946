// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Vocabulary loading error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
///
/// Individual malformed words are not errors; the loader skips them and
/// counts them in its report.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The word list could not be opened.
    #[error("Failed to open word list {path}: {source}")]
    Open {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line of the word list could not be read.
    #[error("Failed to read line {line} of word list {path}: {source}")]
    Read {
        /// Path of the word list
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
