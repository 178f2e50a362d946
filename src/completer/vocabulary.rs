// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-list loading.
//!
//! A word list holds one word per line. Line terminators (`\n` or `\r\n`)
//! and surrounding whitespace are not part of the word, blank lines are
//! ignored, and a line that the trie rejects is skipped with a warning
//! rather than aborting the load.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::input::InputConfig;
use crate::data_structures::lau_buffer::LauBuffer;
use crate::data_structures::ulu_trie::UluTrie;
use crate::error::vocabulary::VocabularyError;
use crate::error::LehuaResult;

/// Outcome of loading a word list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Words added to the trie
    pub inserted: usize,

    /// Words that were already present
    pub duplicates: usize,

    /// Lines rejected by the trie
    pub skipped: usize,
}

/// Loads every word of the file at `path` into `trie`.
///
/// # Arguments
///
/// * `trie` - The trie to fill.
/// * `path` - Path of the word list.
/// * `input` - Whether malformed words are sanitized or skipped.
///
/// # Returns
///
/// * `Ok(LoadReport)` - Counts of inserted, duplicate and skipped lines.
/// * `Err(LehuaError::Vocabulary)` - If the file cannot be opened or read.
pub fn load_word_list<P: AsRef<Path>>(
    trie: &mut UluTrie,
    path: P,
    input: &InputConfig,
) -> LehuaResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VocabularyError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_words(trie, BufReader::new(file), path, input)
}

/// Loads every line of `reader` into `trie`.
///
/// `origin` only names the source in errors and logs.
pub fn load_words<R: BufRead>(
    trie: &mut UluTrie,
    reader: R,
    origin: &Path,
    input: &InputConfig,
) -> LehuaResult<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = line.map_err(|source| VocabularyError::Read {
            path: origin.to_path_buf(),
            line: line_number,
            source,
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let raw = text.trim();
        if raw.is_empty() {
            continue;
        }

        let word = if input.sanitize_vocabulary {
            let mut buffer = LauBuffer::from(raw);
            buffer.sanitize();
            Cow::Owned(buffer.as_str()?.to_owned())
        } else {
            Cow::Borrowed(raw)
        };

        match trie.insert(&word) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(e) => {
                warn!(
                    origin = %origin.display(),
                    line = line_number,
                    error = %e,
                    "Skipping word"
                );
                report.skipped += 1;
            }
        }
    }

    info!(
        origin = %origin.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "Word list loaded"
    );
    Ok(report)
}
