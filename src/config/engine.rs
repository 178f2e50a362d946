// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Engine configuration module.
//!
//! Settings that shape the trie and the completions it returns.

use super::{ConfigResult, Validate};
use crate::data_structures::ulu_trie::{TerminalPolicy, UluTrieConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted `max_depth`.
const MAX_DEPTH_LIMIT: usize = 1024;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of completions returned by a bounded query
    pub default_limit: usize,

    /// Whether enumeration descends below word-terminal nodes
    pub terminal_policy: TerminalPolicy,

    /// Longest word accepted into the vocabulary
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            terminal_policy: TerminalPolicy::Stop,
            max_depth: 64,
        }
    }
}

impl EngineConfig {
    /// Builds the trie configuration these settings describe.
    pub fn trie_config(&self) -> UluTrieConfig {
        UluTrieConfig {
            max_depth: self.max_depth,
            terminal_policy: self.terminal_policy,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.default_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.max_depth".to_string(),
                message: format!("must be between 1 and {MAX_DEPTH_LIMIT}"),
            });
        }

        Ok(())
    }
}
