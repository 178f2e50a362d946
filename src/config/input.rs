// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Input configuration module.
//!
//! Limits and normalization applied to queries and word lists before they
//! reach the trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Raw queries are cut to this many bytes before sanitization
    pub max_query_length: usize,

    /// Sanitize word-list entries instead of skipping malformed ones
    pub sanitize_vocabulary: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_query_length: 44,
            sanitize_vocabulary: false,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_query_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_query_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
