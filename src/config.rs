//! Configuration management and validation.
//!
//! Provides the [`ParserConfig`] structure controlling how mount-table
//! lines are decoded, plus builder methods and validation.

use crate::constants::DEFAULT_FSTAB_PATH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Parser behaviour configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Decode `\040`-style octal escapes inside fields (default: true)
    ///
    /// With decoding off, field text is kept exactly as written in the file.
    #[serde(default = "default_true")]
    pub decode_escapes: bool,

    /// Mount table read when the caller does not name one
    #[serde(default = "default_path")]
    pub default_path: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_FSTAB_PATH)
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            decode_escapes: true,
            default_path: default_path(),
        }
    }
}

impl ParserConfig {
    /// Enable or disable octal escape decoding
    pub fn with_escape_decoding(mut self, decode_escapes: bool) -> Self {
        self.decode_escapes = decode_escapes;
        self
    }

    /// Set the mount table used when no path is given
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.default_path.as_os_str().is_empty() {
            return Err(Error::configuration("default_path cannot be empty"));
        }

        debug!(
            "Parser config: decode_escapes={}, default_path={}",
            self.decode_escapes,
            self.default_path.display()
        );
        Ok(())
    }
}
