//! Individual line parsing for mount-table files
//!
//! This module handles one raw line at a time: trimming, comment and blank
//! line detection, field splitting, and conversion into a [`MountEntry`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::field_parsers::{parse_numeric_field, split_list, unescape_field};
use crate::app::models::{MountEntry, NumericField};
use crate::config::ParserConfig;
use crate::constants::{COMMENT_PREFIX, FIELD_COUNT, field_index};
use crate::{Error, Result};

/// Runs of ASCII whitespace separating the six fields
///
/// Vertical tab and non-ASCII spaces such as U+00A0 are legal inside
/// filenames and stay part of the field.
static FIELD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\t\n\x0C\r ]+").unwrap_or_else(|e| panic!("Invalid field separator: {e}"))
});

/// Outcome of looking at a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line
    Blank,
    /// Line whose first non-whitespace character is `#`
    Comment,
    /// A complete entry
    Entry(MountEntry),
}

/// Converts raw mount-table lines into entries
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Create a line parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one line, returning `None` for comment and blank lines
    pub fn parse_line(&self, raw_line: &str) -> Result<Option<MountEntry>> {
        Ok(match self.classify(raw_line)? {
            ParsedLine::Entry(entry) => Some(entry),
            ParsedLine::Blank | ParsedLine::Comment => None,
        })
    }

    /// Parse one line, telling blank and comment lines apart
    pub fn classify(&self, raw_line: &str) -> Result<ParsedLine> {
        let line = raw_line.trim();

        if line.is_empty() {
            return Ok(ParsedLine::Blank);
        }
        if line.starts_with(COMMENT_PREFIX) {
            return Ok(ParsedLine::Comment);
        }

        let fields: Vec<&str> = FIELD_SEPARATOR.split(line).collect();
        if fields.len() != FIELD_COUNT {
            return Err(Error::field_count(FIELD_COUNT, fields.len()));
        }

        // Decode each field exactly once, before any further splitting
        let fields: Vec<String> = fields
            .into_iter()
            .map(|field| {
                if self.config.decode_escapes {
                    unescape_field(field)
                } else {
                    field.to_string()
                }
            })
            .collect();

        let dump_frequency = parse_numeric_field(
            &fields[field_index::DUMP_FREQUENCY],
            NumericField::DumpFrequency,
        )?;
        let pass_number =
            parse_numeric_field(&fields[field_index::PASS_NUMBER], NumericField::PassNumber)?;

        let entry = MountEntry {
            name: fields[field_index::NAME].clone(),
            directory: fields[field_index::DIRECTORY].clone(),
            types: split_list(&fields[field_index::TYPES]),
            options: split_list(&fields[field_index::OPTIONS]),
            dump_frequency,
            pass_number,
        };

        trace!("Parsed entry {} on {}", entry.name, entry.directory);
        Ok(ParsedLine::Entry(entry))
    }
}

/// Parse one line with the default configuration (escape decoding on)
pub fn parse_line(raw_line: &str) -> Result<Option<MountEntry>> {
    LineParser::default().parse_line(raw_line)
}
