//! Data models for mount-table processing
//!
//! This module contains the core data structure for one mount-table entry,
//! following the six-field layout described in `fstab(5)`.

use crate::app::services::fstab_parser::LineParser;
use crate::constants::{FIELD_COUNT, LIST_SEPARATOR, OCTAL_ESCAPES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Mount Entry Structure
// =============================================================================

/// One filesystem described by a non-comment, non-blank mount-table line
///
/// Entries are produced by the parser and never modified afterwards.
/// `types` and `options` always hold at least one element, because splitting
/// an empty field on `,` still yields one empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MountEntry {
    /// Block device, remote filesystem or pseudo-filesystem name (field 1)
    pub name: String,

    /// Mount point; `none` for swap (field 2)
    pub directory: String,

    /// Filesystem types in source order, e.g. `["udf", "iso9660"]` (field 3)
    pub types: Vec<String>,

    /// Mount options in source order (field 4)
    pub options: Vec<String>,

    /// Legacy `dump(8)` backup hint (field 5)
    pub dump_frequency: u32,

    /// `fsck(8)` pass ordering; 0 means not checked (field 6)
    pub pass_number: u32,
}

impl MountEntry {
    /// Check whether the entry lists the given filesystem type
    pub fn has_type(&self, fs_type: &str) -> bool {
        self.types.iter().any(|t| t == fs_type)
    }

    /// Check whether an option is present, either bare (`noauto`) or as the
    /// key of a `key=value` option (`errors`)
    pub fn has_option(&self, option: &str) -> bool {
        self.options
            .iter()
            .any(|o| o == option || o.split_once('=').is_some_and(|(key, _)| key == option))
    }

    /// Value of a `key=value` option, e.g. `remount-ro` for `errors`
    ///
    /// The first matching option wins.
    pub fn option_value(&self, key: &str) -> Option<&str> {
        self.options.iter().find_map(|o| match o.split_once('=') {
            Some((k, value)) if k == key => Some(value),
            _ => None,
        })
    }
}

/// Re-escape a field so that it survives whitespace splitting
fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match OCTAL_ESCAPES.iter().find(|(_, decoded)| *decoded == c) {
            Some((sequence, _)) => escaped.push_str(sequence),
            None => escaped.push(c),
        }
    }
    escaped
}

fn escape_list(values: &[String]) -> String {
    let mut buf = [0; 4];
    let separator: &str = LIST_SEPARATOR.encode_utf8(&mut buf);
    values
        .iter()
        .map(|v| escape_field(v))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Writes the entry back as a single tab-separated mount-table line
impl fmt::Display for MountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            escape_field(&self.name),
            escape_field(&self.directory),
            escape_list(&self.types),
            escape_list(&self.options),
            self.dump_frequency,
            self.pass_number
        )
    }
}

/// Parses exactly one entry line with escape decoding enabled
///
/// Comment and blank lines hold no fields and are rejected.
impl FromStr for MountEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LineParser::default()
            .parse_line(s)?
            .ok_or_else(|| Error::field_count(FIELD_COUNT, 0))
    }
}

// =============================================================================
// Numeric Columns
// =============================================================================

/// Identifies which numeric column a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum NumericField {
    /// Field 5
    DumpFrequency,
    /// Field 6
    PassNumber,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::DumpFrequency => write!(f, "dump frequency"),
            NumericField::PassNumber => write!(f, "pass number"),
        }
    }
}
