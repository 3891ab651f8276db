//! Parsing statistics and result structures for mount-table processing
//!
//! This module provides types for counting what kind of lines a mount table
//! contained alongside the parsed entries.

use crate::app::models::MountEntry;

/// Parsing result with entries and line statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Parsed entries in file order
    pub entries: Vec<MountEntry>,

    /// Line counters for the parse
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Physical lines read, including an unterminated final line
    pub lines_read: usize,

    /// Lines skipped because they start with `#`
    pub comment_lines: usize,

    /// Empty or whitespace-only lines skipped
    pub blank_lines: usize,

    /// Entries produced
    pub entries_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that carried no entry
    pub fn lines_skipped(&self) -> usize {
        self.comment_lines + self.blank_lines
    }
}
