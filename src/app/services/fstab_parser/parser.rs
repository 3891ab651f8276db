//! Core mount-table parser implementation
//!
//! This module provides the main parser orchestration: opening the file,
//! reading it line by line, and accumulating entries from the line parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::line_parser::{LineParser, ParsedLine};
use super::stats::{ParseReport, ParseStats};
use crate::app::models::MountEntry;
use crate::config::ParserConfig;
use crate::constants::DEFAULT_ENTRY_CAPACITY;
use crate::{Error, Result};

/// Mount-table parser for `/etc/fstab` style files
///
/// Parsing is all-or-nothing:
/// - Comment and blank lines are skipped
/// - The first malformed line aborts the parse with its line number attached
/// - A final line without a trailing newline is still parsed
///
/// Input must be UTF-8. A table containing other bytes (for example a
/// non-UTF-8 mount point) fails with an [`Error::Io`] of kind `InvalidData`.
#[derive(Debug, Clone, Default)]
pub struct FstabParser {
    line_parser: LineParser,
}

impl FstabParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self {
            line_parser: LineParser::new(config),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ParserConfig {
        self.line_parser.config()
    }

    /// Parse the configured default mount table (normally `/etc/fstab`)
    pub fn parse_default(&self) -> Result<Vec<MountEntry>> {
        self.parse_file(&self.config().default_path)
    }

    /// Parse a mount-table file and return its entries in file order
    pub fn parse_file(&self, file_path: &Path) -> Result<Vec<MountEntry>> {
        Ok(self.parse_file_with_stats(file_path)?.entries)
    }

    /// Parse a mount-table file and return entries with line statistics
    pub fn parse_file_with_stats(&self, file_path: &Path) -> Result<ParseReport> {
        debug!("Parsing mount table: {}", file_path.display());

        // The handle is dropped on every return path below
        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        let report = self.parse_reader_with_stats(BufReader::new(file))?;

        debug!(
            "Parsed {} entries from {} lines",
            report.stats.entries_parsed, report.stats.lines_read
        );
        Ok(report)
    }

    /// Parse mount-table text from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<MountEntry>> {
        Ok(self.parse_reader_with_stats(reader)?.entries)
    }

    /// Parse mount-table text held in memory
    pub fn parse_str(&self, content: &str) -> Result<Vec<MountEntry>> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse mount-table text from a reader, counting each kind of line
    pub fn parse_reader_with_stats<R: BufRead>(&self, mut reader: R) -> Result<ParseReport> {
        let mut stats = ParseStats::new();
        let mut entries = Vec::with_capacity(DEFAULT_ENTRY_CAPACITY);
        let mut line = String::new();

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).map_err(|e| {
                Error::io(format!("Failed to read line {}", stats.lines_read + 1), e)
            })?;

            // read_line only returns 0 at end of stream; an unterminated
            // final fragment comes back as a normal non-empty read first
            if bytes_read == 0 {
                break;
            }
            stats.lines_read += 1;

            let parsed = self
                .line_parser
                .classify(&line)
                .map_err(|e| e.at_line(stats.lines_read))?;

            match parsed {
                ParsedLine::Entry(entry) => {
                    entries.push(entry);
                    stats.entries_parsed += 1;
                }
                ParsedLine::Comment => stats.comment_lines += 1,
                ParsedLine::Blank => stats.blank_lines += 1,
            }
        }

        debug!(
            "Read {} lines: {} entries, {} comments, {} blank",
            stats.lines_read, stats.entries_parsed, stats.comment_lines, stats.blank_lines
        );

        Ok(ParseReport { entries, stats })
    }
}

/// Parse a mount-table file with the default configuration
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<MountEntry>> {
    FstabParser::default().parse_file(path.as_ref())
}

/// Parse mount-table text from a buffered reader with the default configuration
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<MountEntry>> {
    FstabParser::default().parse_reader(reader)
}

/// Parse in-memory mount-table text with the default configuration
pub fn parse_str(content: &str) -> Result<Vec<MountEntry>> {
    FstabParser::default().parse_str(content)
}
