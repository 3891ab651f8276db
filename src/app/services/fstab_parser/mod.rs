//! Mount-table parser for `/etc/fstab` style files
//!
//! This module turns mount-table text into [`MountEntry`](crate::MountEntry)
//! records. Parsing is strict: any malformed entry line aborts the whole
//! file, and the error reports the line it was found on.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File opening, line-by-line reading and result accumulation
//! - [`line_parser`] - Turning one raw line into an entry, a skip, or an error
//! - [`field_parsers`] - Escape decoding, list splitting and numeric columns
//! - [`stats`] - Line counters and the report structure
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mntent::app::services::fstab_parser::FstabParser;
//!
//! # fn example() -> mntent::Result<()> {
//! let parser = FstabParser::default();
//! let report = parser.parse_file_with_stats(std::path::Path::new("/etc/fstab"))?;
//!
//! println!("Parsed {} entries from {} lines",
//!          report.stats.entries_parsed,
//!          report.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod line_parser;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_parsers::InvalidNumber;
pub use line_parser::{LineParser, parse_line};
pub use parser::{FstabParser, parse, parse_reader, parse_str};
pub use stats::{ParseReport, ParseStats};
