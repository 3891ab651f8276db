//! mntent Library
//!
//! A Rust library for reading mount-table files in the `/etc/fstab` line format
//! into structured [`MountEntry`] records.
//!
//! This library provides tools for:
//! - Splitting mount-table lines into their six whitespace-separated fields
//! - Decoding the octal escapes (`\040`, `\011`, `\012`, `\134`) used inside fields
//! - Validating the dump frequency and pass number columns
//! - Reporting malformed lines with the line number they were found on
//!
//! ```no_run
//! let entries = mntent::parse("/etc/fstab")?;
//! for entry in &entries {
//!     println!("{} on {} ({})", entry.name, entry.directory, entry.types.join(","));
//! }
//! # Ok::<(), mntent::Error>(())
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fstab_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{MountEntry, NumericField};
pub use app::services::fstab_parser::{
    FstabParser, InvalidNumber, LineParser, ParseReport, ParseStats, parse, parse_line,
    parse_reader, parse_str,
};
pub use config::ParserConfig;

/// Result type alias for mount-table parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mount-table parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed (open or read)
    #[error("I/O error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into the expected number of fields
    #[error("each line must consist of {expected} fields but got {found}")]
    FieldCount { expected: usize, found: usize },

    /// A numeric column could not be parsed
    #[error("can't parse {field} field: {source}")]
    NumberFormat {
        field: NumericField,
        #[source]
        source: InvalidNumber,
    },

    /// A line-level error, tagged with the 1-based line it came from
    #[error("line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}: {source}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a field count error
    pub fn field_count(expected: usize, found: usize) -> Self {
        Self::FieldCount { expected, found }
    }

    /// Create a number format error for one of the numeric columns
    pub fn number_format(field: NumericField, source: InvalidNumber) -> Self {
        Self::NumberFormat { field, source }
    }

    /// Attach a line number to a line-level error
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            // I/O failures are not about a particular line's content
            Self::Io { .. } | Self::Line { .. } => self,
            other => Self::Line {
                line_number,
                source: Box::new(other),
            },
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Line number the error was raised on, if known
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Line { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// The underlying line-level error, looking through any line number tag
    pub fn kind_of_line_error(&self) -> &Error {
        match self {
            Self::Line { source, .. } => source.kind_of_line_error(),
            other => other,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
