//! Command-line argument definitions for mntent
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the mount-table lister
///
/// Reads a mount table in `/etc/fstab` format and prints each entry.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mntent",
    version,
    about = "List the entries of an /etc/fstab style mount table",
    long_about = "Parses a mount table in the fstab(5) line format and prints each \
                  filesystem with its mount point, types, options, dump frequency \
                  and fsck pass number. Malformed lines are reported with their \
                  line number and abort the listing."
)]
pub struct Args {
    /// Mount table to read
    ///
    /// If not specified, defaults to /etc/fstab
    #[arg(value_name = "PATH", help = "Mount table to read (default: /etc/fstab)")]
    pub path: Option<PathBuf>,

    /// Keep octal escapes such as \040 as written instead of decoding them
    #[arg(long = "raw", help = "Do not decode \\040-style escapes in fields")]
    pub raw: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Human,
    /// JSON array of entries
    Json,
}

impl Args {
    /// Get log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the parser configuration these arguments ask for
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::default().with_escape_decoding(!self.raw);
        match &self.path {
            Some(path) => config.with_default_path(path.clone()),
            None => config,
        }
    }
}
