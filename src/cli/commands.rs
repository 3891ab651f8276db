//! Command implementations for the mntent CLI
//!
//! This module contains the command execution logic: logging setup,
//! parsing the requested mount table, and printing the entries.

use crate::app::models::MountEntry;
use crate::app::services::fstab_parser::{FstabParser, ParseReport};
use crate::cli::args::{Args, OutputFormat};
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Main command runner
///
/// Sets up logging, parses the mount table named by the arguments (or the
/// default one) and prints the entries in the requested format.
pub fn run(args: Args) -> Result<ParseReport> {
    setup_logging(&args);

    let config = args.parser_config();
    config.validate()?;

    let parser = FstabParser::new(config);
    let report = parser.parse_file_with_stats(&parser.config().default_path)?;

    let output = match args.format {
        OutputFormat::Human => render_human(&report.entries),
        OutputFormat::Json => render_json(&report.entries)?,
    };
    print!("{}", output);

    Ok(report)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // try_init: a subscriber may already be installed (e.g. under test)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Format entries as a human-readable listing
pub fn render_human(entries: &[MountEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!("FS name: {}\n", entry.name.bright_white().bold()));
        out.push_str(&format!("\tDir: {}\n", entry.directory));
        out.push_str(&format!("\tTypes: {:?}\n", entry.types));
        out.push_str(&format!("\tOptions: {}\n", entry.options.join(",")));
        out.push_str(&format!("\tDump frequency: {}\n", entry.dump_frequency));
        out.push_str(&format!("\tFSCK pass number: {}\n", entry.pass_number));
    }

    out
}

/// Format entries as a pretty-printed JSON array
pub fn render_json(entries: &[MountEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)
        .map_err(|e| Error::serialization("Failed to serialize entries", e))?;
    json.push('\n');
    Ok(json)
}
