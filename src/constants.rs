//! Application constants for mntent
//!
//! This module contains the format constants and default values used
//! throughout the mount-table parser.

// =============================================================================
// Mount-Table Line Format
// =============================================================================

/// Number of whitespace-separated fields on every mount-table entry line
pub const FIELD_COUNT: usize = 6;

/// Lines starting with this character (after trimming) are comments
pub const COMMENT_PREFIX: char = '#';

/// Separator inside the filesystem type and mount option fields
pub const LIST_SEPARATOR: char = ',';

/// Largest value accepted in the dump frequency and pass number columns (31 bits)
pub const MAX_NUMERIC_FIELD: u32 = (1 << 31) - 1;

/// Zero-based positions of each field within a split line
pub mod field_index {
    pub const NAME: usize = 0;
    pub const DIRECTORY: usize = 1;
    pub const TYPES: usize = 2;
    pub const OPTIONS: usize = 3;
    pub const DUMP_FREQUENCY: usize = 4;
    pub const PASS_NUMBER: usize = 5;
}

// =============================================================================
// Escape Sequences
// =============================================================================

/// Octal escapes recognised inside fields, and the characters they stand for
///
/// `getmntent(3)` decodes exactly these four; any other backslash sequence is
/// left as written.
pub const OCTAL_ESCAPES: &[(&str, char)] = &[
    ("\\011", '\t'),
    ("\\012", '\n'),
    ("\\040", ' '),
    ("\\134", '\\'),
];

// =============================================================================
// Defaults
// =============================================================================

/// Default mount table location
pub const DEFAULT_FSTAB_PATH: &str = "/etc/fstab";

/// Initial capacity of the entry list; most tables are short
pub const DEFAULT_ENTRY_CAPACITY: usize = 4;

/// Log filter target for the binary
pub const LOG_TARGET: &str = "mntent";
