//! Field parsing utilities for mount-table lines
//!
//! This module provides helper functions for decoding and converting the
//! individual fields of a split mount-table line.

use crate::app::models::NumericField;
use crate::constants::{LIST_SEPARATOR, MAX_NUMERIC_FIELD, OCTAL_ESCAPES};
use crate::{Error, Result};

/// Why a numeric column failed to parse
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNumber {
    /// Anything other than plain ASCII digits, including signs
    #[error("invalid digit in {value:?}")]
    InvalidDigit { value: String },

    /// Digits only, but larger than 31 bits allow
    #[error("value {value:?} out of range (maximum 2147483647)")]
    OutOfRange { value: String },
}

/// Decode the octal escapes `\011`, `\012`, `\040` and `\134` in a field
///
/// Decoding is a single left-to-right pass: the backslash produced by `\134`
/// is never combined with the text that follows it.
pub fn unescape_field(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('\\') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match OCTAL_ESCAPES
            .iter()
            .find(|(sequence, _)| rest.starts_with(sequence))
        {
            Some((sequence, c)) => {
                decoded.push(*c);
                rest = &rest[sequence.len()..];
            }
            None => {
                decoded.push('\\');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);

    decoded
}

/// Split a type or option field on `,`, keeping empty pieces and order
pub fn split_list(value: &str) -> Vec<String> {
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Parse an unsigned base-10 integer that must fit in 31 bits
pub fn parse_u31(value: &str) -> std::result::Result<u32, InvalidNumber> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidNumber::InvalidDigit {
            value: value.to_string(),
        });
    }

    // Digits only, so the only possible failure left is overflow
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n <= MAX_NUMERIC_FIELD)
        .ok_or_else(|| InvalidNumber::OutOfRange {
            value: value.to_string(),
        })
}

/// Parse one of the numeric columns, naming the column on failure
pub fn parse_numeric_field(value: &str, field: NumericField) -> Result<u32> {
    parse_u31(value).map_err(|e| Error::number_format(field, e))
}
