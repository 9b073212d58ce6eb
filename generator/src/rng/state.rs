//! Text form of the generator state
//!
//! Exported state is `0x` followed by exactly 16 lowercase hex digits.
//! Import follows `strtoull` base-16 conventions: leading whitespace, an
//! optional sign and an optional `0x`/`0X` prefix are accepted, and any
//! character left over after the digits is an error.

use thiserror::Error;

/// Length of an exported state string (`0x` + 16 digits)
pub const STATE_STRING_LEN: usize = 18;

/// Errors that can occur while importing a state string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateParseError {
    #[error("No hexadecimal digits in state string {input:?}")]
    NoDigits { input: String },

    #[error("Unexpected trailing characters {trailing:?} in state string")]
    TrailingCharacters { trailing: String },

    #[error("State value 0x{digits} does not fit in 64 bits")]
    Overflow { digits: String },
}

/// Format a state value as `0x` plus 16 zero-padded lowercase hex digits
pub fn format_state(state: u64) -> String {
    format!("{:#018x}", state)
}

/// Write the formatted state into a bounded byte buffer
///
/// Behaves like `snprintf`: at most `buf.len() - 1` characters are copied
/// followed by a NUL byte, and an empty buffer is left untouched. Returns
/// the length of the untruncated text, so a return value `>= buf.len()`
/// means the output was cut short.
pub fn write_state(state: u64, buf: &mut [u8]) -> usize {
    let text = format_state(state);
    if let Some(capacity) = buf.len().checked_sub(1) {
        let n = capacity.min(text.len());
        buf[..n].copy_from_slice(&text.as_bytes()[..n]);
        buf[n] = 0;
    }
    text.len()
}

/// Parse a base-16 state string
///
/// Stricter than `strtoull`: input without hex digits (including `""`) and
/// values wider than 64 bits are errors rather than 0 or `u64::MAX`.
pub fn parse_state(input: &str) -> Result<u64, StateParseError> {
    // C isspace() set, which includes vertical tab
    let trimmed =
        input.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    // The prefix only counts when a hex digit follows it; "0x" alone parses
    // as the digit 0 with a trailing 'x'.
    let digits = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(after) if after.starts_with(|c: char| c.is_ascii_hexdigit()) => after,
        _ => unsigned,
    };

    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());

    if end == 0 {
        return Err(StateParseError::NoDigits {
            input: input.to_string(),
        });
    }
    if end < digits.len() {
        return Err(StateParseError::TrailingCharacters {
            trailing: digits[end..].to_string(),
        });
    }

    let value = u64::from_str_radix(digits, 16).map_err(|_| StateParseError::Overflow {
        digits: digits.to_string(),
    })?;

    Ok(if negative { value.wrapping_neg() } else { value })
}
