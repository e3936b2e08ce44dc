//! Human-readable byte sizes
//!
//! Units are powers of 1024: bytes, KB, MB, GB and TB.

use std::fmt;

pub const ONE_KB: u64 = 1024;
pub const ONE_MB: u64 = ONE_KB * 1024;
pub const ONE_GB: u64 = ONE_MB * 1024;
pub const ONE_TB: u64 = ONE_GB * 1024;

const UNITS: [(u64, &str); 4] = [(ONE_TB, "TB"), (ONE_GB, "GB"), (ONE_MB, "MB"), (ONE_KB, "KB")];

/// A byte count that displays as `"<n> <unit>"`
///
/// The largest unit not exceeding the count is used, and the scaled value is
/// rounded to the nearest integer. A value that rounds up to 1024 is shown
/// in the next unit instead (`1_048_575` is `"1 MB"`, not `"1024 KB"`).
///
/// # Examples
/// ```
/// use file_utils::{DisplaySize, PathBuffer};
/// use std::fmt::Write;
///
/// let mut buf = PathBuffer::new(64);
/// write!(buf, "{}", DisplaySize(128_000)).unwrap();
/// assert_eq!(buf.as_str(), "125 KB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplaySize(pub u64);

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        for (i, &(unit, name)) in UNITS.iter().enumerate() {
            if bytes < unit {
                continue;
            }
            let rounded = round_div(bytes, unit);
            if rounded >= u128::from(ONE_KB) && i > 0 {
                let (larger, larger_name) = UNITS[i - 1];
                return write!(f, "{} {}", round_div(bytes, larger), larger_name);
            }
            return write!(f, "{} {}", rounded, name);
        }
        write!(f, "{} bytes", bytes)
    }
}

fn round_div(bytes: u64, unit: u64) -> u128 {
    (u128::from(bytes) + u128::from(unit / 2)) / u128::from(unit)
}

/// Formats a byte count for display
///
/// # Examples
/// ```
/// use file_utils::byte_count_to_display_size;
///
/// assert_eq!(byte_count_to_display_size(128), "128 bytes");
/// assert_eq!(byte_count_to_display_size(128_000_000), "122 MB");
/// ```
pub fn byte_count_to_display_size(bytes: u64) -> String {
    DisplaySize(bytes).to_string()
}

fn unit_multiplier(suffix: &str) -> u64 {
    match suffix.to_ascii_lowercase().as_str() {
        "kb" | "k" => ONE_KB,
        "mb" | "m" => ONE_MB,
        "gb" | "g" => ONE_GB,
        "tb" | "t" => ONE_TB,
        _ => 1,
    }
}

/// Parses a size such as `"1 GB"`, `" 10kb "` or `"512"` into bytes
///
/// Whitespace and control characters around the number and unit are
/// ignored and units are case-insensitive. An unknown unit leaves the number
/// as a raw byte count; input without leading digits yields 0. Results that
/// do not fit in `u64` saturate.
///
/// # Examples
/// ```
/// use file_utils::display_size_to_bytes;
///
/// assert_eq!(display_size_to_bytes("1 TB"), 1_099_511_627_776);
/// assert_eq!(display_size_to_bytes("   1  mb  "), 1_048_576);
/// assert_eq!(display_size_to_bytes("123 RP"), 123);
/// assert_eq!(display_size_to_bytes("ab"), 0);
/// ```
pub fn display_size_to_bytes(input: &str) -> u64 {
    let is_padding = |c: char| c.is_whitespace() || c.is_control();
    let trimmed = input.trim_matches(is_padding);

    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_end == 0 {
        return 0;
    }

    let value = trimmed[..digits_end]
        .bytes()
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });
    let suffix = trimmed[digits_end..].trim_matches(is_padding);
    value.saturating_mul(unit_multiplier(suffix))
}
