//! Path normalization functions
//!
//! A normalized path uses one separator character, never repeats it, keeps a
//! leading separator and drops a trailing one. `.` and `..` segments are left
//! untouched.

use crate::buffer::PathBuffer;
use crate::config::{PathConfig, Separator};

/// Normalize `raw` into `out`, replacing its previous content
///
/// Both `/` and `\` are treated as separators and rewritten to `separator`.
/// Writes never exceed `out`'s capacity; when the result does not fit it is
/// cut at the last whole character and `out.is_truncated()` reports it.
///
/// Returns `false` if the result was truncated.
///
/// # Examples
/// ```
/// use file_utils::{normalize_into, PathBuffer, Separator};
///
/// let mut buf = PathBuffer::new(64);
/// assert!(normalize_into("a//b\\c/", Separator::Unix, &mut buf));
/// assert_eq!(buf.as_str(), "a/b/c");
/// ```
pub fn normalize_into(raw: &str, separator: Separator, out: &mut PathBuffer) -> bool {
    out.clear();
    let sep = separator.as_char();
    let mut last_was_separator = false;

    for ch in raw.chars() {
        let written = if Separator::is_separator(ch) {
            if last_was_separator {
                continue;
            }
            last_was_separator = true;
            out.push(sep)
        } else {
            last_was_separator = false;
            out.push(ch)
        };
        if !written {
            break;
        }
    }

    // A lone separator is the root and stays.
    if out.len() > 1 && out.ends_with(sep) {
        out.pop();
    }
    !out.is_truncated()
}

/// Normalize a path string using `config`
///
/// # Examples
/// ```
/// use file_utils::{normalize_with, PathConfig, Separator};
///
/// let config = PathConfig::default().with_separator(Separator::Windows);
/// assert_eq!(normalize_with("/dir1//dir2/", &config), "\\dir1\\dir2");
/// ```
pub fn normalize_with(raw: &str, config: &PathConfig) -> String {
    let mut buf = PathBuffer::new(config.max_len);
    if !normalize_into(raw, config.separator, &mut buf) {
        log::warn!(
            "path truncated to {} bytes during normalization",
            config.max_len
        );
    }
    buf.into_string()
}

/// Normalize a path string for the build target
///
/// This is the canonical normalization function for string-based path
/// operations.
///
/// # Examples
/// ```
/// use file_utils::{normalize_path_str, FILE_SEPARATOR_STR as SEP};
///
/// assert_eq!(normalize_path_str("a//b"), format!("a{SEP}b"));
/// assert_eq!(normalize_path_str("a\\b/"), format!("a{SEP}b"));
/// assert_eq!(normalize_path_str(""), "");
/// ```
pub fn normalize_path_str(path: &str) -> String {
    normalize_with(path, &PathConfig::default())
}

/// Join two path strings and normalize the result
///
/// The child's leading separator is dropped so the join boundary never
/// doubles up. An empty base yields the normalized child, an empty child the
/// normalized base.
///
/// # Examples
/// ```
/// use file_utils::{join_and_normalize, PathConfig, Separator};
///
/// let config = PathConfig::default().with_separator(Separator::Unix);
/// assert_eq!(join_and_normalize("source/", "/main.rs", &config), "source/main.rs");
/// assert_eq!(join_and_normalize("/", "etc", &config), "/etc");
/// ```
pub fn join_and_normalize(base: &str, child: &str, config: &PathConfig) -> String {
    let sep = config.separator.as_char();
    let base = normalize_with(base, config);
    let child = normalize_with(child, config);
    let child = child.strip_prefix(sep).unwrap_or(&child);

    if base.is_empty() {
        return child.to_string();
    }
    if child.is_empty() {
        return base;
    }

    let mut buf = PathBuffer::new(config.max_len);
    buf.push_str(&base);
    if !base.ends_with(sep) {
        buf.push(sep);
    }
    buf.push_str(child);
    if buf.is_truncated() {
        log::warn!("joined path truncated to {} bytes", config.max_len);
        if buf.len() > 1 && buf.ends_with(sep) {
            buf.pop();
        }
    }
    buf.into_string()
}
