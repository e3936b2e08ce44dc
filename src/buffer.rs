//! Fixed-capacity string buffer
//!
//! Normalized paths and formatted sizes are written into a [`PathBuffer`].
//! Writes past capacity are dropped at the last whole character that fits
//! and the buffer remembers it was truncated.

use std::fmt;
use std::ops::Deref;

/// Bounded, mutable string with length tracking
///
/// # Examples
/// ```
/// use file_utils::PathBuffer;
///
/// let mut buf = PathBuffer::new(5);
/// assert!(buf.push_str("abc"));
/// assert!(!buf.push_str("def"));
/// assert_eq!(buf.as_str(), "abcde");
/// assert!(buf.is_truncated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuffer {
    value: String,
    capacity: usize,
    truncated: bool,
}

impl PathBuffer {
    /// Creates an empty buffer holding at most `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            value: String::new(),
            capacity,
            truncated: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Bytes still available before the capacity is reached
    pub fn remaining(&self) -> usize {
        self.capacity - self.value.len()
    }

    /// Whether any write since the last [`clear`](Self::clear) was cut short
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Appends one character. Returns `false` if it did not fit.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.len_utf8() > self.remaining() {
            self.truncated = true;
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Appends as much of `s` as fits. Returns `false` if anything was dropped.
    pub fn push_str(&mut self, s: &str) -> bool {
        if s.len() <= self.remaining() {
            self.value.push_str(s);
            return true;
        }
        let mut end = self.remaining();
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.value.push_str(&s[..end]);
        self.truncated = true;
        false
    }

    pub fn pop(&mut self) -> Option<char> {
        self.value.pop()
    }

    pub fn ends_with(&self, ch: char) -> bool {
        self.value.ends_with(ch)
    }

    /// Empties the buffer and resets the truncation flag
    pub fn clear(&mut self) {
        self.value.clear();
        self.truncated = false;
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Deref for PathBuffer {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for PathBuffer {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for PathBuffer {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for PathBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for PathBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// Overflow truncates instead of failing so `write!` never errors; check
// `is_truncated` afterwards.
impl fmt::Write for PathBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
