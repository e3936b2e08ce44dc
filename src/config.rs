//! Path and walk configuration
//!
//! The separator is an explicit value rather than a compile-time constant so
//! both conventions can be exercised from a single build.

use std::fmt;

/// Default capacity ceiling, in bytes, for a normalized path.
pub const PATH_MAX_LEN: usize = 4096;

/// Separator character of the build target.
pub const FILE_SEPARATOR: char = Separator::platform().as_char();

/// Separator of the build target as a string, handy for composing expected paths.
pub const FILE_SEPARATOR_STR: &str = Separator::platform().as_str();

/// The single character used to join path segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Forward slash (`/`)
    Unix,
    /// Backslash (`\`)
    Windows,
}

impl Separator {
    /// Separator of the build target
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Separator::Windows
        } else {
            Separator::Unix
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Separator::Unix => '/',
            Separator::Windows => '\\',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::Unix => "/",
            Separator::Windows => "\\",
        }
    }

    /// Whether `ch` is recognized as a separator in raw input.
    ///
    /// Both conventions are accepted regardless of the configured separator.
    pub const fn is_separator(ch: char) -> bool {
        ch == '/' || ch == '\\'
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings threaded through normalization and composition
///
/// # Examples
/// ```
/// use file_utils::{PathConfig, Separator};
///
/// let config = PathConfig::default().with_separator(Separator::Windows);
/// assert_eq!(config.separator, Separator::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConfig {
    /// Separator written into every normalized path
    pub separator: Separator,
    /// Maximum byte length of a normalized path; longer results are truncated
    pub max_len: usize,
}

impl PathConfig {
    pub const fn new(separator: Separator, max_len: usize) -> Self {
        Self { separator, max_len }
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new(Separator::platform(), PATH_MAX_LEN)
    }
}

/// Whether a walk yields a directory before or after its contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    #[default]
    PreOrder,
    PostOrder,
}

/// What a tree walk yields
///
/// # Examples
/// ```
/// use file_utils::{WalkOptions, WalkOrder};
///
/// let options = WalkOptions::files_and_dirs().recursive(true);
/// assert!(options.include_dirs);
/// assert_eq!(options.order, WalkOrder::PreOrder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkOptions {
    /// Include directory entries in the result (files are always included)
    pub include_dirs: bool,
    /// Descend into subdirectories
    pub recursive: bool,
    pub order: WalkOrder,
}

impl WalkOptions {
    /// Regular files only, top level only
    pub const fn files() -> Self {
        Self {
            include_dirs: false,
            recursive: false,
            order: WalkOrder::PreOrder,
        }
    }

    /// Files and directories, top level only
    pub const fn files_and_dirs() -> Self {
        Self {
            include_dirs: true,
            recursive: false,
            order: WalkOrder::PreOrder,
        }
    }

    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub const fn order(mut self, order: WalkOrder) -> Self {
        self.order = order;
        self
    }
}
