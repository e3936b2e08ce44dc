//! The `File` path value
//!
//! A [`File`] names a filesystem location that may or may not exist. It is
//! built by normalizing a raw string or by composing a parent with a child,
//! and never touches the filesystem unless one of the kind queries is used.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::config::PathConfig;
use crate::normalize::{join_and_normalize, normalize_with};

/// Kind of an existing filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    File,
    Directory,
    /// Anything else the OS reports (sockets, devices, dangling links)
    Other,
}

impl FileKind {
    pub(crate) fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        }
    }
}

/// A normalized path plus a lazily filled kind cache
///
/// Two `File`s are equal when their paths are equal; the cache is ignored.
///
/// # Examples
/// ```
/// use file_utils::{File, FILE_SEPARATOR_STR as SEP};
///
/// let dir = File::new("/dir1/dir2/");
/// let file = dir.child("\\dir3\\file.txt");
/// assert_eq!(file.path(), format!("{SEP}dir1{SEP}dir2{SEP}dir3{SEP}file.txt"));
/// assert_eq!(file.parent().parent(), dir);
/// assert_eq!(file.file_name(), "file.txt");
/// ```
#[derive(Debug, Clone, Default)]
pub struct File {
    path: String,
    config: PathConfig,
    kind: Cell<Option<FileKind>>,
}

impl File {
    /// Creates a `File` for the build target's separator.
    ///
    /// An empty `raw` gives the empty File.
    pub fn new(raw: &str) -> Self {
        Self::with_config(raw, PathConfig::default())
    }

    /// Creates a `File` normalized with `config`
    pub fn with_config(raw: &str, config: PathConfig) -> Self {
        Self::from_normalized(normalize_with(raw, &config), config)
    }

    /// The empty File, meaning "no path" or "no parent"
    pub fn empty(config: PathConfig) -> Self {
        Self::from_normalized(String::new(), config)
    }

    fn from_normalized(path: String, config: PathConfig) -> Self {
        Self {
            path,
            config,
            kind: Cell::new(None),
        }
    }

    /// Composes `raw` below this File.
    ///
    /// An empty `raw` yields the empty File rather than a copy of `self`.
    /// A separator at the join boundary is never doubled.
    ///
    /// # Examples
    /// ```
    /// use file_utils::{File, PathConfig, Separator};
    ///
    /// let root = File::with_config("/dir1/dir2/", PathConfig::default().with_separator(Separator::Unix));
    /// assert_eq!(root.child("/dir3").path(), "/dir1/dir2/dir3");
    /// assert!(root.child("").is_empty());
    /// ```
    pub fn child(&self, raw: &str) -> File {
        if raw.is_empty() {
            return File::empty(self.config);
        }
        Self::from_normalized(join_and_normalize(&self.path, raw, &self.config), self.config)
    }

    /// Everything before the last separator.
    ///
    /// The parent of `/a` is `/`. A File without a separator, or the root
    /// itself, has the empty File as its parent.
    pub fn parent(&self) -> File {
        let sep = self.config.separator.as_char();
        let parent = match self.path.rfind(sep) {
            Some(0) if self.path.len() > 1 => &self.path[..1],
            Some(index) if index > 0 => &self.path[..index],
            _ => "",
        };
        Self::from_normalized(parent.to_string(), self.config)
    }

    /// Path of [`parent`](Self::parent) as a string
    pub fn parent_name(&self) -> String {
        self.parent().path
    }

    /// The final path segment; the whole path when it has no separator
    pub fn file_name(&self) -> &str {
        let sep = self.config.separator.as_char();
        match self.path.rfind(sep) {
            Some(index) => &self.path[index + sep.len_utf8()..],
            None => &self.path,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Byte length of the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn config(&self) -> PathConfig {
        self.config
    }

    /// The part of this path below `base`, without a leading separator.
    ///
    /// Returns `Some("")` when both paths are equal and `None` when this File
    /// is not inside `base`. The comparison is textual.
    pub fn relative_to(&self, base: &File) -> Option<&str> {
        let sep = self.config.separator.as_char();
        let rest = self.path.strip_prefix(base.path.as_str())?;
        if rest.is_empty() || base.path.ends_with(sep) {
            return Some(rest);
        }
        rest.strip_prefix(sep)
    }

    /// Whether this File equals `base` or lies below it
    pub fn is_within(&self, base: &File) -> bool {
        !base.is_empty() && self.relative_to(base).is_some()
    }

    /// Kind from the cache, querying the filesystem on a miss.
    ///
    /// `None` means the path does not exist (or cannot be inspected).
    pub fn kind(&self) -> Option<FileKind> {
        match self.kind.get() {
            Some(kind) => Some(kind),
            None => self.refresh_kind(),
        }
    }

    /// Kind last observed, without touching the filesystem
    pub fn cached_kind(&self) -> Option<FileKind> {
        self.kind.get()
    }

    /// Re-queries the filesystem and updates the cache
    pub fn refresh_kind(&self) -> Option<FileKind> {
        let kind = std::fs::metadata(&self.path)
            .ok()
            .map(|meta| FileKind::from_file_type(meta.file_type()));
        self.kind.set(kind);
        kind
    }

    pub(crate) fn with_kind(self, kind: FileKind) -> Self {
        self.kind.set(Some(kind));
        self
    }

    pub fn exists(&self) -> bool {
        self.refresh_kind().is_some()
    }

    /// Whether the path currently names a regular file
    pub fn is_file(&self) -> bool {
        self.refresh_kind() == Some(FileKind::File)
    }

    /// Whether the path currently names a directory
    pub fn is_directory(&self) -> bool {
        self.refresh_kind() == Some(FileKind::Directory)
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for File {}

impl Hash for File {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for File {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<&str> for File {
    fn from(raw: &str) -> Self {
        File::new(raw)
    }
}
