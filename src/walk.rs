//! Directory tree enumeration
//!
//! Every entry found below a root becomes a [`File`] composed from the root,
//! with its kind taken from the directory entry so callers do not have to
//! stat it again.

use walkdir::WalkDir;

use crate::config::{WalkOptions, WalkOrder};
use crate::error::{PathError, Result};
use crate::file::{File, FileKind};

/// Appends the entries below `root` to `out`.
///
/// Siblings are visited in file-name order. Links below `root` are listed
/// as entries and not followed.
///
/// Fails with [`PathError::NotFound`] or [`PathError::NotADirectory`] before
/// appending anything if `root` cannot be walked. An I/O error further down
/// stops the walk; entries found so far stay in `out`.
pub fn walk_into(root: &File, options: WalkOptions, out: &mut Vec<File>) -> Result<()> {
    match root.refresh_kind() {
        Some(FileKind::Directory) => {}
        Some(_) => {
            return Err(PathError::NotADirectory {
                path: root.path().to_string(),
            })
        }
        None if root.is_empty() => return Err(PathError::EmptyPath),
        None => {
            return Err(PathError::NotFound {
                path: root.path().to_string(),
            })
        }
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root.as_path())
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .contents_first(options.order == WalkOrder::PostOrder);

    for entry in walker {
        let entry = entry?;
        let kind = FileKind::from_file_type(entry.file_type());
        if kind == FileKind::Directory && !options.include_dirs {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root.as_path())
            .map_err(|_| PathError::ConstructionFailed {
                message: format!(
                    "entry {} is not below {}",
                    entry.path().display(),
                    root.path()
                ),
            })?;
        out.push(root.child(&relative.to_string_lossy()).with_kind(kind));
    }
    Ok(())
}

/// Collects the entries below `root`
///
/// # Examples
/// ```
/// use file_utils::{walk, File, WalkOptions};
/// use tempfile::TempDir;
///
/// let temp_dir = TempDir::new().unwrap();
/// let root = File::new(temp_dir.path().to_str().unwrap());
/// std::fs::write(root.child("a.txt").as_path(), b"a").unwrap();
///
/// let entries = walk(&root, WalkOptions::files().recursive(true)).unwrap();
/// assert_eq!(entries, vec![root.child("a.txt")]);
/// ```
pub fn walk(root: &File, options: WalkOptions) -> Result<Vec<File>> {
    let mut entries = Vec::new();
    walk_into(root, options, &mut entries)?;
    Ok(entries)
}

/// Regular files (and other non-directories) below `root`
pub fn list_files(root: &File, recursive: bool) -> Result<Vec<File>> {
    walk(root, WalkOptions::files().recursive(recursive))
}

/// Files and directories below `root`
pub fn list_files_and_dirs(root: &File, recursive: bool) -> Result<Vec<File>> {
    walk(root, WalkOptions::files_and_dirs().recursive(recursive))
}
