//! Directory tree operations
//!
//! Copy, move, delete and clean built on [`walk`] and the single-file
//! primitives in [`crate::io`]. Multi-step operations stop at the first
//! failure and leave whatever was already done on disk.

use std::fs;

use crate::config::{WalkOptions, WalkOrder};
use crate::error::{PathError, Result};
use crate::file::{File, FileKind};
use crate::io::{copy_file, create_dirs, delete_file, remove_empty_dir, remove_entry};
use crate::walk::walk;

fn require_directory(dir: &File) -> Result<()> {
    match dir.refresh_kind() {
        Some(FileKind::Directory) => Ok(()),
        Some(_) => Err(PathError::NotADirectory {
            path: dir.path().to_string(),
        }),
        None if dir.is_empty() => Err(PathError::EmptyPath),
        None => Err(PathError::NotFound {
            path: dir.path().to_string(),
        }),
    }
}

fn is_link(file: &File) -> bool {
    fs::symlink_metadata(file.as_path()).is_ok_and(|meta| meta.file_type().is_symlink())
}

/// Like `require_directory`, but a link to a directory is refused too.
fn require_own_directory(dir: &File) -> Result<()> {
    if is_link(dir) {
        return Err(PathError::NotADirectory {
            path: dir.path().to_string(),
        });
    }
    require_directory(dir)
}

fn reject_nested(src: &File, dest: &File) -> Result<()> {
    if dest.is_within(src) {
        return Err(PathError::DestinationInsideSource {
            src: src.path().to_string(),
            dest: dest.path().to_string(),
        });
    }
    Ok(())
}

/// Recreates the subtree of `src` inside `dest`.
///
/// `dest` is created if missing. Existing files under `dest` with the same
/// names are overwritten. On failure `dest` may be left partially populated.
///
/// # Examples
/// ```
/// use file_utils::{copy_directory, list_files_and_dirs, File};
/// use tempfile::TempDir;
///
/// let temp_dir = TempDir::new().unwrap();
/// let root = File::new(temp_dir.path().to_str().unwrap());
/// let src = root.child("src");
/// std::fs::create_dir_all(src.child("nested").as_path()).unwrap();
/// std::fs::write(src.child("nested/a.txt").as_path(), b"a").unwrap();
///
/// let dest = root.child("copy");
/// copy_directory(&src, &dest).unwrap();
/// assert_eq!(list_files_and_dirs(&dest, true).unwrap().len(), 2);
/// ```
pub fn copy_directory(src: &File, dest: &File) -> Result<()> {
    require_directory(src)?;
    reject_nested(src, dest)?;

    let entries = walk(src, WalkOptions::files_and_dirs().recursive(true))?;
    create_dirs(dest)?;

    for entry in &entries {
        let relative = entry
            .relative_to(src)
            .ok_or_else(|| PathError::ConstructionFailed {
                message: format!("entry {} is not below {}", entry, src),
            })?;
        let target = dest.child(relative);
        match entry.cached_kind() {
            Some(FileKind::Directory) => create_dirs(&target)?,
            _ => {
                copy_file(entry, &target)?;
            }
        }
    }

    log::debug!("copied {} entries from {} to {}", entries.len(), src, dest);
    Ok(())
}

/// Renames `src` to `target`, falling back to copy and delete.
fn relocate(src: &File, target: &File) -> Result<()> {
    match fs::rename(src.as_path(), target.as_path()) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::debug!(
                "rename {} -> {} failed ({}), copying instead",
                src,
                target,
                err
            );
            if src.cached_kind() == Some(FileKind::Directory) {
                copy_directory(src, target)?;
                delete_directory(src)
            } else {
                copy_file(src, target)?;
                delete_file(src)
            }
        }
    }
}

/// Moves every entry of `src` into `dest_parent`, then removes `src`.
///
/// Each entry is renamed when possible and copied then deleted otherwise,
/// so moves across filesystems work but are not atomic.
pub fn move_dir_to_dir(src: &File, dest_parent: &File) -> Result<()> {
    require_own_directory(src)?;
    reject_nested(src, dest_parent)?;
    create_dirs(dest_parent)?;

    let children = walk(src, WalkOptions::files_and_dirs())?;
    for child in &children {
        relocate(child, &dest_parent.child(child.file_name()))?;
    }
    remove_empty_dir(src)?;

    log::debug!("moved {} entries from {} to {}", children.len(), src, dest_parent);
    Ok(())
}

/// Moves a single file into `dest_parent`, keeping its name.
pub fn move_file_to_dir(src: &File, dest_parent: &File) -> Result<()> {
    match src.refresh_kind() {
        Some(FileKind::Directory) => {
            return Err(PathError::NotAFile {
                path: src.path().to_string(),
            })
        }
        Some(_) => {}
        None if src.is_empty() => return Err(PathError::EmptyPath),
        None => {
            return Err(PathError::NotFound {
                path: src.path().to_string(),
            })
        }
    }
    create_dirs(dest_parent)?;
    relocate(src, &dest_parent.child(src.file_name()))
}

/// Deletes everything below `root`, keeping `root` itself.
///
/// A link to a directory is refused with [`PathError::NotADirectory`].
pub fn clean_directory(root: &File) -> Result<()> {
    require_own_directory(root)?;
    let entries = walk(
        root,
        WalkOptions::files_and_dirs()
            .recursive(true)
            .order(WalkOrder::PostOrder),
    )?;
    for entry in &entries {
        remove_entry(entry)?;
    }
    log::debug!("cleaned {} entries from {}", entries.len(), root);
    Ok(())
}

/// Deletes `root` and everything below it, contents first.
///
/// A missing `root` is not an error. A link is removed without touching
/// its target.
pub fn delete_directory(root: &File) -> Result<()> {
    if is_link(root) {
        return delete_file(root);
    }
    if root.refresh_kind().is_none() {
        return if root.is_empty() {
            Err(PathError::EmptyPath)
        } else {
            Ok(())
        };
    }
    clean_directory(root)?;
    remove_empty_dir(root)
}

/// Whether `root` is a directory with no entries
pub fn is_empty_dir(root: &File) -> bool {
    walk(root, WalkOptions::files_and_dirs()).is_ok_and(|entries| entries.is_empty())
}
