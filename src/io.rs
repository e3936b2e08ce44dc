//! Single-file and single-directory operations
//!
//! Thin wrappers over `std::fs` that take [`File`] values and report failures
//! as [`PathError`] carrying the offending path.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};

use crate::error::{PathError, Result};
use crate::file::{File, FileKind};

fn require_path(file: &File) -> Result<()> {
    if file.is_empty() {
        return Err(PathError::EmptyPath);
    }
    Ok(())
}

fn io_error(file: &File) -> impl FnOnce(std::io::Error) -> PathError + '_ {
    move |err| PathError::io(file.path(), err)
}

/// Creates an empty file if none exists. An existing file keeps its content.
///
/// The parent directory must already exist, see [`create_parent_dirs`].
pub fn create_file(file: &File) -> Result<()> {
    require_path(file)?;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(file.as_path())
        .map_err(io_error(file))?;
    file.refresh_kind();
    Ok(())
}

/// Creates a single directory level
pub fn create_dir(dir: &File) -> Result<()> {
    require_path(dir)?;
    fs::create_dir(dir.as_path()).map_err(io_error(dir))
}

/// Creates `dir` and every missing ancestor
pub fn create_dirs(dir: &File) -> Result<()> {
    require_path(dir)?;
    fs::create_dir_all(dir.as_path()).map_err(io_error(dir))
}

/// Creates every missing ancestor of `file`, but not `file` itself
pub fn create_parent_dirs(file: &File) -> Result<()> {
    require_path(file)?;
    let parent = file.parent();
    if parent.is_empty() {
        return Ok(());
    }
    create_dirs(&parent)
}

/// Whether `a` and `b` name the same file on disk, through links or
/// differently spelled paths.
fn same_file(a: &File, b: &File) -> Result<bool> {
    if a == b {
        return Ok(true);
    }
    if !b.exists() {
        return Ok(false);
    }
    let a_real = fs::canonicalize(a.as_path()).map_err(io_error(a))?;
    let b_real = fs::canonicalize(b.as_path()).map_err(io_error(b))?;
    Ok(a_real == b_real)
}

/// Copies the content of `src` over `dest`, creating `dest` if needed.
///
/// Fails with [`PathError::ValidationFailed`] when both name the same file,
/// since truncating `dest` would empty `src`. Returns the number of bytes
/// copied.
pub fn copy_file(src: &File, dest: &File) -> Result<u64> {
    require_path(src)?;
    require_path(dest)?;
    if !src.is_file() {
        return Err(PathError::NotAFile {
            path: src.path().to_string(),
        });
    }
    if same_file(src, dest)? {
        return Err(PathError::ValidationFailed {
            message: format!("cannot copy {} onto itself", src),
        });
    }
    fs::copy(src.as_path(), dest.as_path()).map_err(io_error(dest))
}

/// Renames `src` to `dest` on the same filesystem
pub fn rename_file_to(src: &File, dest: &File) -> Result<()> {
    require_path(src)?;
    require_path(dest)?;
    fs::rename(src.as_path(), dest.as_path()).map_err(io_error(src))
}

/// Removes a file (or a link). A missing file is not an error.
pub fn delete_file(file: &File) -> Result<()> {
    require_path(file)?;
    match fs::remove_file(file.as_path()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(PathError::io(file.path(), err)),
    }
}

/// Removes an empty directory
pub(crate) fn remove_empty_dir(dir: &File) -> Result<()> {
    fs::remove_dir(dir.as_path()).map_err(io_error(dir))
}

/// Removes whatever `file` is, provided directories are already empty
pub(crate) fn remove_entry(file: &File) -> Result<()> {
    match file.kind() {
        Some(FileKind::Directory) => remove_empty_dir(file),
        _ => delete_file(file),
    }
}

/// Size of a regular file in bytes
pub fn file_size(file: &File) -> Result<u64> {
    require_path(file)?;
    let meta = fs::metadata(file.as_path()).map_err(io_error(file))?;
    if !meta.is_file() {
        return Err(PathError::NotAFile {
            path: file.path().to_string(),
        });
    }
    Ok(meta.len())
}

/// Writes `data` to an existing file, appending or replacing its content.
///
/// The file is not created; write to a missing file fails. Returns the
/// number of bytes written.
pub fn write_to_file(file: &File, data: &[u8], append: bool) -> Result<usize> {
    require_path(file)?;
    let mut options = OpenOptions::new();
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    let mut handle = options.open(file.as_path()).map_err(io_error(file))?;
    handle.write_all(data).map_err(io_error(file))?;
    Ok(data.len())
}

pub fn write_string_to_file(file: &File, text: &str, append: bool) -> Result<usize> {
    write_to_file(file, text.as_bytes(), append)
}

/// Reads from the start of `file` until `buffer` is full or the file ends.
///
/// Returns the number of bytes read.
pub fn read_file_to_buffer(file: &File, buffer: &mut [u8]) -> Result<usize> {
    require_path(file)?;
    let mut handle = fs::File::open(file.as_path()).map_err(io_error(file))?;
    fill_buffer(&mut handle, buffer).map_err(io_error(file))
}

pub fn read_file_to_string(file: &File) -> Result<String> {
    require_path(file)?;
    fs::read_to_string(file.as_path()).map_err(io_error(file))
}

/// Reads until `buffer` is full or `reader` is exhausted
pub(crate) fn fill_buffer<R: Read>(reader: &mut R, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_root(temp_dir: &TempDir) -> File {
        File::new(temp_dir.path().to_str().unwrap())
    }

    #[test]
    fn test_create_file_and_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);

        let file = root.child("dir_t_1/dir_t_2/test_file_2.txt");
        assert!(!file.exists());
        assert!(create_file(&file).is_err());
        create_parent_dirs(&file).unwrap();
        create_file(&file).unwrap();
        assert!(file.is_file());
        assert!(!file.is_directory());

        let dir = root.child("dir_1/dir_2/dir_3");
        create_parent_dirs(&dir).unwrap();
        assert!(dir.parent().is_directory());
        assert!(!dir.exists());
        create_dir(&dir).unwrap();
        assert!(dir.is_directory());
        assert!(create_dir(&dir).is_err());
    }

    #[test]
    fn test_create_file_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_root(&temp_dir).child("keep.txt");
        create_file(&file).unwrap();
        write_string_to_file(&file, "content", false).unwrap();
        create_file(&file).unwrap();
        assert_eq!(file_size(&file).unwrap(), 7);
    }

    #[test]
    fn test_rename_file_to() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);
        let src = root.child("a.txt");
        let dest = root.child("test_file_xx.txt");
        create_file(&src).unwrap();

        rename_file_to(&src, &dest).unwrap();
        assert!(!src.exists());
        assert!(dest.is_file());
    }

    #[test]
    fn test_write_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_root(&temp_dir).child("test_size_file.txt");
        let message = "Some test message";

        assert!(matches!(
            write_string_to_file(&file, message, false),
            Err(PathError::IoError { .. })
        ));

        create_file(&file).unwrap();
        assert_eq!(file_size(&file).unwrap(), 0);
        assert_eq!(write_string_to_file(&file, message, false).unwrap(), message.len());
        assert_eq!(file_size(&file).unwrap(), message.len() as u64);

        write_string_to_file(&file, "!", true).unwrap();
        assert_eq!(read_file_to_string(&file).unwrap(), "Some test message!");

        write_string_to_file(&file, "new", false).unwrap();
        assert_eq!(read_file_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn test_read_file_to_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_root(&temp_dir).child("test_file_buff.txt");
        create_file(&file).unwrap();
        let text = "Some test text";
        write_string_to_file(&file, text, false).unwrap();

        let mut buffer = vec![0u8; text.len()];
        assert_eq!(read_file_to_buffer(&file, &mut buffer).unwrap(), text.len());
        assert_eq!(buffer, text.as_bytes());

        let mut small = [0u8; 4];
        assert_eq!(read_file_to_buffer(&file, &mut small).unwrap(), 4);
        assert_eq!(&small, b"Some");

        let mut large = [0u8; 64];
        assert_eq!(read_file_to_buffer(&file, &mut large).unwrap(), text.len());
    }

    #[test]
    fn test_copy_and_delete_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);
        let src = root.child("src_file.txt");
        let dest = root.child("dest_file.txt");
        create_file(&src).unwrap();
        write_string_to_file(&src, "Some test message", false).unwrap();
        create_file(&dest).unwrap();

        assert_eq!(copy_file(&src, &dest).unwrap(), 17);
        assert_eq!(file_size(&dest).unwrap(), 17);
        assert!(src.is_file());

        delete_file(&dest).unwrap();
        assert!(!dest.exists());
        delete_file(&dest).unwrap();

        assert!(matches!(
            copy_file(&root, &dest),
            Err(PathError::NotAFile { .. })
        ));
    }

    #[test]
    fn test_copy_file_onto_itself_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);
        let file = root.child("a.txt");
        create_file(&file).unwrap();
        write_string_to_file(&file, "Some test message", false).unwrap();

        let respelled = File::new(&format!("{}//", file.path()));
        assert!(matches!(
            copy_file(&file, &respelled),
            Err(PathError::ValidationFailed { .. })
        ));
        let dotted = root.child("./a.txt");
        assert!(matches!(
            copy_file(&file, &dotted),
            Err(PathError::ValidationFailed { .. })
        ));
        assert_eq!(read_file_to_string(&file).unwrap(), "Some test message");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_onto_link_to_itself_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);
        let file = root.child("a.txt");
        create_file(&file).unwrap();
        write_string_to_file(&file, "keep", false).unwrap();
        let link = root.child("link.txt");
        std::os::unix::fs::symlink(file.as_path(), link.as_path()).unwrap();

        assert!(matches!(
            copy_file(&file, &link),
            Err(PathError::ValidationFailed { .. })
        ));
        assert_eq!(read_file_to_string(&file).unwrap(), "keep");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let empty = File::new("");
        assert_eq!(create_file(&empty), Err(PathError::EmptyPath));
        assert_eq!(file_size(&empty), Err(PathError::EmptyPath));
        assert_eq!(delete_file(&empty), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_size_of_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_root(&temp_dir);
        assert!(matches!(file_size(&root), Err(PathError::NotAFile { .. })));
    }
}
