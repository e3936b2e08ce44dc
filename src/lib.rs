//! # file-utils
//!
//! Cross-platform path normalization and directory tree utilities.
//!
//! The crate works with [`File`] values: normalized path strings that use a
//! single separator and never repeat it. Files are composed from a parent and
//! a child, walked, copied, moved and deleted as whole trees.
//!
//! ## Features
//!
//! - **Path Normalization**: One separator, no duplicates, bounded length
//! - **Path Composition**: Parent/child joins that never double a separator
//! - **Tree Operations**: List, copy, move, clean and delete directory trees
//! - **File I/O**: Create, read, write, copy, rename and size single files
//! - **Sizes**: Byte counts to and from `"125 KB"`-style strings
//! - **Checksums**: CRC-32 and CRC-16 over file contents
//!
//! ## Examples
//!
//! ### Normalization and composition
//!
//! ```rust
//! use file_utils::{File, PathConfig, Separator};
//!
//! let config = PathConfig::default().with_separator(Separator::Unix);
//! let dir = File::with_config("/dir1//dir2/", config);
//! assert_eq!(dir.path(), "/dir1/dir2");
//!
//! let file = dir.child("\\dir3\\file.txt");
//! assert_eq!(file.path(), "/dir1/dir2/dir3/file.txt");
//! assert_eq!(file.parent().path(), "/dir1/dir2/dir3");
//! ```
//!
//! ### Tree operations
//!
//! ```rust
//! use file_utils::{copy_directory, delete_directory, list_files, File};
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let root = File::new(temp_dir.path().to_str().unwrap());
//! let src = root.child("src");
//! std::fs::create_dir_all(src.child("a/b").as_path()).unwrap();
//! std::fs::write(src.child("a/b/file.txt").as_path(), b"data").unwrap();
//!
//! let dest = root.child("dest");
//! copy_directory(&src, &dest).unwrap();
//! assert_eq!(list_files(&dest, true).unwrap().len(), 1);
//!
//! delete_directory(&src).unwrap();
//! assert!(!src.exists());
//! ```
//!
//! ### Sizes
//!
//! ```rust
//! use file_utils::{byte_count_to_display_size, display_size_to_bytes};
//!
//! assert_eq!(byte_count_to_display_size(128_000), "125 KB");
//! assert_eq!(display_size_to_bytes("1 GB"), 1_073_741_824);
//! ```

mod buffer;
mod checksum;
mod config;
mod error;
mod file;
mod io;
mod normalize;
mod size;
mod tree;
mod walk;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use buffer::PathBuffer;
pub use checksum::{
    crc16, crc16_update, crc32, crc32_update, file_checksum_crc16, file_checksum_crc32,
};
pub use config::{
    PathConfig, Separator, WalkOptions, WalkOrder, FILE_SEPARATOR, FILE_SEPARATOR_STR,
    PATH_MAX_LEN,
};
pub use error::{PathError, Result};
pub use file::{File, FileKind};
pub use io::{
    copy_file, create_dir, create_dirs, create_file, create_parent_dirs, delete_file, file_size,
    read_file_to_buffer, read_file_to_string, rename_file_to, write_string_to_file,
    write_to_file,
};
pub use normalize::{join_and_normalize, normalize_into, normalize_path_str, normalize_with};
pub use size::{
    byte_count_to_display_size, display_size_to_bytes, DisplaySize, ONE_GB, ONE_KB, ONE_MB,
    ONE_TB,
};
pub use tree::{
    clean_directory, copy_directory, delete_directory, is_empty_dir, move_dir_to_dir,
    move_file_to_dir,
};
pub use walk::{list_files, list_files_and_dirs, walk, walk_into};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
