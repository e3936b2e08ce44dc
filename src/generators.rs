//! Property test generators for path utilities
//!
//! Strategies producing raw path strings with the separator noise the
//! normalizer has to clean up.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a single path segment (no separators)
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,15}"
    }

    /// Generate a filename with a common extension
    pub fn filename() -> impl Strategy<Value = String> {
        (
            Self::segment(),
            prop_oneof![
                Just("txt"),
                Just("rs"),
                Just("log"),
                Just("json"),
                Just(""),
            ],
        )
            .prop_map(|(name, ext)| {
                if ext.is_empty() {
                    name
                } else {
                    format!("{}.{}", name, ext)
                }
            })
    }

    /// Generate a relative path with forward slashes only
    pub fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 1..=5).prop_map(|parts| parts.join("/"))
    }

    /// Generate an absolute path with forward slashes only
    pub fn absolute_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| format!("/{}", path))
    }

    /// Generate paths whose segments are joined by runs of mixed separators
    pub fn path_with_mixed_separators() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::segment(), 1..=5),
            prop::collection::vec("[/\\\\]{1,3}", 6),
        )
            .prop_map(|(parts, seps)| {
                let mut result = String::new();
                for (i, part) in parts.iter().enumerate() {
                    result.push_str(&seps[i]);
                    result.push_str(part);
                }
                result.push_str(&seps[parts.len()]);
                result
            })
    }

    /// Generate edge case inputs
    pub fn edge_case_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("//\\\\//".to_string()),
            Just("a".to_string()),
            Just(".hidden".to_string()),
            Just("../up/../twice".to_string()),
            Just("file with spaces.txt".to_string()),
            Just("файл/文件.txt".to_string()),
            Just("C:\\Users\\Usr\\Desktop\\Projects\\dir/".to_string()),
        ]
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::relative_path(),
            2 => Self::absolute_path(),
            3 => Self::path_with_mixed_separators(),
            1 => Self::edge_case_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_contain_no_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(!segment.contains('\\'));
        }

        #[test]
        fn mixed_paths_start_and_end_with_separators(
            path in PathGenerators::path_with_mixed_separators()
        ) {
            let is_sep = |c: char| c == '/' || c == '\\';
            prop_assert!(path.starts_with(is_sep));
            prop_assert!(path.ends_with(is_sep));
        }

        #[test]
        fn filenames_are_single_segments(name in PathGenerators::filename()) {
            prop_assert!(!name.contains('/'));
        }
    }
}
