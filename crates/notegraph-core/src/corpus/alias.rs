//! Document identity derivation from file paths.

use std::path::Path;

use crate::config::NAMESPACE_SEPARATOR;

/// Derive a document identity from a file path.
///
/// Takes the file name without extension, replaces every `marker` with `/`
/// and lowercases the result, so `Projects___Rust.md` becomes
/// `projects/rust`.
pub fn path_to_alias(path: &Path, marker: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if marker.is_empty() {
        return stem.to_lowercase();
    }
    stem.replace(marker, NAMESPACE_SEPARATOR).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NAMESPACE_MARKER;

    fn alias(path: &str) -> String {
        path_to_alias(Path::new(path), DEFAULT_NAMESPACE_MARKER)
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(alias("pages/Foo.md"), "foo");
    }

    #[test]
    fn test_namespace_marker() {
        let identity = alias("pages/Projects___Rust___Async.md");
        assert_eq!(identity, "projects/rust/async");
    }

    #[test]
    fn test_only_last_extension_removed() {
        assert_eq!(alias("journal/2024.01.05.md"), "2024.01.05");
    }

    #[test]
    fn test_double_underscore_untouched() {
        assert_eq!(alias("a__b.md"), "a__b");
    }

    #[test]
    fn test_custom_marker() {
        assert_eq!(path_to_alias(Path::new("A%2FB.md"), "%2F"), "a/b");
    }
}
