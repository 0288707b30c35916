//! Manifest tokenization into the deduplicated file set.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::ManifestError;

/// Read a manifest file and collect the deduplicated set of referenced
/// relative paths.
///
/// Each line is split on whitespace. The last token of every line is a
/// label and is discarded; all preceding tokens are recorded as relative
/// file paths. Lines with fewer than two tokens (blank lines included)
/// contribute nothing. A path referenced on multiple lines appears once.
///
/// Referenced files are not checked for existence here; a dangling
/// reference surfaces later, when the copy is attempted.
///
/// # Arguments
///
/// * `path` - Path to the manifest file
///
/// # Errors
///
/// * If the manifest file cannot be read
pub fn read_manifest(path: &Path) -> Result<BTreeSet<String>, ManifestError> {
    log::debug!("Reading manifest from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut files = BTreeSet::new();
    for line in content.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((_label, paths)) = tokens.split_last() else {
            continue;
        };
        for file in paths {
            files.insert((*file).to_string());
        }
    }

    log::debug!("Manifest references {} unique files", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_drops_trailing_label() {
        let file = manifest_with("a/x.txt label1\nb/y.txt label2\n");

        let files = read_manifest(file.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains("a/x.txt"));
        assert!(files.contains("b/y.txt"));
        assert!(!files.contains("label1"));
    }

    #[test]
    fn test_multiple_paths_per_line() {
        let file = manifest_with("a/x.txt b/y.txt pair\n");

        let files = read_manifest(file.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains("a/x.txt"));
        assert!(files.contains("b/y.txt"));
    }

    #[test]
    fn test_deduplicates_across_lines() {
        let file = manifest_with("a/x.txt label1\na/x.txt label2\n");

        let files = read_manifest(file.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files.contains("a/x.txt"));
    }

    #[test]
    fn test_duplicate_within_line() {
        let file = manifest_with("a/x.txt a/x.txt label1\n");

        let files = read_manifest(file.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_blank_and_single_token_lines() {
        let file = manifest_with("\n   \nonly-a-label\na/x.txt label\n");

        let files = read_manifest(file.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files.contains("a/x.txt"));
    }

    #[test]
    fn test_missing_manifest() {
        let result = read_manifest(Path::new("/nonexistent/list.txt"));

        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }
}
