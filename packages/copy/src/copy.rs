//! Single-file copy primitive.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;

/// Copy a single file, overwriting the target if it exists.
///
/// The target's parent directory chain is created first when missing.
/// `create_dir_all` treats an already-existing directory as success, so
/// two workers racing to create a shared parent is harmless; any other
/// creation failure propagates.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
///
/// # Errors
///
/// * If the parent directory cannot be created
/// * If the source is missing or the copy fails
pub fn copy_file(source: &Path, target: &Path) -> Result<(), CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CopyError::CreateDirError {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }

    // Try reflink first, fall back to regular copy
    copy_file_with_reflink(source, target)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Try reflink first (copy-on-write, instant on APFS/Btrfs/ReFS).
    // Fails when the target already exists, so overwrite goes down the
    // fs::copy path.
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}
