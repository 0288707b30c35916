//! Parallel dispatch of a file set across a bounded worker pool.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::copy::copy_file;
use crate::error::CopyError;
use crate::progress::{MirrorProgress, ProgressTracker};

/// Default worker pool size.
pub const DEFAULT_JOBS: usize = 10;

/// Source and target absolute paths computed for one file-set member.
#[derive(Debug, Clone)]
struct PathPair {
    /// Relative path as it appears in the manifest.
    relative: String,
    /// Source path.
    source: PathBuf,
    /// Target path.
    target: PathBuf,
}

/// Mirror every file in `files` from `source_root` to `target_root`,
/// preserving relative paths.
///
/// Files are copied on a dedicated pool of `jobs` worker threads in
/// arbitrary order. `on_progress` receives a snapshot before the first
/// copy and after every completed file. The first copy failure stops
/// dispatch of remaining work and propagates; files already copied stay
/// in place.
///
/// Returns the number of files copied.
///
/// # Arguments
///
/// * `files` - Deduplicated set of relative paths to copy
/// * `source_root` - Root directory the relative paths resolve against
/// * `target_root` - Root directory to mirror into
/// * `jobs` - Worker pool size
/// * `on_progress` - Callback for progress updates
///
/// # Errors
///
/// * If the worker pool cannot be built
/// * If any file copy fails (fail-fast behavior)
pub fn mirror_files<F>(
    files: &BTreeSet<String>,
    source_root: &Path,
    target_root: &Path,
    jobs: usize,
    on_progress: F,
) -> Result<u64, CopyError>
where
    F: Fn(&MirrorProgress) + Sync,
{
    let total = files.len() as u64;

    log::debug!(
        "Mirroring {} files: {} -> {} ({} workers)",
        total,
        source_root.display(),
        target_root.display(),
        jobs
    );

    let pairs: Vec<PathPair> = files
        .iter()
        .map(|relative| PathPair {
            relative: relative.clone(),
            source: source_root.join(relative),
            target: target_root.join(relative),
        })
        .collect();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let tracker = ProgressTracker::new(total);

    // Initial progress report
    on_progress(&tracker.snapshot(None));

    let tracker_ref = &tracker;
    let on_progress_ref = &on_progress;

    pool.install(|| {
        pairs
            .par_iter()
            .try_for_each(|pair| -> Result<(), CopyError> {
                copy_file(&pair.source, &pair.target)?;

                tracker_ref.increment_copied();
                on_progress_ref(&tracker_ref.snapshot(Some(pair.relative.clone())));

                Ok(())
            })
    })?;

    Ok(total)
}
