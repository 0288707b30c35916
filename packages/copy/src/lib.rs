//! Parallel manifest-driven file copying with progress tracking.
//!
//! This crate provides the copy side of list-mirror:
//!
//! * A single-file overwrite-copy primitive with parent-chain creation
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Parallel dispatch of a file set across a bounded `rayon` pool
//! * Progress callbacks for UI integration
//!
//! # Example
//!
//! ```rust,ignore
//! use list_mirror_copy::{DEFAULT_JOBS, MirrorProgress, mirror_files};
//!
//! mirror_files(&files, source_root, target_root, DEFAULT_JOBS, |progress| {
//!     println!("{}/{} files copied", progress.files_copied, progress.files_total);
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod mirror;
mod progress;

pub use copy::copy_file;
pub use error::CopyError;
pub use mirror::{DEFAULT_JOBS, mirror_files};
pub use progress::{MirrorProgress, ProgressTracker};
