//! Progress tracking for mirror operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Progress information for a mirror run.
#[derive(Debug, Clone)]
pub struct MirrorProgress {
    /// Total number of files to copy.
    pub files_total: u64,
    /// Number of files copied so far.
    pub files_copied: u64,
    /// Relative path of the most recently copied file (if any).
    pub current_file: Option<String>,
}

impl MirrorProgress {
    /// Calculate progress as a percentage (0.0 to 100.0).
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            100.0
        } else {
            (self.files_copied as f64 / self.files_total as f64) * 100.0
        }
    }
}

/// Thread-safe progress tracker using atomics.
///
/// Shared by reference across the worker pool; the total is fixed at
/// construction and only the copied count advances.
#[derive(Debug)]
pub struct ProgressTracker {
    files_total: u64,
    files_copied: AtomicU64,
}

impl ProgressTracker {
    /// Create a tracker for a run of `files_total` files.
    #[must_use]
    pub const fn new(files_total: u64) -> Self {
        Self {
            files_total,
            files_copied: AtomicU64::new(0),
        }
    }

    /// Increment the copied count by 1.
    pub fn increment_copied(&self) {
        self.files_copied.fetch_add(1, Ordering::SeqCst);
    }

    /// Get the current copied count.
    #[must_use]
    pub fn copied(&self) -> u64 {
        self.files_copied.load(Ordering::SeqCst)
    }

    /// Get a progress snapshot.
    #[must_use]
    pub fn snapshot(&self, current_file: Option<String>) -> MirrorProgress {
        MirrorProgress {
            files_total: self.files_total,
            files_copied: self.copied(),
            current_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_counts() {
        let tracker = ProgressTracker::new(4);

        tracker.increment_copied();
        tracker.increment_copied();

        let snapshot = tracker.snapshot(Some("a/x.txt".to_string()));
        assert_eq!(snapshot.files_total, 4);
        assert_eq!(snapshot.files_copied, 2);
        assert_eq!(snapshot.current_file.as_deref(), Some("a/x.txt"));
        assert!((snapshot.percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_empty_run() {
        let tracker = ProgressTracker::new(0);

        assert!((tracker.snapshot(None).percentage() - 100.0).abs() < f64::EPSILON);
    }
}
