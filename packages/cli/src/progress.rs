//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress bar manager for mirror runs.
pub struct ProgressManager {
    multi: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            enabled,
        }
    }

    /// Create a progress bar for a mirror run.
    ///
    /// Shows file count progress and estimated time remaining.
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_copy_bar(&self, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(" Copying [{bar:25.green/dim}] {pos}/{len} files ({eta})")
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb
    }

    /// Clear any active progress bars (for clean output after completion).
    pub fn clear(&self) {
        self.multi.clear().ok();
    }
}
