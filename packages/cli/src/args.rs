//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for list-mirror.
#[derive(Debug, Parser)]
#[command(
    name = "list-mirror",
    about = "Mirror manifest-listed files from a source tree into a target tree",
    version
)]
pub struct Args {
    /// Path to the manifest list file.
    #[arg(long = "list-path")]
    pub list_path: PathBuf,

    /// Root directory containing the source files.
    #[arg(long = "source-dir")]
    pub source_dir: PathBuf,

    /// Root directory to mirror files into.
    #[arg(long = "target-dir")]
    pub target_dir: PathBuf,

    /// Number of worker threads.
    #[arg(long, default_value_t = list_mirror_copy::DEFAULT_JOBS)]
    pub jobs: usize,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_flags() {
        let args = Args::try_parse_from([
            "list-mirror",
            "--list-path",
            "pairs.txt",
            "--source-dir",
            "/data/src",
            "--target-dir",
            "/data/dst",
        ])
        .unwrap();

        assert_eq!(args.list_path, PathBuf::from("pairs.txt"));
        assert_eq!(args.source_dir, PathBuf::from("/data/src"));
        assert_eq!(args.target_dir, PathBuf::from("/data/dst"));
        assert_eq!(args.jobs, 10);
        assert!(args.should_show_progress());
    }

    #[test]
    fn test_missing_flags_rejected() {
        let result = Args::try_parse_from(["list-mirror", "--list-path", "pairs.txt"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_no_progress() {
        let args = Args::try_parse_from([
            "list-mirror",
            "--list-path",
            "pairs.txt",
            "--source-dir",
            "src",
            "--target-dir",
            "dst",
            "--no-progress",
            "--jobs",
            "4",
        ])
        .unwrap();

        assert!(!args.should_show_progress());
        assert_eq!(args.jobs, 4);
    }
}
