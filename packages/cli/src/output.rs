//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{}\n", message.bold());
}

/// Print the manifest and directory roots for this run.
pub fn print_run_info(list_path: &Path, source_dir: &Path, target_dir: &Path) {
    println!("Manifest: {}", list_path.display().to_string().cyan());
    println!("Source:   {}", source_dir.display().to_string().cyan());
    println!("Target:   {}", target_dir.display().to_string().cyan());
    println!();
}

/// Print success message with the copied file count.
pub fn print_success(files_copied: u64) {
    println!(
        "{} Copied {} file{}.",
        "✓".green(),
        files_copied,
        if files_copied == 1 { "" } else { "s" }
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
