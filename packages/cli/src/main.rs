//! list-mirror CLI entry point.
//!
//! A tool for mirroring manifest-listed files from a source directory
//! tree into a target directory tree, preserving relative paths.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;

use clap::Parser;

use args::Args;
use list_mirror_copy::mirror_files;
use list_mirror_manifest::read_manifest;
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    output::print_header("List Mirror");
    output::print_run_info(&args.list_path, &args.source_dir, &args.target_dir);

    let files = read_manifest(&args.list_path)?;

    if files.is_empty() {
        println!("Manifest references no files. Nothing to do.");
        return Ok(());
    }

    println!(
        "Copying {} unique file{}...",
        files.len(),
        if files.len() == 1 { "" } else { "s" }
    );
    log::debug!("Using {} worker threads", args.jobs);

    let progress_mgr = ProgressManager::new(args.should_show_progress());
    let bar = progress_mgr.create_copy_bar(files.len() as u64);

    let copied = mirror_files(
        &files,
        &args.source_dir,
        &args.target_dir,
        args.jobs,
        |progress| {
            bar.set_position(progress.files_copied);
        },
    )?;

    bar.finish_and_clear();
    progress_mgr.clear();

    println!();
    output::print_success(copied);
    Ok(())
}
