//! Manifest parsing for list-mirror.
//!
//! A manifest is a plain text file with one record per line. Every line is
//! a sequence of whitespace-separated tokens: all tokens but the last are
//! file paths relative to the source root, and the last token is a label
//! that this tool ignores.
//!
//! # Example
//!
//! ```rust,ignore
//! use list_mirror_manifest::read_manifest;
//!
//! let files = read_manifest(Path::new("pairs.txt"))?;
//! println!("{} unique files referenced", files.len());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod parse;

pub use error::ManifestError;
pub use parse::read_manifest;
