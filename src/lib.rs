//! missing-translations - Android string resource translation checker
//!
//! Finds `<string>` resources defined in an Android project's default
//! `values` directories that one or more translated `values-<locale>`
//! directories do not define. Usable as a CLI (for CI pipelines) or as a
//! library.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, rendering, CI output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine (discovery, parsing, aggregation, analysis)
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use missing_translations::core::{GitignoreFilter, scan_project};
//!
//! let report = scan_project(Path::new("."), &GitignoreFilter::new())?;
//! for item in &report.missing {
//!     println!("{} is missing in {}", item.name, item.missing_locales_string());
//! }
//! # Ok::<(), missing_translations::core::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
