//! Core scanning engine.
//!
//! A run is a single linear pass:
//!
//! 1. **Discovery** (`file_scanner`): walk the project, honoring a [`PathFilter`]
//! 2. **Parsing** (`parsers`): read `<string>` entries from each resource file
//! 3. **Locale resolution** (`locale`): derive the locale from the directory name
//! 4. **Aggregation** (`aggregate`): build the per-locale [`LocaleIndex`]
//! 5. **Analysis** (`analyze`): diff every locale against the default one
//!
//! Nothing here formats output; see `cli` for rendering.

use std::path::{Path, PathBuf};

use tracing::info;

pub mod aggregate;
pub mod analyze;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod filter;
pub mod locale;
pub mod parsers;

pub use aggregate::aggregate;
pub use analyze::find_missing_translations;
pub use data::{LocaleIndex, LocaleKey, LocaleStrings, MissingTranslation, StringEntry};
pub use error::{Error, ResourceError, Result};
pub use file_scanner::discover_values_files;
pub use filter::{FilterChain, GitCheckIgnore, GitignoreFilter, GlobFilter, NoFilter, PathFilter};
pub use locale::resolve_locale;

/// Outcome of scanning one project.
#[derive(Debug)]
pub struct ScanReport {
    /// Resource files read, in processing order.
    pub files: Vec<PathBuf>,
    /// Every locale found, `default` first.
    pub locales: Vec<LocaleKey>,
    /// Default-locale strings missing from at least one locale, sorted by name.
    pub missing: Vec<MissingTranslation>,
}

/// Run the whole pipeline on the project rooted at `root`.
pub fn scan_project(root: &Path, filter: &dyn PathFilter) -> Result<ScanReport> {
    let files = discover_values_files(root, filter)?;
    let index = aggregate(&files)?;
    let missing = find_missing_translations(&index)?;

    info!(
        files = files.len(),
        locales = index.len(),
        missing = missing.len(),
        "scan finished"
    );

    Ok(ScanReport {
        locales: index.locales().cloned().collect(),
        files,
        missing,
    })
}
