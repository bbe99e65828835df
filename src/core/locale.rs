//! Locale inference from resource directory names.
//!
//! Android keeps one resource set per `values*` directory: `values` is the
//! default set, `values-fr` holds French, `values-zh-rCN` Simplified Chinese,
//! and so on. Resolution is a pure function of the path so it can be tested
//! without touching the filesystem.

use std::path::Path;

use crate::core::LocaleKey;

/// Directory name (and name prefix) of resource directories.
pub const VALUES_DIR: &str = "values";

/// Derive the locale of a resource file from its parent directory name.
///
/// - `values` (any case) → `Default`
/// - `values-fr` → `fr`, `values-zh-rCN` → `zh-rCN` (split on the first `-` only)
/// - `values-default` → `Default`; `default` names the default set, never a locale
/// - no `-`, an empty suffix (`values-`) or no parent → `Default`
pub fn resolve_locale(path: &Path) -> LocaleKey {
    let Some(dir_name) = path.parent().and_then(Path::file_name) else {
        return LocaleKey::Default;
    };
    let dir_name = dir_name.to_string_lossy();

    if dir_name.eq_ignore_ascii_case(VALUES_DIR) {
        return LocaleKey::Default;
    }

    match dir_name.split_once('-') {
        Some((_, suffix)) if !suffix.is_empty() => LocaleKey::named(suffix),
        _ => LocaleKey::Default,
    }
}
