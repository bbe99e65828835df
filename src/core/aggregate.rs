//! Aggregation of parsed resource files into a [`LocaleIndex`].

use std::{fs, path::Path};

use tracing::debug;

use crate::core::{
    LocaleIndex,
    error::{Error, Result},
    locale::resolve_locale,
    parsers::xml::parse_string_resources,
};

/// Read, parse and index resource files in the given order.
///
/// Every file registers its locale, even when it contributes no translatable
/// string, so an empty `values-de/strings.xml` still makes `de` a locale that
/// can be missing strings. When two files define the same name for the same
/// locale, the later file's entry replaces the earlier one.
///
/// # Errors
///
/// Stops at the first unreadable ([`Error::Read`]) or malformed
/// ([`Error::Parse`]) file.
pub fn aggregate<P: AsRef<Path>>(files: &[P]) -> Result<LocaleIndex> {
    let mut index = LocaleIndex::new();

    for file in files {
        let path = file.as_ref();
        let content = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = parse_string_resources(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let locale = resolve_locale(path);
        debug!(
            path = %path.display(),
            locale = %locale,
            strings = entries.len(),
            "parsed resource file"
        );

        index.register(locale.clone());
        for entry in entries {
            if let Some(previous) = index.insert(locale.clone(), entry) {
                debug!(
                    path = %path.display(),
                    locale = %locale,
                    name = %previous.name,
                    "overriding earlier definition"
                );
            }
        }
    }

    Ok(index)
}
