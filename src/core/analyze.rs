//! Cross-locale membership diff against the default locale.

use crate::core::{
    LocaleIndex, MissingTranslation,
    error::{Error, Result},
};

/// Find default-locale strings that other locales do not define.
///
/// A record is produced for every default string missing from at least one
/// locale; strings present everywhere are left out. Records are sorted by
/// name and each record's locales are sorted, `default` never among them.
///
/// # Errors
///
/// [`Error::NoDefaultLocale`] if no `values` directory contributed to the
/// index.
pub fn find_missing_translations(index: &LocaleIndex) -> Result<Vec<MissingTranslation>> {
    let default_strings = index.default_strings().ok_or(Error::NoDefaultLocale)?;

    let missing = default_strings
        .values()
        .filter_map(|entry| {
            let missing_locales: Vec<_> = index
                .locales()
                .filter(|locale| !locale.is_default() && !index.contains(locale, &entry.name))
                .cloned()
                .collect();

            (!missing_locales.is_empty()).then(|| MissingTranslation {
                name: entry.name.clone(),
                value: entry.value.clone(),
                missing_locales,
            })
        })
        .collect();

    Ok(missing)
}
