use serde::Serialize;

use super::LocaleKey;

/// A default-locale string that one or more locales do not define.
///
/// Serializes as `{ "name": ..., "value": ..., "missing_locales": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslation {
    pub name: String,
    /// Value of the string in the default locale.
    pub value: String,
    /// Locales lacking `name`, sorted. Never empty and never contains `default`.
    pub missing_locales: Vec<LocaleKey>,
}

impl MissingTranslation {
    /// Missing locales joined with `", "`, e.g. `de, fr`.
    pub fn missing_locales_string(&self) -> String {
        self.missing_locales
            .iter()
            .map(LocaleKey::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
