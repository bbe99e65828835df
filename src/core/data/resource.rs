use std::collections::{BTreeMap, btree_map};

use super::LocaleKey;

/// A single `<string>` entry read from a resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    /// Value of the `name` attribute. Never empty.
    pub name: String,
    /// Direct character data of the element, entities unescaped.
    pub value: String,
    /// False only when `translatable="false"` (any case) is present.
    pub translatable: bool,
}

impl StringEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            translatable: true,
        }
    }

    pub fn with_translatable(mut self, translatable: bool) -> Self {
        self.translatable = translatable;
        self
    }

    /// Interpret a raw `translatable` attribute value.
    ///
    /// Only a case-insensitive `false` opts an entry out; an absent attribute or
    /// any other value keeps it.
    pub fn translatable_from_attr(value: Option<&str>) -> bool {
        !value.is_some_and(|v| v.eq_ignore_ascii_case("false"))
    }
}

/// String entries of a single locale, keyed by name.
pub type LocaleStrings = BTreeMap<String, StringEntry>;

/// All string entries of a project, grouped by locale.
///
/// Built once by the aggregator and read-only afterwards. Within a locale each
/// name maps to exactly one entry: inserting an existing `(locale, name)` pair
/// replaces the previous entry wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleIndex {
    locales: BTreeMap<LocaleKey, LocaleStrings>,
}

impl LocaleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `locale` is present, even if it never receives an entry.
    pub fn register(&mut self, locale: LocaleKey) -> &mut LocaleStrings {
        self.locales.entry(locale).or_default()
    }

    /// Insert an entry, returning the entry it replaced (if any).
    pub fn insert(&mut self, locale: LocaleKey, entry: StringEntry) -> Option<StringEntry> {
        self.register(locale).insert(entry.name.clone(), entry)
    }

    pub fn get(&self, locale: &LocaleKey) -> Option<&LocaleStrings> {
        self.locales.get(locale)
    }

    pub fn get_entry(&self, locale: &LocaleKey, name: &str) -> Option<&StringEntry> {
        self.locales.get(locale).and_then(|strings| strings.get(name))
    }

    pub fn contains(&self, locale: &LocaleKey, name: &str) -> bool {
        self.get_entry(locale, name).is_some()
    }

    /// Strings of the base `values` resource set.
    pub fn default_strings(&self) -> Option<&LocaleStrings> {
        self.locales.get(&LocaleKey::Default)
    }

    /// All locales in sorted order, `Default` first.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleKey> {
        self.locales.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LocaleKey, LocaleStrings> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
