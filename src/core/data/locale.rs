use std::fmt;

use serde::{Serialize, Serializer};

/// Display name of the unsuffixed `values` resource set.
pub const DEFAULT_LOCALE: &str = "default";

/// Identifies the locale a resource file belongs to.
///
/// The unsuffixed `values` directory is the project's base resource set and is
/// the source of truth for which strings must be translated. Every other
/// directory contributes a locale named by its suffix (`values-fr` → `fr`).
///
/// `Default` sorts before every named locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocaleKey {
    /// Strings from the unsuffixed `values` directory.
    Default,
    /// Strings from a `values-<suffix>` directory, e.g. `fr` or `zh-rCN`.
    Named(String),
}

impl LocaleKey {
    /// Locale for a directory suffix. The suffix `default` is the default set
    /// itself (`values-default` merges into `values`), so two keys never share
    /// a display name.
    pub fn named(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if suffix == DEFAULT_LOCALE {
            Self::Default
        } else {
            Self::Named(suffix)
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => DEFAULT_LOCALE,
            Self::Named(suffix) => suffix,
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LocaleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
