//! Core data types shared by the scanning and analysis phases.
//!
//! ## Module Structure
//!
//! - `locale`: LocaleKey (default vs. suffixed locale)
//! - `resource`: Parsed string resources and the per-locale index
//! - `missing`: MissingTranslation report records

pub mod locale;
pub mod missing;
pub mod resource;

pub use locale::LocaleKey;
pub use missing::MissingTranslation;
pub use resource::{LocaleIndex, LocaleStrings, StringEntry};
