//! Resource file parsers.
//!
//! - `xml`: Android `values*/*.xml` string resource parser (uses quick-xml)

pub mod xml;
