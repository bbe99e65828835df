//! Typed failures of the scan pipeline.
//!
//! Every error is fatal to a run: a report built while skipping broken files
//! could under-report missing translations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout `core`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The root, or a directory below it, could not be read.
    #[error("unable to read directory {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered resource file could not be read.
    #[error("unable to read file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered resource file is not a valid `<resources>` document.
    #[error("unable to parse XML file at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ResourceError,
    },

    /// No `values` directory resolved to the default locale.
    #[error("unable to find string resources for default locale")]
    NoDefaultLocale,
}

/// Why a single resource document was rejected by the parser.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("document has no root element")]
    MissingRoot,

    #[error("expected element type <resources> but have <{0}>")]
    UnexpectedRoot(String),

    #[error("document ended before </resources>")]
    Unterminated,

    #[error("<string> element without a name attribute")]
    MissingName,
}
