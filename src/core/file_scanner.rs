//! Discovery of Android string resource files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::{
    PathFilter,
    error::{Error, Result},
    locale::VALUES_DIR,
};

/// Recursively collect resource files below `root`.
///
/// A file is a resource file when its parent directory name starts with
/// `values` and its extension is `xml` (any case). Every entry is offered to
/// `filter` first; an ignored directory is pruned without being read.
///
/// The walk is depth-first with each directory's children sorted by file
/// name, so the result order is deterministic. Later files win when the same
/// string is defined twice for a locale, which makes this order part of the
/// contract.
///
/// # Errors
///
/// [`Error::Traversal`] if the root is missing, unreadable or not a
/// directory, or if any directory below it cannot be read.
pub fn discover_values_files(root: &Path, filter: &dyn PathFilter) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|source| Error::Traversal {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::Traversal {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let ignored = filter.is_ignored(root, entry.path());
            if ignored {
                debug!(path = %entry.path().display(), "ignored");
            }
            !ignored
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| traversal_error(root, err))?;
        if !entry.file_type().is_dir() && is_values_file(entry.path()) {
            debug!(path = %entry.path().display(), "found resource file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Check the naming convention of resource files: `values*/<name>.xml`.
pub fn is_values_file(path: &Path) -> bool {
    let in_values_dir = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir.to_string_lossy().starts_with(VALUES_DIR));
    let is_xml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

    in_values_dir && is_xml
}

fn traversal_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    Error::Traversal {
        path,
        source: io::Error::from(err),
    }
}
