//! Reading the changelog from disk

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::Changelog;

/// Reads the whole changelog file into memory.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be read as UTF-8 text.
#[instrument(level = "debug")]
pub fn load_changelog(path: &Path) -> Result<Changelog, ChangelogError> {
    let text = std::fs::read_to_string(path).map_err(|source| ChangelogError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = text.len(), "loaded changelog");
    Ok(Changelog::new(text))
}

/// The changelog could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read changelog '{}'", path.display())]
pub struct ChangelogError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl ChangelogError {
    /// The changelog path that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
