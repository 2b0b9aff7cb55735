//! Enumeration of resource example directories
//!
//! Each immediate subdirectory of the resource root is one resource, including
//! symlinks to directories. Files sitting directly in the root are ignored.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{instrument, trace};
use walkdir::WalkDir;

use crate::domain::{InvalidResourceName, Resource, ResourceName};

/// A directory containing one subdirectory per resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    root: PathBuf,
    import_script: String,
}

impl ResourceRoot {
    /// Opens a resource root that expects `import_script` in each resource
    /// directory.
    #[must_use]
    pub fn new(root: PathBuf, import_script: impl Into<String>) -> Self {
        Self {
            root,
            import_script: import_script.into(),
        }
    }

    /// The path of the resource root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The import script filename.
    #[must_use]
    pub fn import_script(&self) -> &str {
        &self.import_script
    }

    /// Enumerates every resource, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or one of its entries cannot be read, or if
    /// a resource directory name is not a valid resource name.
    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn scan(&self) -> Result<Vec<Resource>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut resources = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ScanError::Walk {
                root: self.root.clone(),
                source: e.into(),
            })?;

            // Follows symlinks.
            if !entry.path().is_dir() {
                trace!(path = %entry.path().display(), "skipping non-directory entry");
                continue;
            }

            let file_name = entry.file_name();
            let name = file_name
                .to_str()
                .ok_or_else(|| ScanError::NonUtf8Name(entry.path().to_path_buf()))?;
            let name = ResourceName::try_from(name).map_err(ScanError::InvalidName)?;

            let has_import_script = entry.path().join(&self.import_script).is_file();
            trace!(resource = %name, has_import_script, "found resource");
            resources.push(Resource::new(name, has_import_script));
        }

        tracing::debug!(count = resources.len(), "scanned resources");
        Ok(resources)
    }
}

/// Errors that abort a resource scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The resource root is missing or is not a directory.
    #[error("resource root '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The resource root or one of its entries could not be read.
    #[error("failed to read resource root '{}'", root.display())]
    Walk {
        /// The resource root being scanned.
        root: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A resource directory name is not valid UTF-8.
    #[error("resource directory '{}' has a non UTF-8 name", .0.display())]
    NonUtf8Name(PathBuf),

    /// A resource directory name cannot be used as a resource name.
    #[error(transparent)]
    InvalidName(InvalidResourceName),
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn add_resource(root: &Path, name: &str, with_import: bool) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("resource.tf"), "resource {}\n").unwrap();
        if with_import {
            fs::write(dir.join("import.sh"), "terraform import x y\n").unwrap();
        }
    }

    #[test]
    fn scans_immediate_subdirectories() {
        let tmp = TempDir::new().unwrap();
        add_resource(tmp.path(), "b_bar", false);
        add_resource(tmp.path(), "a_foo", true);
        fs::write(tmp.path().join("README.md"), "not a resource").unwrap();

        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.sh")
            .scan()
            .unwrap();

        let summary: Vec<_> = resources
            .iter()
            .map(|r| (r.name.as_str(), r.has_import_script))
            .collect();
        assert_eq!(summary, vec![("a_foo", true), ("b_bar", false)]);
    }

    #[test]
    fn nested_directories_are_not_resources() {
        let tmp = TempDir::new().unwrap();
        add_resource(tmp.path(), "a_foo", true);
        fs::create_dir_all(tmp.path().join("a_foo").join("nested")).unwrap();

        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.sh")
            .scan()
            .unwrap();

        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn import_script_must_be_a_file() {
        let tmp = TempDir::new().unwrap();
        add_resource(tmp.path(), "a_foo", false);
        fs::create_dir(tmp.path().join("a_foo").join("import.sh")).unwrap();

        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.sh")
            .scan()
            .unwrap();

        assert!(!resources[0].has_import_script);
    }

    #[test]
    fn honours_custom_import_script_name() {
        let tmp = TempDir::new().unwrap();
        add_resource(tmp.path(), "a_foo", true);

        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.ps1")
            .scan()
            .unwrap();

        assert!(!resources[0].has_import_script);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_resource_directory_is_scanned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("resources");
        let elsewhere = tmp.path().join("elsewhere");
        add_resource(&root, "a_foo", true);
        add_resource(&elsewhere, "d_linked", false);
        std::os::unix::fs::symlink(elsewhere.join("d_linked"), root.join("d_linked")).unwrap();

        let resources = ResourceRoot::new(root, "import.sh").scan().unwrap();

        let summary: Vec<_> = resources
            .iter()
            .map(|r| (r.name.as_str(), r.has_import_script))
            .collect();
        assert_eq!(summary, vec![("a_foo", true), ("d_linked", false)]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_not_a_resource() {
        let tmp = TempDir::new().unwrap();
        add_resource(tmp.path(), "a_foo", true);
        std::os::unix::fs::symlink(
            tmp.path().join("a_foo").join("resource.tf"),
            tmp.path().join("linked.tf"),
        )
        .unwrap();

        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.sh")
            .scan()
            .unwrap();

        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let root = ResourceRoot::new(tmp.path().join("missing"), "import.sh");

        let error = root.scan().unwrap_err();
        assert!(matches!(error, ScanError::NotADirectory(_)));
    }

    #[test]
    fn empty_root_has_no_resources() {
        let tmp = TempDir::new().unwrap();
        let resources = ResourceRoot::new(tmp.path().to_path_buf(), "import.sh")
            .scan()
            .unwrap();
        assert!(resources.is_empty());
    }
}
