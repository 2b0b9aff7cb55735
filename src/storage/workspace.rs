//! A documentation root and its check configuration
//!
//! The [`Workspace`] ties together the configuration file, the resource root
//! and the changelog, and runs the completeness checker over them.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    domain::{
        Changelog, CheckSelection, Config, InvalidResourceName, VerificationReport,
        overlapping_names, verify,
    },
    storage::{ChangelogError, ResourceRoot, ScanError, load_changelog},
};

/// A documentation root with its configuration loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens a documentation root, reading `.docs-check.toml` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be parsed.
    pub fn open(root: PathBuf) -> Result<Self, WorkspaceError> {
        let config_path = root.join(Config::FILE_NAME);
        Self::open_with_config_file(root, &config_path)
    }

    /// Opens a documentation root using the configuration file at
    /// `config_path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn open_with_config_file(root: PathBuf, config_path: &Path) -> Result<Self, WorkspaceError> {
        let config = Config::load_or_default(config_path).map_err(WorkspaceError::Config)?;
        Ok(Self::with_config(root, config))
    }

    /// Creates a workspace with an explicit configuration.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// The documentation root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration, for command-line overrides.
    pub const fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The resource root described by the configuration.
    #[must_use]
    pub fn resource_root(&self) -> ResourceRoot {
        ResourceRoot::new(
            self.config.resources_path(&self.root),
            self.config.import_script.clone(),
        )
    }

    /// Scans the resource root and checks every resource.
    ///
    /// The changelog is only read when the changelog check is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the exemption list is invalid, the resource root
    /// cannot be scanned, or the changelog cannot be read. Violations are not
    /// errors; they are recorded in the returned report.
    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn check(&self, selection: CheckSelection) -> Result<VerificationReport, WorkspaceError> {
        let exemptions = self.config.exemptions()?;
        let resources = self.resource_root().scan()?;

        let changelog = if selection.changelog {
            load_changelog(&self.config.changelog_path(&self.root))?
        } else {
            Changelog::default()
        };

        if selection.changelog {
            for (short, long) in overlapping_names(resources.iter().map(|r| &r.name)) {
                info!(
                    %short,
                    %long,
                    "'{short}' is part of '{long}'; a changelog mention of '{long}' also counts for '{short}'"
                );
            }
        }

        let report = verify(&resources, &changelog, &exemptions, selection);

        for name in &report.stale_exemptions {
            info!(resource = %name, "exemption does not match any resource");
        }

        Ok(report)
    }
}

/// Errors that prevent a check from producing a report.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// The configuration file could not be loaded.
    #[error("{0}")]
    Config(String),

    /// The exemption list names something that cannot be a resource.
    #[error("invalid exemption list")]
    Exemption(#[from] InvalidResourceName),

    /// The resource root could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The changelog could not be read.
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}
