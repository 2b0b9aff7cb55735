use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ExemptionList, InvalidResourceName, ResourceName};

/// Configuration for documentation completeness checks.
///
/// Paths are relative to the documentation root unless they are absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The directory holding one subdirectory per resource.
    pub resources_dir: PathBuf,

    /// The changelog searched for resource names.
    pub changelog: PathBuf,

    /// The name of the import script expected in each resource directory.
    pub import_script: String,

    /// Resources that are not expected to ship an import script.
    ///
    /// Typically singletons and action-style resources that have nothing to
    /// import.
    exempt: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            changelog: default_changelog(),
            import_script: default_import_script(),
            exempt: Vec::new(),
        }
    }
}

impl Config {
    /// The file name the configuration is stored under in the documentation
    /// root.
    pub const FILE_NAME: &'static str = ".docs-check.toml";

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration if the file exists, otherwise returns the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the configured exemptions as written.
    #[must_use]
    pub fn exempt(&self) -> &[String] {
        &self.exempt
    }

    /// Adds a resource to the exemption list.
    ///
    /// Returns `true` if the resource was added, `false` if it was already
    /// exempt.
    pub fn add_exemption(&mut self, name: String) -> bool {
        if self.exempt.contains(&name) {
            false
        } else {
            self.exempt.push(name);
            true
        }
    }

    /// Builds the exemption list, validating every name.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured name is not a valid resource name.
    pub fn exemptions(&self) -> Result<ExemptionList, InvalidResourceName> {
        self.exempt
            .iter()
            .map(|name| ResourceName::try_from(name.as_str()))
            .collect()
    }

    /// Resolves the resource directory against the documentation root.
    #[must_use]
    pub fn resources_path(&self, root: &Path) -> PathBuf {
        root.join(&self.resources_dir)
    }

    /// Resolves the changelog path against the documentation root.
    #[must_use]
    pub fn changelog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog)
    }
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("examples/resources")
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_import_script() -> String {
    "import.sh".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_resources_dir")]
        resources_dir: PathBuf,

        #[serde(default = "default_changelog")]
        changelog: PathBuf,

        #[serde(default = "default_import_script")]
        import_script: String,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        exempt: Vec<String>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                resources_dir,
                changelog,
                import_script,
                exempt,
            } => Self {
                resources_dir,
                changelog,
                import_script,
                exempt,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            resources_dir: config.resources_dir,
            changelog: config.changelog,
            import_script: config.import_script,
            exempt: config.exempt,
        }
    }
}
