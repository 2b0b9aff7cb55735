use std::path::Path;

use docscheck::{Config, ResourceName};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Resource to exempt from the import script check (can be specified
    /// multiple times)
    #[arg(long, value_name = "RESOURCE", value_parser = parse_resource_name)]
    exempt: Vec<ResourceName>,
}

fn parse_resource_name(s: &str) -> Result<ResourceName, String> {
    s.parse().map_err(|e| format!("{e}"))
}

impl Init {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        let mut config = Config::default();
        for name in self.exempt {
            config.add_exemption(name.to_string());
        }

        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!(
            "{}",
            format!("✅ Created {}", config_path.display()).pass()
        );
        println!("  resources:     {}", config.resources_dir.display());
        println!("  changelog:     {}", config.changelog.display());
        println!("  import script: {}", config.import_script);
        println!("  exemptions:    {}", config.exempt().len());

        Ok(())
    }
}
