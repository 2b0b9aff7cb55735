use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use clap::Parser;
use docscheck::{CheckSelection, ResourceName, VerificationReport, Workspace};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Check resource examples for import scripts and changelog entries")]
pub struct Check {
    /// Checks to run (can be specified multiple times)
    #[arg(long, value_name = "TYPE")]
    check: Vec<CheckType>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,

    /// Resource directory, relative to the root (overrides the config file)
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Changelog file, relative to the root (overrides the config file)
    #[arg(long, value_name = "FILE")]
    changelog: Option<PathBuf>,

    /// Exempt a resource from the import script check (can be specified
    /// multiple times; adds to the config file)
    #[arg(long, value_name = "RESOURCE")]
    exempt: Vec<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq)]
enum CheckType {
    /// Every resource is mentioned in the changelog
    Changelog,
    /// Every non-exempt resource has an import script
    Import,
    /// Run all checks
    All,
}

impl From<CheckType> for CheckSelection {
    fn from(check: CheckType) -> Self {
        match check {
            CheckType::Changelog => Self::CHANGELOG,
            CheckType::Import => Self::IMPORT_SCRIPT,
            CheckType::All => Self::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

impl Check {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path, config_path: &Path) -> anyhow::Result<()> {
        let mut workspace = Workspace::open_with_config_file(root.to_path_buf(), config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        let config = workspace.config_mut();
        if let Some(resources) = &self.resources {
            config.resources_dir.clone_from(resources);
        }
        if let Some(changelog) = &self.changelog {
            config.changelog.clone_from(changelog);
        }
        for name in &self.exempt {
            config.add_exemption(name.clone());
        }

        let selection = self.selection();
        let report = workspace
            .check(selection)
            .with_context(|| format!("failed to check {}", workspace.root().display()))?;

        match self.output {
            OutputFormat::Table => self.output_table(&report, &workspace, selection),
            OutputFormat::Json => Self::output_json(&report, selection)?,
            OutputFormat::Summary => Self::output_summary(&report),
        }

        if !report.is_passing() {
            process::exit(2);
        }

        Ok(())
    }

    fn selection(&self) -> CheckSelection {
        if self.check.is_empty() {
            return CheckSelection::ALL;
        }
        self.check
            .iter()
            .map(|&check| CheckSelection::from(check))
            .fold(
                CheckSelection {
                    changelog: false,
                    import_script: false,
                },
                CheckSelection::union,
            )
    }

    fn output_table(
        &self,
        report: &VerificationReport,
        workspace: &Workspace,
        selection: CheckSelection,
    ) {
        if self.quiet {
            return;
        }

        let config = workspace.config();
        let resource_root = workspace.resource_root();
        let resources_path = resource_root.path();
        println!(
            "{}\n",
            format!(
                "Checking {} resources in {}...",
                report.resources,
                resources_path
                    .strip_prefix(workspace.root())
                    .unwrap_or(resources_path)
                    .display()
            )
            .heading()
        );

        if !selection.changelog {
            println!("{}", "- Changelog:       skipped".note());
        } else if report.missing_changelog_entry.is_empty() {
            println!(
                "✓ Changelog:       all resources mentioned in {}",
                config.changelog.display()
            );
        } else {
            println!(
                "{}",
                format!(
                    "✗ Changelog:       {} resources missing a changelog entry",
                    report.missing_changelog_entry.len()
                )
                .fail()
            );
            print_names(&report.missing_changelog_entry);
        }

        if !selection.import_script {
            println!("{}", "- Import scripts:  skipped".note());
        } else if report.missing_import_script.is_empty() {
            println!(
                "✓ Import scripts:  all non-exempt resources have {}",
                resource_root.import_script()
            );
        } else {
            println!(
                "{}",
                format!(
                    "✗ Import scripts:  {} resources missing {}",
                    report.missing_import_script.len(),
                    resource_root.import_script()
                )
                .fail()
            );
            print_names(&report.missing_import_script);
        }

        if !report.stale_exemptions.is_empty() {
            println!();
            for name in &report.stale_exemptions {
                println!(
                    "{}",
                    format!("note: exemption '{name}' does not match any resource").note()
                );
            }
        }

        if report.is_passing() {
            println!("\n{}", "All resources are documented".pass());
        } else {
            println!(
                "\n{}",
                format!("Summary: {} issues found", report.violation_count()).fail()
            );
        }
    }

    fn output_json(report: &VerificationReport, selection: CheckSelection) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "status": if report.is_passing() { "passed" } else { "failed" },
            "checks": {
                "changelog": selection.changelog,
                "import_script": selection.import_script,
            },
            "resources": report.resources,
            "missing_import_script": report.missing_import_script,
            "missing_changelog_entry": report.missing_changelog_entry,
            "stale_exemptions": report.stale_exemptions,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_summary(report: &VerificationReport) {
        println!(
            "missing_import_script={} missing_changelog_entry={}",
            report.missing_import_script.len(),
            report.missing_changelog_entry.len()
        );
    }
}

fn print_names(names: &BTreeSet<ResourceName>) {
    for name in names {
        println!("    • {name}");
    }
}
