use std::path::{Path, PathBuf};

mod check;
mod init;
mod terminal;

use check::Check;
use clap::ArgAction;
use docscheck::Config;
use init::Init;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the documentation set
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// The configuration file, relative to the root [default: .docs-check.toml]
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config_path = self.config_path();

        self.command
            .unwrap_or_else(|| Command::Check(Check::default()))
            .run(&self.root, &config_path)
    }

    /// Resolves the configuration file against the documentation root.
    fn config_path(&self) -> PathBuf {
        self.config.as_ref().map_or_else(
            || self.root.join(Config::FILE_NAME),
            |path| self.root.join(path),
        )
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check that every resource has an import script and a changelog entry
    /// (default)
    Check(Check),

    /// Write a default configuration file
    Init(Init),
}

impl Command {
    fn run(self, root: &Path, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(root, config_path)?,
            Self::Init(command) => command.run(config_path)?,
        }
        Ok(())
    }
}
