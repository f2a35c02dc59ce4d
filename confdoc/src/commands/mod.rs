mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use confdoc_manifest::Settings;
use eyre::Result;
use generate::GenerateCommand;

use crate::logging;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for confdoc_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "confdoc")]
#[command(version)]
#[command(about = "Generate reference documentation from YAML configuration schemas")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a settings file (defaults to ./confdoc.toml when present)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.load_settings()),
            Commands::Check(cmd) => cmd.run(&self.load_settings()),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn load_settings(&self) -> Settings {
        Settings::discover(self.settings.as_deref(), Path::new(".")).unwrap_or_exit()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render reference documentation from the config schema
    Generate(GenerateCommand),

    /// Load and resolve the schema without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
