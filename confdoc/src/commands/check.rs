use std::path::PathBuf;

use clap::Args;
use confdoc_manifest::Settings;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Root config schema (defaults to ./config.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of type definition files (defaults to ./types)
    #[arg(short, long)]
    pub types: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, settings: &Settings) -> Result<()> {
        let config_path = self
            .config
            .clone()
            .or_else(|| settings.paths.config.clone())
            .unwrap_or_else(|| PathBuf::from("config.yaml"));
        let types_dir = self
            .types
            .clone()
            .or_else(|| settings.paths.types.clone())
            .unwrap_or_else(|| PathBuf::from("types"));

        let config = confdoc_codegen::load(&config_path, &types_dir).unwrap_or_exit();

        ops::check(&config, &config_path).render(&mut TerminalOutput::new());
        Ok(())
    }
}
