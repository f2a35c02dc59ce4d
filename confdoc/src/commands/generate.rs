use std::path::PathBuf;

use clap::Args;
use confdoc_codegen::{DEFAULT_INDEX_NAME, LinkOptions};
use confdoc_manifest::Settings;
use confdoc_markdown::MarkdownOptions;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    format::OutputFormat,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Root config schema (defaults to ./config.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of type definition files (defaults to ./types)
    #[arg(short, long)]
    pub types: Option<PathBuf>,

    /// Output directory (defaults to ./ref)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Base path prepended to absolute links
    #[arg(long)]
    pub base: Option<String>,

    /// Use links relative to the current page
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub relative: Option<bool>,

    /// File name of each page (defaults to index.md)
    #[arg(long)]
    pub index_name: Option<String>,

    /// Drop the index file name from links
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub trim_index: Option<bool>,

    /// Render a breadcrumb trail on each page
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub breadcrumbs: Option<bool>,

    /// Render child properties as tables
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub tables: Option<bool>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, settings: &Settings) -> Result<()> {
        let opts = self.options(settings)?;
        let config = confdoc_codegen::load(&opts.config_path, &opts.types_dir).unwrap_or_exit();

        let report = ops::generate(&config, &opts)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge flags over settings over built-in defaults.
    fn options(&self, settings: &Settings) -> Result<GenerateOptions> {
        let paths = &settings.paths;
        let render = &settings.render;

        let format = match (self.format, &render.format) {
            (Some(format), _) => format,
            (None, Some(name)) => OutputFormat::from_setting(name)?,
            (None, None) => OutputFormat::default(),
        };

        let links = LinkOptions::new(pick(&self.base, &render.base, ""))
            .relative(flag(self.relative, render.relative))
            .index_name(pick(&self.index_name, &render.index_name, DEFAULT_INDEX_NAME))
            .trim_index(flag(self.trim_index, render.trim_index));

        Ok(GenerateOptions {
            config_path: path(&self.config, &paths.config, "config.yaml"),
            types_dir: path(&self.types, &paths.types, "types"),
            output_dir: path(&self.output, &paths.output, "ref"),
            format,
            markdown: MarkdownOptions {
                links,
                breadcrumbs: flag(self.breadcrumbs, render.breadcrumbs),
                tables: flag(self.tables, render.tables),
            },
            dry_run: self.dry_run,
        })
    }
}

fn flag(cli: Option<bool>, file: Option<bool>) -> bool {
    cli.or(file).unwrap_or(false)
}

fn pick<'a>(cli: &'a Option<String>, file: &'a Option<String>, default: &'a str) -> &'a str {
    cli.as_deref().or(file.as_deref()).unwrap_or(default)
}

fn path(cli: &Option<PathBuf>, file: &Option<PathBuf>, default: &str) -> PathBuf {
    cli.clone()
        .or_else(|| file.clone())
        .unwrap_or_else(|| PathBuf::from(default))
}
