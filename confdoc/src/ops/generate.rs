//! Generate operation - render documentation from a resolved config.

use std::path::PathBuf;

use confdoc_codegen::PageTree;
use confdoc_ir::Config;
use confdoc_markdown::MarkdownOptions;
use eyre::{Context, Result};
use tracing::info;

use crate::{
    format::OutputFormat,
    reports::{GenerateReport, GenerationResult},
};

/// Options for the generate operation, after flags and settings are merged.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Root config schema.
    pub config_path: PathBuf,
    /// Directory of type files.
    pub types_dir: PathBuf,
    /// Output directory.
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub markdown: MarkdownOptions,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: &Config, opts: &GenerateOptions) -> Result<GenerateReport> {
    let renderer = opts.format.renderer(config, opts.markdown.clone());

    let result = if opts.dry_run {
        GenerationResult::Preview(renderer.preview()?)
    } else {
        let generated = renderer.generate(&opts.output_dir).wrap_err_with(|| {
            format!("Failed to generate into '{}'", opts.output_dir.display())
        })?;
        info!(
            format = renderer.name(),
            files = generated.written.len(),
            "generated documentation"
        );
        GenerationResult::Written {
            output_dir: opts.output_dir.clone(),
            files: generated.written,
        }
    };

    let table_of_contents = opts
        .format
        .has_pages()
        .then(|| PageTree::new(config).table_of_contents(&opts.markdown.links));

    Ok(GenerateReport {
        name: config.name.clone(),
        format: renderer.name(),
        property_count: config.property_count(),
        table_of_contents,
        result,
    })
}
