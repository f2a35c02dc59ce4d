//! Output format dispatch.

use clap::ValueEnum;
use confdoc_codegen::JsonFormat;
use confdoc_core::DocFormat;
use confdoc_ir::Config;
use confdoc_markdown::MarkdownOptions;
use eyre::{Result, eyre};

/// Documentation format selected with `--format` or `[render] format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One Markdown page per property
    #[default]
    Markdown,
    /// Commented sample configuration file
    Conf,
    /// The resolved tree as JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name from the settings file.
    pub fn from_setting(value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true)
            .map_err(|_| eyre!("unknown format '{value}' in settings (expected markdown, conf or json)"))
    }

    /// Whether the format writes a page tree.
    pub fn has_pages(self) -> bool {
        matches!(self, Self::Markdown)
    }

    /// Create the renderer for this format.
    pub fn renderer<'a>(
        self,
        config: &'a Config,
        options: MarkdownOptions,
    ) -> Box<dyn DocFormat + 'a> {
        match self {
            Self::Markdown => {
                Box::new(confdoc_markdown::Generator::new(config).with_options(options))
            }
            Self::Conf => Box::new(confdoc_conf::Generator::new(config)),
            Self::Json => Box::new(JsonFormat::new(config)),
        }
    }
}
