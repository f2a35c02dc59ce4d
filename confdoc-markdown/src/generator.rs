use confdoc_codegen::{DEFAULT_INDEX_NAME, LinkOptions, PageTree};
use confdoc_core::{DocFormat, File};
use confdoc_ir::Config;
use eyre::Result;
use tracing::debug;

use crate::PageRenderer;

/// Rendering options for Markdown pages.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    pub links: LinkOptions,
    /// Render a breadcrumb trail below each title.
    pub breadcrumbs: bool,
    /// Render child properties as a table instead of headed entries.
    pub tables: bool,
}

impl MarkdownOptions {
    /// The page file name, falling back to `index.md`.
    pub fn index_name(&self) -> &str {
        if self.links.index_name.is_empty() {
            DEFAULT_INDEX_NAME
        } else {
            &self.links.index_name
        }
    }
}

/// Markdown generator producing one page per property.
pub struct Generator<'a> {
    config: &'a Config,
    options: MarkdownOptions,
}

impl DocFormat for Generator<'_> {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self) -> Result<Vec<File>> {
        let tree = PageTree::new(self.config);
        let index_name = self.options.index_name();

        let files: Vec<File> = tree
            .pages()
            .iter()
            .map(|page| {
                let content = PageRenderer::new(page, &self.options).render();
                File::new(page.file(index_name), content)
            })
            .collect();

        debug!(pages = files.len(), "rendered markdown pages");
        Ok(files)
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            options: MarkdownOptions::default(),
        }
    }

    /// Set the rendering options.
    pub fn with_options(mut self, options: MarkdownOptions) -> Self {
        self.options = options;
        self
    }

    /// Table of contents of the generated pages.
    pub fn table_of_contents(&self) -> String {
        PageTree::new(self.config).table_of_contents(&self.options.links)
    }
}
