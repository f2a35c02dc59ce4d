//! Output format abstraction.

use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::debug;

use crate::File;

/// Trait for documentation output formats.
///
/// Implement this trait to add a new way of rendering a resolved config
/// tree. Formats only produce files; writing them is shared.
pub trait DocFormat {
    /// Format identifier (e.g., "markdown", "conf", "json")
    fn name(&self) -> &'static str;

    /// Render every output file, with paths relative to the output directory
    fn render(&self) -> Result<Vec<File>>;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .render()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect())
    }

    /// Generate all files into the specified output directory.
    ///
    /// Files are written in render order. A failure leaves the files written
    /// so far on disk.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut written = Vec::new();
        for file in self.render()? {
            let path = file.write(output_dir)?;
            debug!(format = self.name(), path = %path.display(), "wrote file");
            written.push(path);
        }
        Ok(GenerateResult { written })
    }
}

/// Result of generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
