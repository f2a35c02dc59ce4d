use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file to be generated, with a path relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file below `base`, creating parent directories, and return
    /// the full path written
    pub fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(&self.path);
        write_file(&path, &self.content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("make dir '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("write file '{}'", path.display()))?;
    Ok(())
}
