//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the root config schema.
    pub config_path: PathBuf,
    /// Config name.
    pub name: String,
    /// Config description.
    pub description: Option<String>,
    /// Number of properties at every depth.
    pub property_count: usize,
    /// Number of pages a page format would write.
    pub page_count: usize,
    /// Indented property tree.
    pub tree: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.preformatted(&format!("  {}", self.name));
        if let Some(desc) = &self.description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        out.section(&format!(
            "  {} propert{}, {} page{}",
            self.property_count,
            if self.property_count == 1 { "y" } else { "ies" },
            self.page_count,
            if self.page_count == 1 { "" } else { "s" }
        ));
        out.preformatted(self.tree.trim_end());
    }
}
