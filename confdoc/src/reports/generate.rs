//! Generate command report data structures.

use std::path::PathBuf;

use confdoc_core::PreviewFile;

use super::output::{Output, Report};

/// Report data from documentation generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Config name.
    pub name: String,
    /// Format identifier.
    pub format: &'static str,
    /// Number of properties at every depth.
    pub property_count: usize,
    /// Nested page list, for page formats.
    pub table_of_contents: Option<String>,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written below the output directory.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                out.preformatted(&format!(
                    "{} ({} properties)",
                    self.name, self.property_count
                ));
                out.newline();
                out.key_value(
                    &format!("Generated {} {} file(s)", files.len(), self.format),
                    &output_dir.display().to_string(),
                );
                if let Some(toc) = &self.table_of_contents {
                    out.newline();
                    out.section("Contents");
                    out.preformatted(toc.trim_end());
                } else {
                    for file in files {
                        out.added_item(&file.display().to_string());
                    }
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::StringOutput;

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            name: "server".to_string(),
            format: "conf",
            property_count: 1,
            table_of_contents: None,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "server.conf".to_string(),
                content: "port: 4222\n".to_string(),
            }]),
        };
        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "── server.conf ──\nport: 4222\n\n── Summary ──\n1 files would be generated\n"
        );
    }

    #[test]
    fn test_render_written_with_contents() {
        let report = GenerateReport {
            name: "server".to_string(),
            format: "markdown",
            property_count: 1,
            table_of_contents: Some("- [server](/index.md)\n  - [port](/port/index.md)\n".to_string()),
            result: GenerationResult::Written {
                output_dir: PathBuf::from("ref"),
                files: vec![PathBuf::from("ref/index.md"), PathBuf::from("ref/port/index.md")],
            },
        };
        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "server (1 properties)\n\nGenerated 2 markdown file(s): ref\n\nContents:\n- [server](/index.md)\n  - [port](/port/index.md)\n"
        );
    }
}
