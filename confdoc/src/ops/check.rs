//! Check operation - schema validation summary.

use std::path::Path;

use confdoc_codegen::{DisplayStyle, PageTree, TreeDisplay};
use confdoc_ir::Config;

use crate::reports::CheckReport;

/// Summarize an already resolved config.
///
/// Loading and resolving is where validation happens; by the time a
/// `Config` exists every reference is known to be sound.
pub fn check(config: &Config, config_path: &Path) -> CheckReport {
    let tree = TreeDisplay::new(config)
        .style(DisplayStyle::WithTypes)
        .indent("  ")
        .render()
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    CheckReport {
        config_path: config_path.to_path_buf(),
        name: config.name.clone(),
        description: (!config.description.is_empty()).then(|| config.description.clone()),
        property_count: config.property_count(),
        page_count: PageTree::new(config).page_count(),
        tree,
    }
}
