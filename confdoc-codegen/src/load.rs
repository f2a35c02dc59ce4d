//! Pipeline entry: load the root config and types, then build the tree.

use std::path::Path;

use confdoc_ir::Config;
use confdoc_manifest::{RawConfig, Result, TypeRegistry};
use tracing::info;

use crate::Resolver;

/// Build the resolved config tree from an already loaded root config and
/// registry.
pub fn build_config(raw: &RawConfig, registry: &TypeRegistry) -> Result<Config> {
    let sections = Resolver::new(registry).build_sections(&raw.sections)?;
    let config = Config {
        name: raw.name.trim().to_string(),
        description: raw.description.trim().to_string(),
        sections,
    };
    info!(
        name = %config.name,
        types = registry.len(),
        properties = config.property_count(),
        "resolved config"
    );
    Ok(config)
}

/// Load the root config and every type file in `types_dir`.
pub fn load(config_path: impl AsRef<Path>, types_dir: impl AsRef<Path>) -> Result<Config> {
    let raw = RawConfig::from_file(config_path)?;
    let registry = TypeRegistry::load_dir(types_dir)?;
    build_config(&raw, &registry)
}

/// Load from in-memory sources. Type sources are named `types-<n>.yaml` in
/// error messages.
pub fn load_str(config: &str, types: &[&str]) -> Result<Config> {
    let raw = RawConfig::from_str_with_filename(config, "config.yaml")?;
    let mut registry = TypeRegistry::new();
    for (i, source) in types.iter().enumerate() {
        registry.add_source(source, &format!("types-{i}.yaml"))?;
    }
    build_config(&raw, &registry)
}
