//! Section and property building.

use std::collections::HashSet;

use confdoc_core::trimmed;
use confdoc_ir::{Example, Property, Section};
use confdoc_manifest::{Error, RawExample, RawProperties, RawSection, RawTypeDecl, Result};
use tracing::trace;

use super::Resolver;

impl Resolver<'_> {
    /// Build sections in declaration order.
    ///
    /// Property names must be unique across all sibling sections, since
    /// siblings share one page directory.
    pub fn build_sections(&mut self, raw: &[RawSection]) -> Result<Vec<Section>> {
        let sections = raw
            .iter()
            .map(|s| self.build_section(s))
            .collect::<Result<Vec<_>>>()?;
        ensure_unique_names(&sections)?;
        Ok(sections)
    }

    /// Build one section.
    ///
    /// A section without properties becomes a header. Otherwise its property
    /// block must be a mapping of property name to declaration.
    pub fn build_section(&mut self, raw: &RawSection) -> Result<Section> {
        let mut section = Section {
            name: raw.name.as_deref().and_then(trimmed),
            url: raw.url.as_deref().and_then(trimmed),
            description: raw.description.as_deref().and_then(trimmed),
            properties: Vec::new(),
        };

        let entries = match &raw.properties {
            RawProperties::Missing => return Ok(section),
            RawProperties::Malformed(found) => {
                return Err(Error::malformed_section(
                    raw.label(),
                    format!("expected a mapping of properties, found {found}"),
                ));
            }
            RawProperties::Entries(entries) => entries,
        };

        for (name, decl) in entries {
            let mut decl = decl.clone();
            decl.normalize(name)?;
            section.properties.push(self.build_property(&decl)?);
        }

        Ok(section)
    }

    /// Build a property from its declaration.
    pub fn build_property(&mut self, decl: &RawTypeDecl) -> Result<Property> {
        let resolved = self.resolve(decl)?;
        let decl = self.inherit_metadata(decl)?;
        trace!(property = %decl.name, options = resolved.options.len(), "built property");

        Ok(Property {
            name: decl.name.trim().to_string(),
            types: resolved.options,
            url: decl.url.as_deref().and_then(trimmed),
            description: decl.description.trim().to_string(),
            deprecation: decl.deprecation.as_deref().and_then(trimmed),
            default: decl.default.clone(),
            disabled: decl.disabled,
            examples: decl.examples.iter().map(to_example).collect(),
            aliases: decl.aliases.clone(),
            reloadable: decl.reloadable.unwrap_or(true),
            reloadable_note: decl.reloadable_note.as_deref().and_then(trimmed),
            version: decl.version.as_deref().and_then(trimmed),
            sections: resolved.sections,
        })
    }
}

fn to_example(raw: &RawExample) -> Example {
    Example {
        label: raw.label.trim().to_string(),
        description: raw.description.trim().to_string(),
        value: raw.value.clone(),
    }
}

/// Reject a property name that appears twice among sibling sections.
pub(super) fn ensure_unique_names(sections: &[Section]) -> Result<()> {
    let mut seen = HashSet::new();
    for section in sections {
        for property in &section.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(Error::duplicate_property(
                    &property.name,
                    section.name.as_deref().unwrap_or("<unnamed>"),
                ));
            }
        }
    }
    Ok(())
}
