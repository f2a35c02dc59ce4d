//! Type name resolution and modifier composition.

use confdoc_ir::{Primitive, Section, Shape, TypeOption};
use confdoc_manifest::{Error, RawTypeDecl, Result};
use tracing::{debug, trace};

use super::{Resolved, Resolver, TypeRef, build::ensure_unique_names};

impl Resolver<'_> {
    /// Resolve every type name of a declaration into type options.
    ///
    /// The declaration's own sections are merged into its object option, or
    /// returned in [`Resolved::sections`] when it has none.
    pub fn resolve(&mut self, decl: &RawTypeDecl) -> Result<Resolved> {
        let mut options = Vec::new();
        for type_name in &decl.types {
            options.extend(self.resolve_one(decl, type_name)?);
        }

        if let [opt] = options.as_mut_slice() {
            if opt.choices.is_empty() {
                opt.choices = decl.choices.clone();
            }
            if opt.description.is_empty() {
                opt.description = decl.description.trim().to_string();
            }
        }

        let own = self.build_sections(&decl.sections)?;
        let sections = merge_own_sections(&decl.name, &mut options, own)?;

        Ok(Resolved { options, sections })
    }

    /// Resolve the type options of a declaration.
    pub fn resolve_types(&mut self, decl: &RawTypeDecl) -> Result<Vec<TypeOption>> {
        Ok(self.resolve(decl)?.options)
    }

    /// Resolve one of a declaration's type names.
    ///
    /// Wrappers are stripped, the inner name is matched against the primitive
    /// tags and then the registry, and each resulting option gets the
    /// wrappers composed onto its own shape.
    pub fn resolve_one(&mut self, decl: &RawTypeDecl, type_name: &str) -> Result<Vec<TypeOption>> {
        let type_ref = TypeRef::parse(type_name);
        let outer = Shape::from_wrappers(&type_ref.wrappers)
            .ok_or_else(|| Error::unsupported_shape(type_name))?;

        if let Some(primitive) = Primitive::parse(type_ref.inner) {
            return Ok(vec![TypeOption::primitive(primitive, outer)]);
        }

        let resolved = self.resolve_named(type_ref.inner, &decl.name)?;
        resolved
            .options
            .into_iter()
            .map(|opt| {
                let shape = outer.compose(opt.shape).ok_or_else(|| {
                    Error::unsupported_shape(outer.apply(&opt.shape.apply(type_ref.inner)))
                })?;
                Ok(TypeOption { shape, ..opt })
            })
            .collect()
    }

    /// Resolve a registered type by name, returning an owned copy.
    pub(super) fn resolve_named(&mut self, name: &str, referenced_by: &str) -> Result<Resolved> {
        if let Some(resolved) = self.cache.get(name) {
            trace!(name, "resolved type from cache");
            return Ok(resolved.clone());
        }

        let registry = self.registry;
        let decl = registry
            .get(name)
            .ok_or_else(|| Error::unknown_type(name, referenced_by))?;

        if let Some(pos) = self.stack.iter().position(|n| n == name) {
            let mut chain: Vec<&str> = self.stack[pos..].iter().map(String::as_str).collect();
            chain.push(name);
            return Err(Box::new(Error::CyclicType {
                chain: chain.join(" -> "),
            }));
        }

        self.stack.push(name.to_string());
        let result = self.resolve(decl);
        self.stack.pop();
        let resolved = result?;

        if !resolved.sections.is_empty() {
            debug!(name, "type declares sections but has no object option; ignoring them");
        }
        debug!(name, options = resolved.options.len(), "resolved type");

        self.cache.insert(name.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Returns true if the registered type resolves to an object option.
    pub(super) fn is_object_type(&mut self, name: &str, referenced_by: &str) -> Result<bool> {
        let resolved = self.resolve_named(name, referenced_by)?;
        Ok(resolved.options.iter().any(|o| o.primitive.is_object()))
    }
}

/// Attach a declaration's own sections to its object option.
///
/// With no sections yet the option adopts them. Otherwise the first own
/// section's properties extend the option's first section and any further
/// own sections follow it. Without an object option the sections are handed
/// back to stay on the property.
fn merge_own_sections(
    name: &str,
    options: &mut [TypeOption],
    own: Vec<Section>,
) -> Result<Vec<Section>> {
    if own.is_empty() {
        return Ok(own);
    }

    let objects: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.primitive.is_object())
        .map(|(i, _)| i)
        .collect();

    let target = match objects.as_slice() {
        [] => return Ok(own),
        [i] => &mut options[*i],
        _ => {
            return Err(Box::new(Error::MultipleInfoTypes {
                property: name.to_string(),
                types: objects
                    .iter()
                    .map(|i| options[*i].type_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }));
        }
    };

    if target.sections.is_empty() {
        target.sections = own;
        return Ok(Vec::new());
    }

    let mut own = own.into_iter();
    if let Some(first) = own.next() {
        target.sections[0].properties.extend(first.properties);
    }
    target.sections.extend(own);
    ensure_unique_names(&target.sections)?;
    Ok(Vec::new())
}
