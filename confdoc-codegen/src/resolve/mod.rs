//! Type resolution.
//!
//! Resolution and section building are mutually recursive: building a
//! section resolves each property's types, and resolving a reference to an
//! object type builds that type's sections. Both live on [`Resolver`], which
//! borrows the registry read-only for the whole run.
//!
//! # Example
//!
//! ```ignore
//! let registry = TypeRegistry::load_dir("types")?;
//! let mut resolver = Resolver::new(&registry);
//! let sections = resolver.build_sections(&raw_config.sections)?;
//! ```

mod build;
mod inherit;
mod types;

use std::collections::HashMap;

use confdoc_ir::{Section, TypeOption, Wrapper};
use confdoc_manifest::TypeRegistry;

/// Resolves type references against a registry and builds sections.
#[derive(Debug)]
pub struct Resolver<'a> {
    registry: &'a TypeRegistry,
    /// Registered types currently being resolved, outermost first.
    stack: Vec<String>,
    /// Resolved registered types. Entries are cloned out, never shared.
    cache: HashMap<String, Resolved>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a fully loaded registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            stack: Vec::new(),
            cache: HashMap::new(),
        }
    }
}

/// The resolved form of one declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    /// Type options, in declaration order.
    pub options: Vec<TypeOption>,
    /// Declared sections that no object option absorbed.
    pub sections: Vec<Section>,
}

/// A type name split into its container wrappers and inner name.
///
/// ```ignore
/// let r = TypeRef::parse("array(map(string))");
/// assert_eq!(r.wrappers, vec![Wrapper::Array, Wrapper::Map]);
/// assert_eq!(r.inner, "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef<'n> {
    /// Wrappers, outermost first.
    pub wrappers: Vec<Wrapper>,
    /// The primitive tag or registered type name inside the wrappers.
    pub inner: &'n str,
}

impl<'n> TypeRef<'n> {
    /// Strip `array(...)` and `map(...)` wrappers from a type name.
    pub fn parse(name: &'n str) -> Self {
        let mut wrappers = Vec::new();
        let mut inner = name.trim();
        loop {
            if let Some(rest) = strip_wrapper(inner, Wrapper::Array) {
                wrappers.push(Wrapper::Array);
                inner = rest;
            } else if let Some(rest) = strip_wrapper(inner, Wrapper::Map) {
                wrappers.push(Wrapper::Map);
                inner = rest;
            } else {
                break;
            }
        }
        Self { wrappers, inner }
    }

    /// Returns true if the name carried no wrapper.
    pub fn is_bare(&self) -> bool {
        self.wrappers.is_empty()
    }
}

/// Match `<keyword>(<inner>)` with a non-empty inner name.
fn strip_wrapper(name: &str, wrapper: Wrapper) -> Option<&str> {
    let inner = name
        .strip_prefix(wrapper.keyword())?
        .strip_prefix('(')?
        .strip_suffix(')')?
        .trim();
    (!inner.is_empty()).then_some(inner)
}
