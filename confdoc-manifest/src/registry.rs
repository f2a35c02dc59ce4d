//! Type registry: the global namespace of named type declarations.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, RawTypeDecl, Result, SourceContext, raw::RawTypesFile};

/// Flat mapping of type name to normalized raw declaration.
///
/// The registry is fully built before any property is resolved, so types may
/// reference types declared later in the same or another file.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, RawTypeDecl>,
    origins: HashMap<String, PathBuf>,
}

impl FromStr for TypeRegistry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.add_source(s, "types.yaml")?;
        Ok(registry)
    }
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every type file in `paths`, in order.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut registry = Self::new();
        for path in paths {
            registry.add_file(path)?;
        }
        Ok(registry)
    }

    /// Load every type file found in `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(&type_files(dir)?)
    }

    /// Read a type file and add its declarations.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.add_source(&content, &path.display().to_string())
    }

    /// Parse a type source and add its declarations.
    ///
    /// Fails on a type name that is already registered, whether it came from
    /// another source or from earlier in this one.
    pub fn add_source(&mut self, content: &str, filename: &str) -> Result<()> {
        let ctx = SourceContext::new(content, filename);
        let file: RawTypesFile = serde_yaml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        debug!(file = filename, count = file.types.len(), "loaded type file");

        for (name, mut decl) in file.types {
            if let Some(first) = self.origins.get(&name) {
                return Err(Box::new(Error::DuplicateType {
                    name,
                    first: first.clone(),
                    second: PathBuf::from(filename),
                }));
            }
            decl.normalize(&name)?;
            self.origins.insert(name.clone(), PathBuf::from(filename));
            self.types.insert(name, decl);
        }
        Ok(())
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&RawTypeDecl> {
        self.types.get(name)
    }

    /// Returns true if a type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered type names, in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// List the type files in a directory.
///
/// Every regular, non-hidden file is a type file. The result is sorted by
/// file name so loading order (and therefore which file a duplicate is
/// reported against) does not depend on the filesystem.
pub fn type_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || !path.is_file() {
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_from_str() {
        let registry: TypeRegistry = r#"
            types:
              tls:
                type: object
                description: TLS settings
                properties:
                  cert_file:
                    type: string
              duration-or-int:
                types: [duration, integer]
            "#
        .parse()
        .unwrap();

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["tls", "duration-or-int"]);

        let tls = registry.get("tls").unwrap();
        assert_eq!(tls.name, "tls");
        assert_eq!(tls.types, vec!["object"]);
        assert_eq!(tls.sections.len(), 1);
    }

    #[test]
    fn test_name_key_replaced_by_registry_key() {
        let registry: TypeRegistry = r#"
            types:
              tls:
                name: transport-security
                type: object
                description:
            "#
        .parse()
        .unwrap();

        let tls = registry.get("tls").unwrap();
        assert_eq!(tls.name, "tls");
        assert_eq!(tls.description, "");
    }

    #[test]
    fn test_duplicate_across_sources() {
        let mut registry = TypeRegistry::new();
        registry
            .add_source("types:\n  tls:\n    type: object\n", "a.yaml")
            .unwrap();
        let err = registry
            .add_source("types:\n  tls:\n    type: string\n", "b.yaml")
            .unwrap_err();

        match *err {
            Error::DuplicateType {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "tls");
                assert_eq!(first, PathBuf::from("a.yaml"));
                assert_eq!(second, PathBuf::from("b.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_types_error() {
        let err = "types:\n  broken:\n    description: no type\n"
            .parse::<TypeRegistry>()
            .unwrap_err();
        assert!(matches!(*err, Error::EmptyTypes { ref name } if name == "broken"));
    }

    #[test]
    fn test_parse_error() {
        let err = "types: [not, a, map]".parse::<TypeRegistry>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_types_key() {
        let registry: TypeRegistry = "types: {}\n".parse().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_type_files_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.yaml"), "types: {}").unwrap();
        fs::write(temp.path().join("a.yaml"), "types: {}").unwrap();
        fs::write(temp.path().join(".hidden.yaml"), "garbage").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let files = type_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn test_load_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("tls.yaml"),
            "types:\n  tls:\n    type: object\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("jetstream.yaml"),
            "types:\n  jetstream:\n    types: [boolean, object]\n",
        )
        .unwrap();

        let registry = TypeRegistry::load_dir(temp.path()).unwrap();
        assert!(registry.contains("tls"));
        assert!(registry.contains("jetstream"));
        // sorted: jetstream.yaml before tls.yaml
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["jetstream", "tls"]);
    }

    #[test]
    fn test_missing_dir() {
        let err = TypeRegistry::load_dir("/definitely/not/here").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
