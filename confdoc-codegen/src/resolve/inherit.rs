//! Metadata inheritance from a referenced object type.

use std::borrow::Cow;

use confdoc_ir::Primitive;
use confdoc_manifest::{Error, RawTypeDecl, Result};
use tracing::trace;

use super::{Resolver, TypeRef};

impl Resolver<'_> {
    /// Names of the object types a declaration inherits metadata from.
    ///
    /// Only unwrapped references count: `tls` makes `tls` an info type,
    /// `array(tls)` does not.
    pub fn info_types<'d>(&mut self, decl: &'d RawTypeDecl) -> Result<Vec<&'d str>> {
        let mut found = Vec::new();
        for type_name in &decl.types {
            let type_ref = TypeRef::parse(type_name);
            if !type_ref.is_bare() || Primitive::parse(type_ref.inner).is_some() {
                continue;
            }
            if self.is_object_type(type_ref.inner, &decl.name)? {
                found.push(type_ref.inner);
            }
        }
        Ok(found)
    }

    /// Fill the metadata a declaration leaves unset from its info type.
    ///
    /// The declaration's own values always win. Inheritance is transitive:
    /// the info type first inherits from its own info type. Aliases and the
    /// disabled flag are never inherited.
    pub fn inherit_metadata<'d>(&mut self, decl: &'d RawTypeDecl) -> Result<Cow<'d, RawTypeDecl>> {
        let info = self.info_types(decl)?;
        let base_name = match info.as_slice() {
            [] => return Ok(Cow::Borrowed(decl)),
            [name] => *name,
            _ => {
                return Err(Box::new(Error::MultipleInfoTypes {
                    property: decl.name.clone(),
                    types: info.join(", "),
                }));
            }
        };

        let registry = self.registry;
        let Some(base) = registry.get(base_name) else {
            return Err(Error::unknown_type(base_name, &decl.name));
        };
        let base = self.inherit_metadata(base)?;
        trace!(property = %decl.name, info_type = base_name, "inheriting metadata");

        let mut merged = decl.clone();
        if merged.description.trim().is_empty() {
            merged.description = base.description.clone();
        }
        if merged.url.is_none() {
            merged.url = base.url.clone();
        }
        if merged.default.is_none() {
            merged.default = base.default.clone();
        }
        if merged.deprecation.is_none() {
            merged.deprecation = base.deprecation.clone();
        }
        if merged.examples.is_empty() {
            merged.examples = base.examples.clone();
        }
        if merged.reloadable.is_none() {
            merged.reloadable = base.reloadable;
        }
        if merged.reloadable_note.is_none() {
            merged.reloadable_note = base.reloadable_note.clone();
        }
        if merged.version.is_none() {
            merged.version = base.version.clone();
        }
        Ok(Cow::Owned(merged))
    }
}

#[cfg(test)]
mod tests {
    use confdoc_manifest::TypeRegistry;

    use super::*;

    const TYPES: &str = r#"
        types:
          tls:
            type: object
            description: TLS settings
            url: https://docs.example.com/tls
            reloadable: false
            reloadable_note: Requires a restart.
            version: "2.2"
            aliases: [ssl]
            disabled: true
            examples:
              - label: Minimal
                value: "tls { cert_file: server.pem }"
            properties:
              cert_file:
                type: string
          cluster-tls:
            type: tls
            description: Cluster TLS settings
          size:
            type: bytes
            description: A size
            default: 1MB
          auth:
            type: object
            description: Authorization
    "#;

    fn decl(yaml: &str, name: &str) -> RawTypeDecl {
        let mut d: RawTypeDecl = serde_yaml::from_str(yaml).expect("Failed to parse decl");
        d.normalize(name).unwrap();
        d
    }

    #[test]
    fn test_info_types() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl("types: [boolean, tls, array(tls), size]", "prop");
        assert_eq!(resolver.info_types(&d).unwrap(), vec!["tls"]);
    }

    #[test]
    fn test_unset_fields_inherited() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl("type: tls", "tls");
        let merged = resolver.inherit_metadata(&d).unwrap();
        assert_eq!(merged.description, "TLS settings");
        assert_eq!(merged.url.as_deref(), Some("https://docs.example.com/tls"));
        assert_eq!(merged.reloadable, Some(false));
        assert_eq!(merged.reloadable_note.as_deref(), Some("Requires a restart."));
        assert_eq!(merged.version.as_deref(), Some("2.2"));
        assert_eq!(merged.examples.len(), 1);
        assert!(merged.aliases.is_empty());
        assert!(!merged.disabled);
    }

    #[test]
    fn test_own_fields_win() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl(
            "type: tls\ndescription: Websocket TLS\nreloadable: true",
            "tls",
        );
        let merged = resolver.inherit_metadata(&d).unwrap();
        assert_eq!(merged.description, "Websocket TLS");
        assert_eq!(merged.reloadable, Some(true));
        assert_eq!(merged.version.as_deref(), Some("2.2"));
    }

    #[test]
    fn test_transitive_inheritance() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl("type: cluster-tls", "tls");
        let merged = resolver.inherit_metadata(&d).unwrap();
        assert_eq!(merged.description, "Cluster TLS settings");
        assert_eq!(merged.reloadable, Some(false));
    }

    #[test]
    fn test_non_object_reference_not_inherited() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl("type: size", "max_payload");
        let merged = resolver.inherit_metadata(&d).unwrap();
        assert!(matches!(merged, Cow::Borrowed(_)));
        assert!(merged.default.is_none());
    }

    #[test]
    fn test_multiple_info_types() {
        let reg: TypeRegistry = TYPES.parse().unwrap();
        let mut resolver = Resolver::new(&reg);

        let d = decl("types: [tls, auth]", "security");
        let err = resolver.inherit_metadata(&d).unwrap_err();
        match *err {
            Error::MultipleInfoTypes { property, types } => {
                assert_eq!(property, "security");
                assert_eq!(types, "tls, auth");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
