//! Raw declarations as they appear in the YAML sources, before resolution.

use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};
use serde_yaml::Value;

use crate::{Error, Result};

/// A type or property declaration.
///
/// Type files declare these under `types:`; sections declare them as the
/// values of their `properties` mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTypeDecl {
    /// Registry key or property name. A `name:` key in the source is
    /// accepted and replaced by the loader.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Single type name. Normalized into `types`.
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Type names this declaration accepts, in order.
    #[serde(default)]
    pub types: Vec<String>,

    pub url: Option<String>,

    pub default: Option<Value>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    pub deprecation: Option<String>,

    #[serde(default)]
    pub examples: Vec<RawExample>,

    #[serde(default)]
    pub aliases: Vec<String>,

    /// Unset means "inherit, else reloadable".
    pub reloadable: Option<bool>,

    pub reloadable_note: Option<String>,

    #[serde(default)]
    pub sections: Vec<RawSection>,

    /// Inline property mapping. Normalized into a single unnamed section.
    #[serde(default)]
    pub properties: RawProperties,

    /// Kept as written, so `2.10` stays `2.10`.
    pub version: Option<String>,

    #[serde(default)]
    pub choices: Vec<String>,
}

impl RawTypeDecl {
    /// Normalize the declaration in place.
    ///
    /// - a singular `type` becomes a one-element `types` list
    /// - a declaration must end up with at least one type
    /// - inline `properties` become a synthetic unnamed section
    pub fn normalize(&mut self, name: &str) -> Result<()> {
        self.name = name.to_string();

        if let Some(ty) = self.type_name.take() {
            self.types = vec![ty];
        }
        if self.types.is_empty() {
            return Err(Box::new(Error::EmptyTypes {
                name: name.to_string(),
            }));
        }

        if !self.properties.is_empty() {
            if !self.sections.is_empty() {
                return Err(Box::new(Error::ConflictingShape {
                    name: name.to_string(),
                }));
            }
            self.sections = vec![RawSection {
                properties: std::mem::take(&mut self.properties),
                ..RawSection::default()
            }];
        }
        self.properties = RawProperties::Missing;

        Ok(())
    }
}

/// A section as declared in the root config or a type declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub properties: RawProperties,
}

impl RawSection {
    /// Returns true if the section is only a heading.
    pub fn is_header(&self) -> bool {
        self.properties.is_empty()
    }

    /// Label used in error messages.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// The property block of a section.
///
/// Declarations are decoded straight from the source so scalar fields keep
/// their literal text. A block that is not a mapping is kept as
/// [`RawProperties::Malformed`] and rejected when the section is built.
#[derive(Debug, Clone, Default)]
pub enum RawProperties {
    /// No block, or an explicit null.
    #[default]
    Missing,
    /// Property name and declaration, in source order.
    Entries(Vec<(String, RawTypeDecl)>),
    /// Something other than a mapping; holds what was found.
    Malformed(&'static str),
}

impl RawProperties {
    /// True for a missing block or an empty mapping.
    pub fn is_empty(&self) -> bool {
        match self {
            RawProperties::Missing => true,
            RawProperties::Entries(entries) => entries.is_empty(),
            RawProperties::Malformed(_) => false,
        }
    }
}

impl<'de> Deserialize<'de> for RawProperties {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = RawProperties;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of property name to declaration")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Missing)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Missing)
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Malformed("a boolean"))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Malformed("a number"))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Malformed("a number"))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Malformed("a number"))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
                Ok(RawProperties::Malformed("a string"))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(RawProperties::Malformed("a sequence"))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, decl)) = map.next_entry::<String, RawTypeDecl>()? {
                    entries.push((name, decl));
                }
                Ok(RawProperties::Entries(entries))
            }
        }

        deserializer.deserialize_any(PropertiesVisitor)
    }
}

/// An example value attached to a declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawExample {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Kept as written; rendered verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

/// The root config schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

/// A type file: `types: { <name>: <declaration> }`.
///
/// Entries are kept as a list so duplicate keys within one file reach the
/// registry's duplicate check instead of silently overwriting each other.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTypesFile {
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub types: Vec<(String, RawTypeDecl)>,
}

fn deserialize_entries<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, RawTypeDecl)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, RawTypeDecl)>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of type name to type declaration")
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries = Vec::new();
            while let Some((name, decl)) = map.next_entry::<String, RawTypeDecl>()? {
                entries.push((name, decl));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// An explicit null reads as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
