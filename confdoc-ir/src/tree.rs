//! Config, section, and property tree.

use serde::Serialize;
use serde_yaml::Value;

use crate::{Primitive, Shape};

/// Root of the resolved documentation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Name used as the title of the root page.
    pub name: String,
    /// Top-level description.
    pub description: String,
    /// Top-level sections, in declaration order.
    pub sections: Vec<Section>,
}

impl Config {
    /// The root config as a synthetic top-level property.
    ///
    /// Renderers walk the tree starting from this property so the root page
    /// and nested pages share one code path.
    pub fn to_property(&self) -> Property {
        Property {
            name: self.name.clone(),
            description: self.description.clone(),
            sections: self.sections.clone(),
            ..Property::default()
        }
    }

    /// Total number of properties at every depth.
    pub fn property_count(&self) -> usize {
        self.sections.iter().map(Section::property_count).sum()
    }
}

/// An optionally named, ordered group of properties.
///
/// Unnamed sections render without a heading. A section without properties
/// acts as a heading between groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<Property>,
}

impl Section {
    /// Returns true if the section only carries a heading.
    pub fn is_header(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of properties in this section, including nested ones.
    pub fn property_count(&self) -> usize {
        self.properties
            .iter()
            .map(|p| {
                1 + p
                    .child_sections()
                    .iter()
                    .map(Section::property_count)
                    .sum::<usize>()
            })
            .sum()
    }
}

/// A configuration property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property name, unique within its section.
    pub name: String,
    /// The value shapes this property accepts, in declaration order.
    pub types: Vec<TypeOption>,
    pub url: Option<String>,
    pub description: String,
    /// Deprecation notice, naming the replacement when there is one.
    pub deprecation: Option<String>,
    pub default: Option<Value>,
    /// Whether a generated config file should comment this property out.
    pub disabled: bool,
    pub examples: Vec<Example>,
    pub aliases: Vec<String>,
    /// Whether a running server can apply a changed value without restart.
    pub reloadable: bool,
    pub reloadable_note: Option<String>,
    /// Server version that introduced this property.
    pub version: Option<String>,
    /// Declared sections that were not absorbed by an object type option.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            name: String::new(),
            types: Vec::new(),
            url: None,
            description: String::new(),
            deprecation: None,
            default: None,
            disabled: false,
            examples: Vec::new(),
            aliases: Vec::new(),
            reloadable: true,
            reloadable_note: None,
            version: None,
            sections: Vec::new(),
        }
    }
}

impl Property {
    /// The sections rendered as children of this property.
    ///
    /// This is the first object option carrying sections, falling back to the
    /// property's own sections.
    pub fn child_sections(&self) -> &[Section] {
        self.types
            .iter()
            .find(|t| t.primitive.is_object() && !t.sections.is_empty())
            .map(|t| t.sections.as_slice())
            .unwrap_or(&self.sections)
    }

    /// Child properties across all child sections, in order.
    pub fn children(&self) -> impl Iterator<Item = &Property> {
        self.child_sections()
            .iter()
            .flat_map(|s| s.properties.iter())
    }

    /// Returns true if the property has nested properties.
    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Returns true if the property accepts more than one value shape.
    pub fn is_polymorphic(&self) -> bool {
        self.types.len() > 1
    }
}

/// One concrete shape a property's value may take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeOption {
    #[serde(rename = "type")]
    pub primitive: Primitive,
    pub shape: Shape,
    /// Allowed values when the option is an enum.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    pub description: String,
    /// Nested sections; only populated for `object` options.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl TypeOption {
    /// Create a plain option for a primitive tag with its built-in description.
    pub fn primitive(primitive: Primitive, shape: Shape) -> Self {
        Self {
            primitive,
            shape,
            choices: Vec::new(),
            description: primitive.description().unwrap_or_default().to_string(),
            sections: Vec::new(),
        }
    }

    /// The type name with container wrappers, e.g. `array(map(string))`.
    pub fn type_name(&self) -> String {
        self.shape.apply(self.primitive.as_str())
    }
}

impl std::fmt::Display for TypeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.type_name())
    }
}

/// A documented example value for a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Example {
    /// Short label.
    pub label: String,
    /// Longer description of the example.
    pub description: String,
    /// Literal value, rendered verbatim as code.
    pub value: String,
}
