//! Primitive type tags and container shapes.

use serde::Serialize;

/// The closed set of primitive type tags a type option can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    String,
    Float,
    Integer,
    Duration,
    Bytes,
    Object,
}

impl Primitive {
    /// Parse a primitive tag. `storage` is accepted as an older spelling of `bytes`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Primitive::Boolean),
            "string" => Some(Primitive::String),
            "float" => Some(Primitive::Float),
            "integer" => Some(Primitive::Integer),
            "duration" => Some(Primitive::Duration),
            "bytes" | "storage" => Some(Primitive::Bytes),
            "object" => Some(Primitive::Object),
            _ => None,
        }
    }

    /// Get the lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::String => "string",
            Primitive::Float => "float",
            Primitive::Integer => "integer",
            Primitive::Duration => "duration",
            Primitive::Bytes => "bytes",
            Primitive::Object => "object",
        }
    }

    /// Built-in description used when a declaration does not override it.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Primitive::Duration => {
                Some("Duration as a string with units such as 100ms, 10s, 5m, or 2h.")
            }
            Primitive::Bytes => {
                Some("Size in bytes or string with a metric unit such as 100K, 50M, 3G, or 1T.")
            }
            Primitive::Object => Some("An object with a set of explicit properties that can be set."),
            _ => None,
        }
    }

    /// Returns true for the `object` tag.
    pub fn is_object(&self) -> bool {
        matches!(self, Primitive::Object)
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single container wrapper as written in a type name, e.g. `array(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    Array,
    Map,
}

impl Wrapper {
    /// The keyword used in the wrapper syntax.
    pub fn keyword(&self) -> &'static str {
        match self {
            Wrapper::Array => "array",
            Wrapper::Map => "map",
        }
    }
}

/// How a primitive tag composes with container wrappers.
///
/// Shapes are at most two levels deep; anything deeper has no representation
/// and is rejected during resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Plain,
    Array,
    Map,
    ArrayOfMap,
    MapOfArray,
    MapOfMap,
    ArrayOfArray,
}

impl Shape {
    /// Get the kebab-case name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Plain => "plain",
            Shape::Array => "array",
            Shape::Map => "map",
            Shape::ArrayOfMap => "array-of-map",
            Shape::MapOfArray => "map-of-array",
            Shape::MapOfMap => "map-of-map",
            Shape::ArrayOfArray => "array-of-array",
        }
    }

    /// Returns true if the shape has no container wrapper.
    pub fn is_plain(&self) -> bool {
        matches!(self, Shape::Plain)
    }

    /// The wrappers of this shape, outermost first.
    pub fn wrappers(&self) -> &'static [Wrapper] {
        match self {
            Shape::Plain => &[],
            Shape::Array => &[Wrapper::Array],
            Shape::Map => &[Wrapper::Map],
            Shape::ArrayOfMap => &[Wrapper::Array, Wrapper::Map],
            Shape::MapOfArray => &[Wrapper::Map, Wrapper::Array],
            Shape::MapOfMap => &[Wrapper::Map, Wrapper::Map],
            Shape::ArrayOfArray => &[Wrapper::Array, Wrapper::Array],
        }
    }

    /// Build a shape from wrappers listed outermost first.
    ///
    /// Returns `None` if the wrappers nest deeper than two levels.
    pub fn from_wrappers(wrappers: &[Wrapper]) -> Option<Self> {
        wrappers
            .iter()
            .rev()
            .try_fold(Shape::Plain, |inner, w| Shape::single(*w).compose(inner))
    }

    /// Wrap `inner` with `self` as the outer container.
    ///
    /// Returns `None` when the result would need more than two levels.
    pub fn compose(self, inner: Shape) -> Option<Shape> {
        match (self, inner) {
            (Shape::Plain, shape) | (shape, Shape::Plain) => Some(shape),
            (Shape::Array, Shape::Map) => Some(Shape::ArrayOfMap),
            (Shape::Array, Shape::Array) => Some(Shape::ArrayOfArray),
            (Shape::Map, Shape::Array) => Some(Shape::MapOfArray),
            (Shape::Map, Shape::Map) => Some(Shape::MapOfMap),
            _ => None,
        }
    }

    /// Render a type name wrapped in this shape, e.g. `array(map(string))`.
    pub fn apply(&self, name: &str) -> String {
        self.wrappers()
            .iter()
            .rev()
            .fold(name.to_string(), |acc, w| format!("{}({})", w.keyword(), acc))
    }

    fn single(wrapper: Wrapper) -> Shape {
        match wrapper {
            Wrapper::Array => Shape::Array,
            Wrapper::Map => Shape::Map,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
