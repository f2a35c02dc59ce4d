use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for confdoc schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the content and filename of a schema file so parse failures can
/// point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a YAML error.
    pub fn parse_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 0)));
        Box::new(Error::Parse {
            filename: self.filename.clone(),
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a settings error from a TOML error.
    pub fn settings_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Settings {
            filename: self.filename.clone(),
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(confdoc::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{filename}'")]
    #[diagnostic(code(confdoc::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse settings '{filename}'")]
    #[diagnostic(code(confdoc::settings))]
    Settings {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid setting")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate type found: '{name}' in '{}' (first defined in '{}')", .second.display(), .first.display())]
    #[diagnostic(
        code(confdoc::duplicate_type),
        help("type names are global across all type files; rename or remove one")
    )]
    DuplicateType {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("type '{name}' has no types")]
    #[diagnostic(
        code(confdoc::empty_types),
        help("set either `type: <name>` or `types: [<name>, ...]`")
    )]
    EmptyTypes { name: String },

    #[error("type '{name}' has both properties and sections")]
    #[diagnostic(
        code(confdoc::conflicting_shape),
        help("move the inline properties into one of the declared sections")
    )]
    ConflictingShape { name: String },

    #[error("unknown type '{name}' referenced by '{referenced_by}'")]
    #[diagnostic(
        code(confdoc::unknown_type),
        help("primitive types are: boolean, string, float, integer, duration, bytes, object")
    )]
    UnknownType { name: String, referenced_by: String },

    #[error("malformed properties in section '{section}': {reason}")]
    #[diagnostic(code(confdoc::malformed_section))]
    MalformedSection { section: String, reason: String },

    #[error("duplicate property '{property}' in section '{section}'")]
    #[diagnostic(
        code(confdoc::duplicate_property),
        help("sibling properties share one page directory; rename or remove one")
    )]
    DuplicateProperty { property: String, section: String },

    #[error("property '{property}' inherits from more than one object type: {types}")]
    #[diagnostic(
        code(confdoc::multiple_info_types),
        help("split the property or declare the nested properties on a single object type")
    )]
    MultipleInfoTypes { property: String, types: String },

    #[error("unsupported container nesting '{name}'")]
    #[diagnostic(
        code(confdoc::unsupported_shape),
        help("at most two levels of array(...) and map(...) are supported")
    )]
    UnsupportedShape { name: String },

    #[error("cyclic type reference: {chain}")]
    #[diagnostic(code(confdoc::cyclic_type))]
    CyclicType { chain: String },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a YAML error with source context
    pub fn parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        SourceContext::new(src, filename).parse_error(source)
    }

    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>, referenced_by: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownType {
            name: name.into(),
            referenced_by: referenced_by.into(),
        })
    }

    /// Create a malformed section error
    pub fn malformed_section(section: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedSection {
            section: section.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate property error
    pub fn duplicate_property(property: impl Into<String>, section: impl Into<String>) -> Box<Self> {
        Box::new(Error::DuplicateProperty {
            property: property.into(),
            section: section.into(),
        })
    }

    /// Create an unsupported shape error
    pub fn unsupported_shape(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedShape { name: name.into() })
    }
}
