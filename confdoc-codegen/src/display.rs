//! Config tree display formatting.
//!
//! # Example
//!
//! ```ignore
//! use confdoc_codegen::{DisplayStyle, TreeDisplay};
//!
//! let display = TreeDisplay::new(&config)
//!     .style(DisplayStyle::WithTypes)
//!     .indent("  ");
//!
//! println!("{}", display);
//! ```

use std::fmt;

use confdoc_ir::{Config, Property, Section};

/// Display style for config trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Indented property names.
    ///
    /// ```text
    /// port
    /// jetstream
    ///   store_dir
    /// ```
    #[default]
    Simple,

    /// Names with their accepted types and named section headings.
    ///
    /// ```text
    /// port: integer
    /// jetstream: boolean | object
    ///   store_dir: string
    /// [Logging]
    /// debug: boolean
    /// ```
    WithTypes,
}

/// Declarative config tree display formatter.
#[derive(Debug, Clone)]
pub struct TreeDisplay<'a> {
    config: &'a Config,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    /// Set the display style.
    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the tree to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_sections(&mut output, &self.config.sections, 0);
        output
    }

    fn render_sections(&self, output: &mut String, sections: &[Section], depth: usize) {
        for section in sections {
            if let (DisplayStyle::WithTypes, Some(name)) = (self.style, &section.name) {
                output.push_str(&self.indent_str.repeat(depth));
                output.push_str(&format!("[{name}]\n"));
            }
            for property in &section.properties {
                self.render_property(output, property, depth);
            }
        }
    }

    fn render_property(&self, output: &mut String, property: &Property, depth: usize) {
        output.push_str(&self.indent_str.repeat(depth));
        output.push_str(&property.name);

        if self.style == DisplayStyle::WithTypes && !property.types.is_empty() {
            let types: Vec<_> = property.types.iter().map(|t| t.type_name()).collect();
            output.push_str(": ");
            output.push_str(&types.join(" | "));
            if property.deprecation.is_some() {
                output.push_str(" (deprecated)");
            }
        }
        output.push('\n');

        self.render_sections(output, property.child_sections(), depth + 1);
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
