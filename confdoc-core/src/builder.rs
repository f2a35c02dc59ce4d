//! Text builder for generating indented output.

/// Builds text line by line with indentation.
///
/// # Example
///
/// ```
/// use confdoc_core::TextBuilder;
///
/// let mut b = TextBuilder::new("  ");
/// b.push_comment("#", "Cluster settings.");
/// b.push_line("cluster {").push_indent();
/// b.push_line("port: 6222").push_dedent();
/// b.push_line("}");
///
/// assert_eq!(b.build(), "# Cluster settings.\ncluster {\n  port: 6222\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct TextBuilder {
    indent_level: usize,
    indent: &'static str,
    buffer: String,
}

impl TextBuilder {
    /// Create a builder using `indent` for each level.
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add every line of `text` as a comment with the given prefix.
    ///
    /// Empty lines keep the bare prefix so paragraphs stay inside the comment.
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line(prefix);
            } else {
                self.push_line(&format!("{prefix} {line}"));
            }
        }
        self
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent);
        }
    }
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new("  ")
    }
}
