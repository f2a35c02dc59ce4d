//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output; implementations decide *how*.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an added item (e.g., a written file).
    fn added_item(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects output into a string, one line per call.
#[cfg(test)]
#[derive(Default)]
pub struct StringOutput(pub String);

#[cfg(test)]
impl Output for StringOutput {
    fn section(&mut self, name: &str) {
        self.0.push_str(&format!("{name}:\n"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.0.push_str(&format!("{key}: {value}\n"));
    }

    fn added_item(&mut self, text: &str) {
        self.0.push_str(&format!("  + {text}\n"));
    }

    fn divider(&mut self, label: &str) {
        self.0.push_str(&format!("── {label} ──\n"));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }

    fn newline(&mut self) {
        self.0.push('\n');
    }
}
