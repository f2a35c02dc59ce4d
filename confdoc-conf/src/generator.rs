use confdoc_core::{DocFormat, File, TextBuilder};
use confdoc_ir::{Config, Property, Section};
use eyre::Result;
use tracing::debug;

use crate::format_value;

/// Sample configuration file generator.
pub struct Generator<'a> {
    config: &'a Config,
}

impl DocFormat for Generator<'_> {
    fn name(&self) -> &'static str {
        "conf"
    }

    fn render(&self) -> Result<Vec<File>> {
        let content = self.render_text();
        debug!(properties = self.config.property_count(), "rendered sample config");
        Ok(vec![File::new(self.file_name(), content)])
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Output file name, derived from the config name.
    pub fn file_name(&self) -> String {
        let name = self.config.name.trim();
        if name.is_empty() {
            "config.conf".to_string()
        } else {
            format!("{name}.conf")
        }
    }

    /// Render the whole file.
    pub fn render_text(&self) -> String {
        let mut b = TextBuilder::new("  ");
        b.push_comment("#", &self.config.name);
        if !self.config.description.is_empty() {
            b.push_line("#");
            b.push_comment("#", &self.config.description);
        }
        write_sections(&mut b, &self.config.sections, false);
        b.build()
    }
}

fn write_sections(b: &mut TextBuilder, sections: &[Section], commented: bool) {
    for section in sections {
        if let Some(name) = &section.name {
            separate(b);
            b.push_line(&format!("# ---- {name} ----"));
            if let Some(description) = &section.description {
                b.push_comment("#", description);
            }
        }
        for property in &section.properties {
            write_property(b, property, commented);
        }
    }
}

fn write_property(b: &mut TextBuilder, prop: &Property, commented: bool) {
    let commented = commented || prop.disabled;
    let prefix = if commented { "# " } else { "" };

    separate(b);
    if !prop.description.is_empty() {
        b.push_comment("#", &prop.description);
    }
    if let Some(deprecation) = &prop.deprecation {
        b.push_comment("#", &format!("Deprecated: {deprecation}"));
    }
    match (&prop.reloadable_note, prop.reloadable) {
        (Some(note), false) => b.push_comment("#", &format!("Not reloadable. {note}")),
        (None, false) => b.push_comment("#", "Not reloadable."),
        (Some(note), true) => b.push_comment("#", note),
        (None, true) => b,
    };

    if let Some(value) = &prop.default {
        b.push_line(&format!("{prefix}{}: {}", prop.name, format_value(value)));
    } else if prop.has_children() {
        b.push_line(&format!("{prefix}{} {{", prop.name));
        b.push_indent();
        write_sections(b, prop.child_sections(), commented);
        b.push_dedent();
        b.push_line(&format!("{prefix}}}"));
    } else {
        let types: Vec<_> = prop.types.iter().map(|t| t.type_name()).collect();
        b.push_line(&format!("# {}: <{}>", prop.name, types.join(" | ")));
    }
}

/// Blank line between entries, but not directly after an opening brace.
fn separate(b: &mut TextBuilder) {
    if !b.is_empty() && !b.as_str().ends_with("{\n") {
        b.push_blank();
    }
}

#[cfg(test)]
mod tests {
    use confdoc_codegen::testing::server_config;

    use super::*;

    #[test]
    fn test_file_name() {
        let config = server_config();
        let files = Generator::new(&config).render().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path().to_str(), Some("server.conf"));
    }

    #[test]
    fn test_sample_config() {
        let config = server_config();
        insta::assert_snapshot!(Generator::new(&config).render_text(), @r#"
# server
#
# Server configuration reference.

# ---- Connectivity ----
# Client connections.

# Host for client connections.
host: "0.0.0.0"

# Port for client connections.
# Not reloadable. Changing the port requires a restart.
port: 4222

# TLS settings.
tls {
  # Certificate file.
  # cert_file: <string>

  # Allowed cipher suites.
  # ciphers: <array(string)>
}

# ---- Limits ----

# Maximum message payload.
max_payload: "1MB"

# Interval between pings.
# Deprecated: Use `keepalive` instead.
# ping_interval: <duration>

# Log verbosity.
# log_level: <string>

# Enable JetStream or configure it.
jetstream {
  # Storage directory.
  # store_dir: <string>

  # Placement tags.
  # tags: <map(string)>
}
"#);
    }

    #[test]
    fn test_disabled_block_commented_out() {
        let config = confdoc_codegen::load_str(
            r#"
            name: server
            sections:
              - properties:
                  cluster:
                    type: object
                    disabled: true
                    properties:
                      port:
                        type: integer
                        default: 6222
            "#,
            &[],
        )
        .unwrap();
        let text = Generator::new(&config).render_text();
        assert!(text.contains("# cluster {\n  # port: 6222\n# }\n"), "{text}");
    }
}
