//! JSON output format: the resolved tree as a single document.

use confdoc_core::{DocFormat, File};
use confdoc_ir::Config;
use eyre::Result;

/// Writes the resolved config tree to `<name>.json`.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<'a> {
    config: &'a Config,
}

impl<'a> JsonFormat<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Output file name, derived from the config name.
    pub fn file_name(&self) -> String {
        let name = self.config.name.trim();
        if name.is_empty() {
            "config.json".to_string()
        } else {
            format!("{name}.json")
        }
    }
}

impl DocFormat for JsonFormat<'_> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self) -> Result<Vec<File>> {
        let mut content = serde_json::to_string_pretty(self.config)?;
        content.push('\n');
        Ok(vec![File::new(self.file_name(), content)])
    }
}

#[cfg(test)]
mod tests {
    use crate::load_str;

    use super::*;

    #[test]
    fn test_render_json() {
        let config = load_str(
            r#"
            name: nats
            sections:
              - name: Connectivity
                properties:
                  port:
                    type: integer
                    default: 4222
                  tls:
                    type: object
                    properties:
                      cert_file:
                        type: string
            "#,
            &[],
        )
        .unwrap();

        let files = JsonFormat::new(&config).render().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path().to_str(), Some("nats.json"));

        let json: serde_json::Value = serde_json::from_str(files[0].content()).unwrap();
        assert_eq!(json["name"], "nats");
        let section = &json["sections"][0];
        assert_eq!(section["name"], "Connectivity");
        assert_eq!(section["properties"][0]["default"], 4222);
        assert_eq!(section["properties"][0]["types"][0]["type"], "integer");
        let tls = &section["properties"][1];
        assert_eq!(tls["types"][0]["type"], "object");
        assert_eq!(tls["types"][0]["sections"][0]["properties"][0]["name"], "cert_file");
    }

    #[test]
    fn test_unnamed_config() {
        let config = load_str("name: \"\"", &[]).unwrap();
        assert_eq!(JsonFormat::new(&config).file_name(), "config.json");
    }
}
