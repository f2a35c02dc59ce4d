//! Root config schema loading.

use std::{path::Path, str::FromStr};

use tracing::debug;

use crate::{Error, RawConfig, Result, SourceContext};

impl FromStr for RawConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "config.yaml")
    }
}

impl RawConfig {
    /// Parse the root config schema from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse the root config schema from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = serde_yaml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        debug!(
            file = filename,
            name = %config.name,
            sections = config.sections.len(),
            "loaded root config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_config() {
        let config: RawConfig = r#"
            name: nats
            description: NATS server configuration
            sections:
              - name: Connectivity
                properties:
                  host:
                    type: string
                  port:
                    type: integer
              - name: Limits
              - properties:
                  max_payload:
                    type: bytes
            "#
        .parse()
        .unwrap();

        assert_eq!(config.name, "nats");
        assert_eq!(config.sections.len(), 3);
        assert_eq!(config.sections[0].name.as_deref(), Some("Connectivity"));
        assert!(config.sections[1].is_header());
        assert!(config.sections[2].name.is_none());
        assert_eq!(config.sections[2].label(), "<unnamed>");
    }

    #[test]
    fn test_missing_name() {
        let err = "description: nameless".parse::<RawConfig>().unwrap_err();
        match *err {
            Error::Parse { filename, .. } => assert_eq!(filename, "config.yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = RawConfig::from_file("/no/such/config.yaml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
