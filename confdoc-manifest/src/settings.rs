//! Project settings from `confdoc.toml`.
//!
//! Every value is optional; the CLI layers its own flags on top and falls
//! back to built-in defaults for anything left unset.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "confdoc.toml";

/// Root of `confdoc.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub render: RenderSettings,
}

/// `[paths]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    /// Root config schema.
    pub config: Option<PathBuf>,
    /// Directory of type files.
    pub types: Option<PathBuf>,
    /// Output directory.
    pub output: Option<PathBuf>,
}

/// `[render]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    pub format: Option<String>,
    pub base: Option<String>,
    pub relative: Option<bool>,
    pub index_name: Option<String>,
    pub trim_index: Option<bool>,
    pub breadcrumbs: Option<bool>,
    pub tables: Option<bool>,
}

impl FromStr for Settings {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, SETTINGS_FILE)
    }
}

impl Settings {
    /// Parse settings from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.settings_error(e))
    }

    /// Load settings from an explicit path, or from `confdoc.toml` in `dir`
    /// when it exists.
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn discover(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let implicit = dir.as_ref().join(SETTINGS_FILE);
        if implicit.is_file() {
            Self::from_file(implicit)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full() {
        let settings: Settings = r#"
            [paths]
            config = "schema/config.yaml"
            types = "schema/types"
            output = "docs/ref"

            [render]
            format = "markdown"
            base = "/ref"
            relative = true
            index_name = "README.md"
            trim_index = false
            breadcrumbs = true
            tables = true
            "#
        .parse()
        .unwrap();

        assert_eq!(settings.paths.types, Some(PathBuf::from("schema/types")));
        assert_eq!(settings.render.base.as_deref(), Some("/ref"));
        assert_eq!(settings.render.breadcrumbs, Some(true));
        assert_eq!(settings.render.trim_index, Some(false));
    }

    #[test]
    fn test_parse_empty() {
        let settings: Settings = "".parse().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[render]\nbreadcrumb = true\n".parse::<Settings>().unwrap_err();
        assert!(matches!(*err, Error::Settings { .. }));
    }

    #[test]
    fn test_discover_optional() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::discover(None, temp.path()).unwrap();
        assert_eq!(settings, Settings::default());

        fs::write(temp.path().join(SETTINGS_FILE), "[render]\ntables = true\n").unwrap();
        let settings = Settings::discover(None, temp.path()).unwrap();
        assert_eq!(settings.render.tables, Some(true));
    }

    #[test]
    fn test_discover_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = Settings::discover(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
