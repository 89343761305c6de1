//! Report configuration.

use crate::Result;
use crate::escape::check_representable;
use serde::Deserialize;

/// Provenance tag written to every `<error source="...">` unless configured otherwise.
pub const DEFAULT_SOURCE: &str = "pylint";

/// Value of the `version` attribute on the `<checkstyle>` root.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Options controlling the fixed attributes of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Value of the `source` attribute on each `<error>` element.
    pub source: String,
    /// Value of the `version` attribute on the `<checkstyle>` root.
    pub version: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// A TOML file may nest the options under `[checkstyle]` or place them at the top level.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Nested { checkstyle: ReportConfig },
    Flat(ReportConfig),
}

impl ReportConfig {
    /// Replace the provenance tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = match file {
            ConfigFile::Nested { checkstyle } => checkstyle,
            ConfigFile::Flat(config) => config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both values can be written into an XML attribute.
    pub fn validate(&self) -> Result<()> {
        check_representable("source", &self.source)?;
        check_representable("version", &self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.source, "pylint");
        assert_eq!(config.version, "0.0.0");
    }

    #[test]
    fn nested_table() {
        let config = ReportConfig::from_toml_str("[checkstyle]\nsource = \"ruff\"\n").unwrap();
        assert_eq!(config.source, "ruff");
        assert_eq!(config.version, "0.0.0");
    }

    #[test]
    fn flat_keys() {
        let config = ReportConfig::from_toml_str("source = \"flake8\"\n").unwrap();
        assert_eq!(config.source, "flake8");
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(
            ReportConfig::from_toml_str("").unwrap(),
            ReportConfig::default()
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            ReportConfig::from_toml_str("colour = \"red\"\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn control_character_in_source_is_rejected() {
        assert!(matches!(
            ReportConfig::from_toml_str("source = \"py\\u0001lint\"\n"),
            Err(Error::UnrepresentableText {
                field: "source",
                character: '\u{1}'
            })
        ));
    }

    #[test]
    fn control_character_in_version_is_rejected() {
        let config = ReportConfig {
            version: "0.0\u{0}".to_string(),
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::UnrepresentableText {
                field: "version",
                ..
            })
        ));
    }

    #[test]
    fn with_source_overrides() {
        let config = ReportConfig::default().with_source("mylint");
        assert_eq!(config.source, "mylint");
    }
}
