use std::{fmt, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

/// Deepest heading level a table of contents can reach (`<h6>`).
pub const MAX_HEADING_DEPTH: u8 = 6;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parsing(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

/// Site configuration handed to the content renderer.
///
/// Nothing here is acted on by this crate; the values are validated and
/// passed through.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub target: Target,
    pub modules: Vec<String>,
    pub content: ContentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Target::Static,
            modules: vec!["content".into(), "tailwindcss".into()],
            content: ContentConfig::default(),
        }
    }
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("reading config from {}", path.display());

        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(data)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let toc = &self.content.markdown.toc;
        check_depth("content.markdown.toc.depth", toc.depth)?;
        check_depth("content.markdown.toc.search_depth", toc.search_depth)?;

        let highlight = &self.content.highlight;
        if highlight.theme.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "content.highlight.theme must not be empty".into(),
            ));
        }
        if highlight.preload.iter().any(|lang| lang.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "content.highlight.preload contains an empty language".into(),
            ));
        }
        if self.modules.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "modules contains an empty module name".into(),
            ));
        }

        Ok(())
    }
}

fn check_depth(key: &str, depth: u8) -> Result<(), ConfigError> {
    if (1..=MAX_HEADING_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must be between 1 and {}, got {}",
            key, MAX_HEADING_DEPTH, depth
        )))
    }
}

/// How the site is produced.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Pre-render every page to static files.
    #[default]
    Static,
    Server,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
    /// Derive routes straight from the content tree.
    pub document_driven: bool,
    pub markdown: MarkdownConfig,
    pub highlight: HighlightConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            document_driven: true,
            markdown: MarkdownConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MarkdownConfig {
    pub toc: TocConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TocConfig {
    /// Deepest heading level listed in the table of contents.
    pub depth: u8,
    /// Deepest heading level scanned when collecting entries.
    pub search_depth: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            search_depth: 3,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    /// Languages registered with the highlighter up front.
    pub preload: Vec<String>,
    pub anchor_links: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "dracula-soft".into(),
            preload: vec!["elixir".into()],
            anchor_links: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target, Target::Static);
        assert_eq!(config.modules, vec!["content", "tailwindcss"]);
        assert!(config.content.document_driven);
        assert_eq!(config.content.markdown.toc.depth, 3);
        assert_eq!(config.content.markdown.toc.search_depth, 3);
        assert_eq!(config.content.highlight.theme, "dracula-soft");
        assert_eq!(config.content.highlight.preload, vec!["elixir"]);
        assert!(!config.content.highlight.anchor_links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [content.highlight]
            theme = "github-dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.content.highlight.theme, "github-dark");
        assert_eq!(config.content.highlight.preload, vec!["elixir"]);
        assert_eq!(config.content.markdown.toc.depth, 3);
        assert_eq!(config.target, Target::Static);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml_str(
            r#"
            target = "server"
            modules = ["content"]

            [content]
            document_driven = false

            [content.markdown.toc]
            depth = 2
            search_depth = 4

            [content.highlight]
            theme = "nord"
            preload = ["rust", "elixir"]
            anchor_links = true
            "#,
        )
        .unwrap();

        assert_eq!(config.target, Target::Server);
        assert_eq!(config.modules, vec!["content"]);
        assert!(!config.content.document_driven);
        assert_eq!(config.content.markdown.toc.depth, 2);
        assert_eq!(config.content.markdown.toc.search_depth, 4);
        assert_eq!(config.content.highlight.preload, vec!["rust", "elixir"]);
        assert!(config.content.highlight.anchor_links);
    }

    #[test]
    fn test_toc_depth_out_of_range() {
        for depth in [0, 7] {
            let toml = format!("[content.markdown.toc]\ndepth = {}", depth);
            let err = Config::from_toml_str(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "depth {}", depth);
        }

        let err = Config::from_toml_str("[content.markdown.toc]\nsearch_depth = 9").unwrap_err();
        assert!(err.to_string().contains("search_depth"));
    }

    #[test]
    fn test_blank_values_rejected() {
        let err = Config::from_toml_str("[content.highlight]\ntheme = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[content.highlight]\npreload = [\"\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("modules = [\"content\", \"\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_errors() {
        let err = Config::from_toml_str("target = \"spa\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)));

        let err = Config::from_toml_str("[content.markdown.toc]\ndepth = \"deep\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[content.markdown.toc]\ndepth = 4").unwrap();

        let config = Config::read(file.path()).unwrap();
        assert_eq!(config.content.markdown.toc.depth, 4);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::read(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_serialize_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("target = \"static\""));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
