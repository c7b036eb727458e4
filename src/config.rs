use crate::classifier::Evidence;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub organizer: OrganizerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// "name" or "content"
    #[serde(default = "default_evidence")]
    pub evidence: String,
    /// Tokenize training files on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizerConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
    #[serde(default)]
    pub dry_run_default: bool,
    /// Ignore dot-directories when learning the folder structure
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
    /// Deepest folder level (below the training root) used as a label
    #[serde(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_evidence() -> String {
    "content".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            evidence: default_evidence(),
            parallel: true,
        }
    }
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            skip_confirmation: false,
            dry_run_default: false,
            skip_hidden: true,
            max_depth: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClassifierConfig {
    /// Parsed evidence mode
    pub fn evidence(&self) -> Result<Evidence> {
        self.evidence
            .parse::<Evidence>()
            .map_err(anyhow::Error::msg)
            .context("Invalid [classifier] evidence setting")
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from(shellexpand::tilde("~/.config/filebayes/settings.toml").into_owned()),
        ];

        for path in &default_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Load from an explicit path when given, otherwise from the default locations
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                Self::from_file(expanded)
            }
            None => Self::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.classifier.evidence().unwrap(), Evidence::NameAndContent);
        assert!(config.classifier.parallel);
        assert!(config.organizer.skip_hidden);
        assert!(!config.organizer.skip_confirmation);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[classifier]
evidence = "name"
parallel = false

[organizer]
skip_confirmation = true
max_depth = 2
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.classifier.evidence().unwrap(), Evidence::NameOnly);
        assert!(!config.classifier.parallel);
        assert!(config.organizer.skip_confirmation);
        assert!(config.organizer.skip_hidden);
        assert_eq!(config.organizer.max_depth, Some(2));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_invalid_evidence() {
        let config: Config = toml::from_str("[classifier]\nevidence = \"pixels\"\n").unwrap();
        assert!(config.classifier.evidence().is_err());
    }

    #[test]
    fn test_config_load_from_missing_path() {
        assert!(Config::load_from(Some(Path::new("/nonexistent/settings.toml"))).is_err());
    }
}
