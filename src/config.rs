use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for modthree
///
/// Only diagnostics are configurable. The automaton itself is fixed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModThreeConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Problems met while loading that did not stop it, reported once logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (overridden by RUST_LOG)
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: crate::telemetry::DEFAULT_LEVEL.to_string(),
            json: false,
        }
    }
}

impl ModThreeConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (modthree.toml in the working directory)
    /// 3. Environment variables (prefixed with MODTHREE_, `__` between sections)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("modthree.toml"))
    }

    /// Same as [`ModThreeConfig::load`] with an explicit file location
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MODTHREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let modthree_config: ModThreeConfig = config.try_deserialize()?;

        Ok(modthree_config)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ModThreeConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| -> Result<ModThreeConfig> {
        // Load .env file first
        let env_file = ModThreeConfig::load_env_file();
        let mut config = ModThreeConfig::load()?;
        if let Err(e) = env_file {
            config.warnings.push(format!("Ignoring .env file: {e}"));
        }
        Ok(config)
    });

/// Get the global configuration
pub fn config() -> Result<&'static ModThreeConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<&'static ModThreeConfig> {
    config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ModThreeConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModThreeConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modthree.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[logging]\njson = true").unwrap();

        let config = ModThreeConfig::load_from(&path).unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
    }
}
