//! Configuration file support
//!
//! Page Forge reads an optional TOML file with a `[logging]` table and a
//! `[defaults]` table overriding the built-in page defaults. Every key is
//! optional.

use crate::defaults::PageDefaults;
use crate::resolver::PageConfigResolver;
use pageforge_core::{ForgeError, ForgeResult, Validatable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "pageforge.toml";

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub logging: LoggingConfig,
    pub defaults: PageDefaults,
}

impl ForgeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> ForgeResult<Self> {
        let config: ForgeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> ForgeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForgeError::FileNotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path).map_err(|e| ForgeError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Configuration file to read: `explicit` if given, else
    /// `pageforge.toml` in `dir` when it exists
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = dir.join(CONFIG_FILE_NAME);
        local.is_file().then_some(local)
    }

    /// Load a configuration file if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> ForgeResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolver over the configured defaults table
    pub fn resolver(&self) -> PageConfigResolver {
        PageConfigResolver::new(self.defaults.clone())
    }
}

impl Validatable for ForgeConfig {
    fn validate(&self) -> ForgeResult<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ForgeError::config(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_core::PageType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_builtins() {
        let config = ForgeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = ForgeConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"

            [defaults]
            show_all_fields = false

            [defaults.single_record]
            allow_update = true

            [defaults.list]
            enable_search = false
            navigate_to_page_id = "p1"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.defaults.single_record.allow_update);
        assert!(config.defaults.single_record.allow_creation);

        let input = config.resolver().resolve(None);
        assert!(!input.show_all_fields);
        assert!(input.settings.single_record().unwrap().allow_update);

        let list = config.defaults.variant(PageType::List);
        assert_eq!(list.list().unwrap().navigate_to_page_id, "p1");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let err = ForgeConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ForgeConfig::from_toml_str("[logging\nlevel = 1").unwrap_err();
        assert!(matches!(err, ForgeError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        assert_eq!(ForgeConfig::load(&path).unwrap().logging.level, "warn");
        assert_eq!(
            ForgeConfig::load_or_default(None).unwrap(),
            ForgeConfig::default()
        );
        assert!(
            ForgeConfig::load(dir.path().join("missing.toml"))
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let explicit = dir.path().join("other.toml");

        assert_eq!(
            ForgeConfig::locate(Some(&explicit), dir.path()),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_locate_falls_back_to_local_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(ForgeConfig::locate(None, dir.path()), None);

        let local = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&local, "[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(ForgeConfig::locate(None, dir.path()), Some(local));
    }
}
