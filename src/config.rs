//! Optional user configuration (`config.toml`)
//!
//! Lookup order: `--config <path>`, `$CUKAI_CONFIG`, then
//! `<config_home>/cukai/config.toml`. Only the last one may be absent.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::entity::EntityType;
use crate::error::TaxError;

pub const CONFIG_ENV_VAR: &str = "CUKAI_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Entity type used by `calculate` when `--entity` is omitted
    pub default_entity: Option<String>,
    /// Colorized output (overridden by `--no-color` and `NO_COLOR`)
    pub color: Option<bool>,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, TaxError> {
        let config: Config =
            toml::from_str(contents).map_err(|e| TaxError::Config(e.to_string()))?;
        // Reject unknown entity keys at load time rather than at first use
        config.default_entity()?;
        Ok(config)
    }

    /// Load configuration, honouring an explicit path and `$CUKAI_CONFIG`
    pub fn load(explicit: Option<&Path>) -> Result<Self, TaxError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match resolve_path(explicit, env_path) {
            ConfigSource::Required(path) => Self::read(&path),
            ConfigSource::Optional(path) if path.exists() => Self::read(&path),
            ConfigSource::Optional(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            ConfigSource::None => Ok(Self::default()),
        }
    }

    fn read(path: &Path) -> Result<Self, TaxError> {
        debug!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TaxError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            TaxError::Config(msg) => TaxError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn default_entity(&self) -> Result<Option<EntityType>, TaxError> {
        self.default_entity
            .as_deref()
            .map(str::parse::<EntityType>)
            .transpose()
    }

    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        !no_color_flag && std::env::var_os("NO_COLOR").is_none() && self.color.unwrap_or(true)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ConfigSource {
    Required(PathBuf),
    Optional(PathBuf),
    None,
}

fn resolve_path(explicit: Option<&Path>, env_path: Option<PathBuf>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Required(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return ConfigSource::Required(path);
    }
    match default_config_path() {
        Some(path) => ConfigSource::Optional(path),
        None => ConfigSource::None,
    }
}

/// `<config_home>/cukai/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join("cukai").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str("default_entity = \"sdn_bhd\"\ncolor = false\n").unwrap();
        assert_eq!(config.default_entity().unwrap(), Some(EntityType::SdnBhd));
        assert_eq!(config.color, Some(false));
        assert!(!config.color_enabled(false));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_entity().unwrap(), None);
    }

    #[test]
    fn test_no_color_flag_wins() {
        let config = Config {
            default_entity: None,
            color: Some(true),
        };
        assert!(!config.color_enabled(true));
    }

    #[test]
    fn test_unknown_entity_rejected() {
        let err = Config::from_toml_str("default_entity = \"llc\"").unwrap_err();
        assert_eq!(err, TaxError::InvalidEntityType("llc".to_string()));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            Config::from_toml_str("default_entity = "),
            Err(TaxError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("currency = \"USD\""),
            Err(TaxError::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_entity = \"Berhad\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.default_entity().unwrap(), Some(EntityType::Berhad));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(TaxError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_path_precedence() {
        let explicit = PathBuf::from("/tmp/a.toml");
        let env = PathBuf::from("/tmp/b.toml");

        assert_eq!(
            resolve_path(Some(&explicit), Some(env.clone())),
            ConfigSource::Required(explicit.clone())
        );
        assert_eq!(resolve_path(None, Some(env.clone())), ConfigSource::Required(env));
        assert!(!matches!(
            resolve_path(None, Some(PathBuf::new())),
            ConfigSource::Required(_)
        ));
    }
}
