//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (let the AWS SDK decide)
//! 2. Global config: `$XDG_CONFIG_HOME/ssmgr/ssmgr.toml`
//! 3. Environment variables: `SSMGR_*` prefix
//! 4. Command line flags (`--region`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for ssmgr.
///
/// Credentials are never configured here; they come from the AWS profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// AWS region override (default: the profile's region)
    pub region: Option<String>,
    /// Custom SSM endpoint, e.g. a local emulator
    pub endpoint_url: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Get the XDG config directory for ssmgr.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ssmgr").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ssmgr.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            region: overlay.region.clone().or_else(|| self.region.clone()),
            endpoint_url: overlay
                .endpoint_url
                .clone()
                .or_else(|| self.endpoint_url.clone()),
        }
    }

    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence from an explicit config file.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply SSMGR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("SSMGR").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("region") {
            settings.region = Some(val);
        }
        if let Ok(val) = config.get_string("endpoint_url") {
            settings.endpoint_url = Some(val);
        }

        Ok(settings)
    }

    /// Apply a region given on the command line.
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if region.is_some() {
            self.region = region;
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_settings_when_overlay_has_region_then_overlay_wins() {
        let base = Settings {
            region: Some("eu-west-1".to_string()),
            endpoint_url: Some("http://localhost:4566".to_string()),
        };
        let overlay = RawSettings {
            region: Some("us-east-1".to_string()),
            endpoint_url: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            merged.endpoint_url.as_deref(),
            Some("http://localhost:4566"),
            "unset overlay field keeps base"
        );
    }

    #[test]
    fn given_cli_region_when_applied_then_replaces_configured_region() {
        let settings = Settings {
            region: Some("eu-west-1".to_string()),
            endpoint_url: None,
        };

        let settings = settings.with_region(Some("ap-southeast-2".to_string()));

        assert_eq!(settings.region.as_deref(), Some("ap-southeast-2"));
    }

    #[test]
    fn given_no_cli_region_when_applied_then_keeps_configured_region() {
        let settings = Settings {
            region: Some("eu-west-1".to_string()),
            endpoint_url: None,
        };

        let settings = settings.with_region(None);

        assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn given_settings_when_rendering_toml_then_contains_set_fields() {
        let settings = Settings {
            region: Some("eu-central-1".to_string()),
            endpoint_url: None,
        };

        let rendered = settings.to_toml().unwrap();

        assert!(rendered.contains("region = \"eu-central-1\""));
        assert!(!rendered.contains("endpoint_url"));
    }
}
