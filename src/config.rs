//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/abstree/abstree.toml`
//! 3. Local config: `<dir>/.abstree.toml`
//! 4. Environment variables: `ABSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{TreeError, TreeResult};

/// Settings for directory trees and their display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Deepest level listed below the root (unlimited when absent)
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with a dot
    pub show_hidden: bool,
    /// Print paths relative to the tree root
    pub relative_paths: bool,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_depth: Option<usize>,
    pub show_hidden: Option<bool>,
    pub relative_paths: Option<bool>,
}

/// Get the XDG config directory for abstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "abstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("abstree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".abstree.toml")
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| TreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| TreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.or(self.max_depth),
            show_hidden: overlay.show_hidden.unwrap_or(self.show_hidden),
            relative_paths: overlay.relative_paths.unwrap_or(self.relative_paths),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.abstree.toml`
    pub fn load(local_dir: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Load settings from one explicit file on top of the defaults (no env vars).
    pub fn load_file(path: &Path) -> TreeResult<Self> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply ABSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("ABSTREE").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get::<usize>("max_depth") {
            settings.max_depth = Some(val);
        }
        if let Ok(val) = config.get_bool("show_hidden") {
            settings.show_hidden = val;
        }
        if let Ok(val) = config.get_bool("relative_paths") {
            settings.relative_paths = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# abstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/abstree/abstree.toml
#   Local:  <dir>/.abstree.toml
#   Env:    ABSTREE_* environment variables

# Deepest level listed below the root (unlimited when absent)
# max_depth = 3

# Include entries whose name starts with a dot
# show_hidden = false

# Print paths relative to the tree root
# relative_paths = false
"#
        .to_string()
    }
}
