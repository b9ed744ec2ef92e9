//! Lint configuration files
//!
//! A configuration file holds the lint settings and a list of custom data
//! files that extend the built-in knowledge base:
//!
//! ```yaml
//! lint:
//!   emptyRules: error
//!   validProperties: [composes]
//! customData:
//!   - ./tailwind.css-data.json
//! ```
//!
//! The file is looked up in the working directory and its ancestors
//! (`.csslintrc.json`, `.csslintrc.yaml`, `.csslintrc.yml`), then in the user
//! configuration directory (`css_lint/config.json` or `css_lint/config.yaml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::css::css_data::{CssDataManager, CustomData};
use crate::css::lint_rules::LintSettings;
use crate::error::{IoContext, LintError, LintResult};

/// Project configuration file names, in lookup order
pub const CONFIG_FILE_NAMES: [&str; 3] = [".csslintrc.json", ".csslintrc.yaml", ".csslintrc.yml"];

/// Directory under the user configuration directory
const USER_CONFIG_DIR: &str = "css_lint";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    #[serde(default)]
    pub lint: LintSettings,
    /// Custom data files, relative to the configuration file
    #[serde(default)]
    pub custom_data: Vec<PathBuf>,
    /// Directory of the file this was loaded from
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl LintConfig {
    /// Read a configuration file, choosing the format by extension
    pub fn load(path: &Path) -> LintResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read config {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let mut config: LintConfig = match extension.as_deref() {
            Some("json") => serde_json::from_str(&text).map_err(|source| LintError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(|source| LintError::Yaml {
                path: path.to_path_buf(),
                source,
            })?,
            _ => {
                return Err(LintError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        config.base_dir = path.parent().map(Path::to_path_buf);
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit file if given, else the first one discovered from
    /// `start_dir`, else defaults
    pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> LintResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match find_config_file(start_dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Custom data paths resolved against the configuration file's directory
    pub fn custom_data_paths(&self) -> Vec<PathBuf> {
        self.custom_data
            .iter()
            .map(|path| match &self.base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            })
            .collect()
    }

    /// Built-in knowledge base extended with this configuration's custom data
    pub fn build_data_manager(&self) -> LintResult<CssDataManager> {
        let mut data = CssDataManager::new();
        for path in self.custom_data_paths() {
            data.add_custom_data(CustomData::load(&path)?);
        }
        Ok(data)
    }
}

/// Closest project configuration file at or above `start_dir`
pub fn find_config_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// User-wide configuration file, if one exists
pub fn user_config_file() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join(USER_CONFIG_DIR);
    ["config.json", "config.yaml"]
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Project configuration, falling back to the user configuration
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_config_in_ancestors(start_dir).or_else(user_config_file)
}

/// Lint settings sent by an editor, either `{ "css": { "lint": {..} } }`
/// or `{ "lint": {..} }`
pub fn lint_settings_from_client(value: &serde_json::Value) -> Option<LintSettings> {
    let lint = value
        .get("css")
        .and_then(|css| css.get("lint"))
        .or_else(|| value.get("lint"))?;

    match serde_json::from_value(lint.clone()) {
        Ok(settings) => Some(settings),
        Err(e) => {
            log::warn!("Ignoring invalid lint settings from client: {}", e);
            None
        }
    }
}
