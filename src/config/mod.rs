use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Writing assistant configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Extra words for the tone and spelling tables
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EditorConfig {
    /// Show line numbers
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Drafts must be longer than this many characters before edits
    /// trigger an automatic check
    #[serde(default = "default_check_threshold")]
    pub check_threshold: usize,
}

/// Additions to the built-in tables. Loaded once at startup.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AssistantConfig {
    /// Misspelling -> correction
    #[serde(default)]
    pub dictionary: BTreeMap<String, String>,

    #[serde(default)]
    pub positive_words: Vec<String>,

    #[serde(default)]
    pub negative_words: Vec<String>,
}

/// UI settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Show the advertisement banner above the editor
    #[serde(default = "default_show_ad_banner")]
    pub show_ad_banner: bool,

    /// How long confirmation toasts stay up, in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

// Default values
fn default_show_line_numbers() -> bool {
    true
}
fn default_check_threshold() -> usize {
    10
}
fn default_show_ad_banner() -> bool {
    true
}
fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: default_show_line_numbers(),
            check_threshold: default_check_threshold(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_ad_banner: default_show_ad_banner(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Config,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager for `config_dir/config.json`
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config: Config::default(),
            config_path: config_dir.join("config.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config, keeping defaults when the file does not exist
    pub fn load(&mut self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }

        if self.config_path.exists() {
            let config_str = fs::read_to_string(&self.config_path)
                .with_context(|| format!("Failed to read {}", self.config_path.display()))?;
            self.config = serde_json::from_str(&config_str)
                .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
            tracing::info!(path = %self.config_path.display(), "config loaded");
        }

        Ok(())
    }

    /// Save the config
    pub fn save(&self) -> Result<()> {
        let config_str = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, config_str)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        Ok(())
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
