use crate::models::MenuConfig;
use crate::services::FileStorage;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the menu configuration inside the config directory.
pub const MENU_CONFIG_FILE: &str = "Accessibility.yaml";

/// File name of the key/value storage inside the config directory.
pub const STORAGE_FILE: &str = "storage.yaml";

/// Configuration manager for the menu's YAML files.
///
/// Manages two files in one directory:
/// - Menu config (`Accessibility.yaml`): palette overrides, locale, custom messages
/// - Storage (`storage.yaml`): persisted locale and preferences, see [`FileStorage`]
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    menu_config_path: Utf8PathBuf,
    storage_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager, creating `config_dir` if needed.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            menu_config_path: config_dir.join(MENU_CONFIG_FILE),
            storage_path: config_dir.join(STORAGE_FILE),
            config_dir,
        })
    }

    /// Load the menu configuration file.
    ///
    /// # Returns
    /// The loaded MenuConfig, or defaults if the file doesn't exist
    pub fn load_menu_config(&self) -> Result<MenuConfig> {
        if !self.menu_config_path.exists() {
            tracing::warn!(
                "Menu config file not found at {}, using defaults",
                self.menu_config_path
            );
            return Ok(MenuConfig::default());
        }

        let file_contents = fs::read_to_string(&self.menu_config_path)
            .with_context(|| format!("Failed to read menu config: {}", self.menu_config_path))?;

        if file_contents.trim().is_empty() {
            tracing::warn!("Menu config {} is empty, using defaults", self.menu_config_path);
            return Ok(MenuConfig::default());
        }

        let config: MenuConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse menu config: {}", self.menu_config_path))?;

        tracing::info!("Loaded menu config from {}", self.menu_config_path);
        Ok(config)
    }

    /// Save the menu configuration file.
    pub fn save_menu_config(&self, config: &MenuConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize menu config to YAML")?;

        fs::write(&self.menu_config_path, yaml_string)
            .with_context(|| format!("Failed to write menu config: {}", self.menu_config_path))?;

        tracing::info!("Saved menu config to {}", self.menu_config_path);
        Ok(())
    }

    /// Durable storage backed by `storage.yaml` in the config directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_path)
    }

    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn menu_config_path(&self) -> &Utf8Path {
        &self.menu_config_path
    }
}
