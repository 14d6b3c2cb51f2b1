//! Integration tests for ConfigManager and the headless startup path
//!
//! These tests verify:
//! - Menu configuration loading and saving
//! - Applying a loaded configuration to a fresh AppContext
//! - File-backed storage shared through the config directory

use accessibility_menu::models::MenuConfig;
use accessibility_menu::services::RootStyle;
use accessibility_menu::{AppContext, Capabilities, ConfigManager, LocaleCode, MessageKey};
use camino::Utf8PathBuf;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

const SAMPLE_CONFIG: &str = r##"
accessibility:
  colors:
    primaryColor: "#0f766e"
    readingHighlightBg: "#ccfbf1"
  theme: dark
i18n:
  locale: en
  messages:
    en:
      title: Display Settings
"##;

#[test]
fn test_create_config_manager_creates_directory() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("Accessibility Data");

    let manager = ConfigManager::new(&nested).unwrap();

    assert!(nested.exists());
    assert_eq!(manager.config_dir(), &nested);
}

#[test]
fn test_load_sample_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    fs::write(manager.menu_config_path(), SAMPLE_CONFIG).unwrap();

    let config = manager.load_menu_config().unwrap();

    let colors = config.accessibility.colors.as_ref().unwrap();
    assert_eq!(colors.primary_color.as_deref(), Some("#0f766e"));
    assert_eq!(config.accessibility.theme.as_deref(), Some("dark"));
    assert_eq!(config.i18n.locale, Some(LocaleCode::En));
    assert!(config.i18n.use_global_i18n);
}

#[test]
fn test_loaded_config_drives_context() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    fs::write(manager.menu_config_path(), SAMPLE_CONFIG).unwrap();
    let config = manager.load_menu_config().unwrap();

    let style = Arc::new(RootStyle::new());
    let context = AppContext::new(
        Capabilities::none()
            .with_storage(Arc::new(manager.storage()))
            .with_style(style.clone()),
    );

    let preferences = context.use_accessibility(Some(&config.accessibility));
    let i18n = context.use_i18n(Some(&config.i18n));

    assert_eq!(i18n.t(MessageKey::Title), "Display Settings");
    assert_eq!(i18n.t(MessageKey::Close), "Close menu");
    assert_eq!(preferences.config().theme.as_deref(), Some("dark"));
    assert_eq!(
        style.property("--accessibility-reading-highlight-bg").as_deref(),
        Some("#ccfbf1")
    );
    assert!(style.to_css().contains("--accessibility-primary: #0f766e;"));
}

#[test]
fn test_round_trip_menu_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    fs::write(manager.menu_config_path(), SAMPLE_CONFIG).unwrap();

    let config = manager.load_menu_config().unwrap();
    manager.save_menu_config(&config).unwrap();

    assert_eq!(manager.load_menu_config().unwrap(), config);
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    fs::write(manager.menu_config_path(), "").unwrap();

    assert_eq!(manager.load_menu_config().unwrap(), MenuConfig::default());
}

#[test]
fn test_locale_persisted_in_config_dir() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    AppContext::new(Capabilities::none().with_storage(Arc::new(manager.storage())))
        .use_i18n(None)
        .set_locale(LocaleCode::En);

    let reopened = ConfigManager::new(&config_path).unwrap();
    let context = AppContext::new(Capabilities::none().with_storage(Arc::new(reopened.storage())));
    assert_eq!(context.locale(), LocaleCode::En);
}
