//! Accessibility Menu - headless driver
//!
//! Loads a menu configuration directory and prints what a presentation layer
//! would receive: the `:root` block of palette custom properties and every
//! message in the active locale.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/accessibility-menu.<date>
//! 2. Load `Accessibility.yaml` from the config directory (first argument, default `Accessibility Data`)
//! 3. Create the AppContext with file-backed storage and an in-memory root style
//! 4. Create the preference store and locale resolver from the loaded configuration
//! 5. Print the CSS block and the translated message table

use accessibility_menu::services::RootStyle;
use accessibility_menu::{APP_NAME, AppContext, Capabilities, ConfigManager, MessageKey, VERSION};
use anyhow::Result;
use std::sync::Arc;

fn main() -> Result<()> {
    let _guard = accessibility_menu::logging::setup_logging("logs", APP_NAME, false)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Accessibility Data".to_string());

    let config_manager = ConfigManager::new(&config_dir)?;
    let menu_config = config_manager.load_menu_config()?;

    let style = Arc::new(RootStyle::new());
    let capabilities = Capabilities::none()
        .with_storage(Arc::new(config_manager.storage()))
        .with_style(style.clone());
    let context = AppContext::new(capabilities);

    let preferences = context.use_accessibility(Some(&menu_config.accessibility));
    preferences.restore();
    // Push the palette even when the config carries no colors
    context.apply_colors(&preferences.colors());

    let i18n = context.use_i18n(Some(&menu_config.i18n));

    tracing::info!(
        "Resolved locale {} (tts={}), font size {}%",
        i18n.locale(),
        i18n.tts_lang(),
        preferences.read(|p| p.font_size)
    );

    println!("{}", style.to_css());
    println!();
    for key in MessageKey::ALL {
        println!("{}: {}", key, i18n.t(key));
    }

    tracing::info!("Done");
    Ok(())
}
