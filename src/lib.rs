// Accessibility Menu - preference store and message resolver
//
// This is the library crate containing the shared state and lookup logic of an
// embeddable accessibility menu. Rendering is left to the host application.
// The binary crate (main.rs) is a headless driver that prints the resolved
// style properties and messages for a configuration directory.

pub mod config;
pub mod context;
pub mod i18n;
pub mod locales;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use context::{AppContext, Capabilities, ContextChange, LOCALE_STORAGE_KEY};
pub use i18n::LocaleResolver;
pub use locales::{DEFAULT_LOCALE, LocaleCode, MessageKey};
pub use models::{
    AccessibilityConfig, AccessibilitySnapshot, ColorOverrides, ColorPalette, I18nOptions,
    PreferenceState,
};
pub use state::{PreferenceChange, PreferenceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
