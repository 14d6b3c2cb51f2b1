//! Data models for the accessibility menu.
//!
//! - [`PreferenceState`]: per-store presentation preferences (font size, fonts, contrast, reading modes)
//! - [`ColorPalette`] / [`ColorOverrides`]: the shared six-color palette and partial overrides merged over it
//! - [`AccessibilityConfig`]: initial configuration for a preference store
//! - [`AccessibilitySnapshot`]: derived read-only view handed to the presentation layer
//! - [`I18nOptions`] / [`MenuConfig`]: locale resolver options and the YAML configuration file
//!
//! All configuration structs derive `Serialize`/`Deserialize` with camelCase
//! field names, so the same shapes are accepted from host applications and
//! from `Accessibility.yaml`.

pub mod config;
pub mod preferences;

pub use config::{CustomMessages, I18nOptions, MenuConfig};
pub use preferences::{
    AccessibilityConfig, AccessibilitySnapshot, ColorOverrides, ColorPalette, PreferenceState,
    DEFAULT_FONT_SIZE, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP,
};
