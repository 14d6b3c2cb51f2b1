use crate::locales::LocaleCode;
use crate::models::config::CustomMessages;
use serde::{Deserialize, Serialize};

/// Default font size, as a percentage of the host page's base size.
pub const DEFAULT_FONT_SIZE: u32 = 100;

/// Smallest font size reachable through [`PreferenceState::decrease_font_size`].
pub const FONT_SIZE_MIN: u32 = 80;

/// Largest font size reachable through [`PreferenceState::increase_font_size`].
pub const FONT_SIZE_MAX: u32 = 200;

/// Percentage points added or removed per font size step.
pub const FONT_SIZE_STEP: u32 = 10;

/// Presentation preferences toggled from the accessibility menu.
///
/// Each [`PreferenceStore`](crate::state::PreferenceStore) owns one of these;
/// they are never shared between stores. Only the color palette is shared,
/// through [`AppContext`](crate::AppContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceState {
    pub font_size: u32,
    pub is_dyslexic_font: bool,
    pub is_high_contrast: bool,
    pub is_highlight_links: bool,
    pub read_on_hover: bool,
    pub read_on_select: bool,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            is_dyslexic_font: false,
            is_high_contrast: false,
            is_highlight_links: false,
            read_on_hover: false,
            read_on_select: false,
        }
    }
}

impl PreferenceState {
    /// Set the font size, clamped to [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Step the font size up, clamped to [`FONT_SIZE_MAX`].
    pub fn increase_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_add(FONT_SIZE_STEP));
    }

    /// Step the font size down, clamped to [`FONT_SIZE_MIN`].
    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP));
    }

    pub fn reset_font_size(&mut self) {
        self.font_size = DEFAULT_FONT_SIZE;
    }

    /// True when any text-to-speech trigger is enabled.
    pub fn is_reading_enabled(&self) -> bool {
        self.read_on_hover || self.read_on_select
    }
}

/// Partial palette supplied by the host application.
///
/// Any color left as `None` keeps its default when merged by
/// [`ColorPalette::merged`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOverrides {
    pub primary_color: Option<String>,
    pub primary_hover_color: Option<String>,
    pub link_highlight_bg: Option<String>,
    pub link_highlight_border: Option<String>,
    pub reading_highlight_bg: Option<String>,
    pub reading_highlight_border: Option<String>,
}

/// Fully populated six-color palette used to theme the menu's highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary_color: String,
    pub primary_hover_color: String,
    pub link_highlight_bg: String,
    pub link_highlight_border: String,
    pub reading_highlight_bg: String,
    pub reading_highlight_border: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            primary_hover_color: "#1d4ed8".to_string(),
            link_highlight_bg: "#fef08a".to_string(),
            link_highlight_border: "#eab308".to_string(),
            reading_highlight_bg: "#bfdbfe".to_string(),
            reading_highlight_border: "#3b82f6".to_string(),
        }
    }
}

impl ColorPalette {
    /// Merge `overrides` over the default palette.
    ///
    /// The result never depends on any previously applied palette.
    pub fn merged(overrides: &ColorOverrides) -> Self {
        let defaults = Self::default();
        let pick = |value: &Option<String>, fallback: String| value.clone().unwrap_or(fallback);

        Self {
            primary_color: pick(&overrides.primary_color, defaults.primary_color),
            primary_hover_color: pick(&overrides.primary_hover_color, defaults.primary_hover_color),
            link_highlight_bg: pick(&overrides.link_highlight_bg, defaults.link_highlight_bg),
            link_highlight_border: pick(
                &overrides.link_highlight_border,
                defaults.link_highlight_border,
            ),
            reading_highlight_bg: pick(&overrides.reading_highlight_bg, defaults.reading_highlight_bg),
            reading_highlight_border: pick(
                &overrides.reading_highlight_border,
                defaults.reading_highlight_border,
            ),
        }
    }

    /// Custom style properties carrying this palette, in application order.
    pub fn style_properties(&self) -> [(&'static str, &str); 6] {
        [
            ("--accessibility-primary", &self.primary_color),
            ("--accessibility-primary-hover", &self.primary_hover_color),
            ("--accessibility-link-highlight-bg", &self.link_highlight_bg),
            ("--accessibility-link-highlight-border", &self.link_highlight_border),
            ("--accessibility-reading-highlight-bg", &self.reading_highlight_bg),
            ("--accessibility-reading-highlight-border", &self.reading_highlight_border),
        ]
    }
}

/// Initial configuration passed when creating a preference store.
///
/// `locale`, `messages` and `theme` are not interpreted by the store; they are
/// passed through to [`AccessibilitySnapshot`] for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityConfig {
    pub colors: Option<ColorOverrides>,
    pub locale: Option<LocaleCode>,
    pub messages: Option<CustomMessages>,
    pub theme: Option<String>,
}

/// Derived read-only view of a store, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySnapshot {
    pub font_size: u32,
    pub is_dyslexic_font: bool,
    pub is_high_contrast: bool,
    pub is_highlight_links: bool,
    pub read_on_hover: bool,
    pub read_on_select: bool,
    pub colors: ColorPalette,
    pub locale: Option<LocaleCode>,
    pub messages: Option<CustomMessages>,
    pub theme: Option<String>,
}

impl AccessibilitySnapshot {
    pub fn new(state: &PreferenceState, colors: ColorPalette, config: &AccessibilityConfig) -> Self {
        Self {
            font_size: state.font_size,
            is_dyslexic_font: state.is_dyslexic_font,
            is_high_contrast: state.is_high_contrast,
            is_highlight_links: state.is_highlight_links,
            read_on_hover: state.read_on_hover,
            read_on_select: state.read_on_select,
            colors,
            locale: config.locale,
            messages: config.messages.clone(),
            theme: config.theme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let state = PreferenceState::default();
        assert_eq!(state.font_size, 100);
        assert!(!state.is_dyslexic_font);
        assert!(!state.is_high_contrast);
        assert!(!state.is_highlight_links);
        assert!(!state.is_reading_enabled());
    }

    #[test]
    fn test_font_size_steps_are_clamped() {
        let mut state = PreferenceState::default();

        state.increase_font_size();
        assert_eq!(state.font_size, 110);

        for _ in 0..20 {
            state.increase_font_size();
        }
        assert_eq!(state.font_size, FONT_SIZE_MAX);

        for _ in 0..30 {
            state.decrease_font_size();
        }
        assert_eq!(state.font_size, FONT_SIZE_MIN);

        state.reset_font_size();
        assert_eq!(state.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_set_font_size_clamps_to_range() {
        let mut state = PreferenceState::default();

        state.set_font_size(500);
        assert_eq!(state.font_size, FONT_SIZE_MAX);

        state.set_font_size(0);
        assert_eq!(state.font_size, FONT_SIZE_MIN);

        state.set_font_size(130);
        assert_eq!(state.font_size, 130);
    }

    #[test]
    fn test_font_size_steps_from_out_of_range_values() {
        // Fields are public, so callers can bypass the clamping setter
        let mut state = PreferenceState {
            font_size: u32::MAX,
            ..Default::default()
        };
        state.increase_font_size();
        assert_eq!(state.font_size, FONT_SIZE_MAX);

        state.font_size = 500;
        state.increase_font_size();
        assert_eq!(state.font_size, FONT_SIZE_MAX);

        state.font_size = 10;
        state.decrease_font_size();
        assert_eq!(state.font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn test_merged_palette_keeps_defaults_for_missing_keys() {
        let overrides = ColorOverrides {
            primary_color: Some("#ff0000".to_string()),
            reading_highlight_border: Some("#00ff00".to_string()),
            ..Default::default()
        };

        let palette = ColorPalette::merged(&overrides);
        let defaults = ColorPalette::default();

        assert_eq!(palette.primary_color, "#ff0000");
        assert_eq!(palette.reading_highlight_border, "#00ff00");
        assert_eq!(palette.primary_hover_color, defaults.primary_hover_color);
        assert_eq!(palette.link_highlight_bg, defaults.link_highlight_bg);
        assert_eq!(palette.link_highlight_border, defaults.link_highlight_border);
        assert_eq!(palette.reading_highlight_bg, defaults.reading_highlight_bg);
    }

    #[test]
    fn test_empty_overrides_yield_defaults() {
        assert_eq!(ColorPalette::merged(&ColorOverrides::default()), ColorPalette::default());
    }

    #[test]
    fn test_style_property_names() {
        let palette = ColorPalette::default();
        let props = palette.style_properties();

        assert_eq!(props[0], ("--accessibility-primary", "#2563eb"));
        assert_eq!(props[1], ("--accessibility-primary-hover", "#1d4ed8"));
        assert_eq!(props[5], ("--accessibility-reading-highlight-border", "#3b82f6"));
    }

    #[test]
    fn test_config_deserializes_camel_case_colors() {
        let yaml = "colors:\n  primaryColor: '#123456'\n  linkHighlightBg: '#abcdef'\ntheme: dark\n";
        let config: AccessibilityConfig = serde_yaml_ng::from_str(yaml).unwrap();

        let colors = config.colors.unwrap();
        assert_eq!(colors.primary_color.as_deref(), Some("#123456"));
        assert_eq!(colors.link_highlight_bg.as_deref(), Some("#abcdef"));
        assert!(colors.primary_hover_color.is_none());
        assert_eq!(config.theme.as_deref(), Some("dark"));
    }
}
