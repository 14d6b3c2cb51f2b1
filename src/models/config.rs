use crate::locales::{LocaleCode, MessageKey};
use crate::models::AccessibilityConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied strings overriding the built-in tables, per locale and key.
pub type CustomMessages = IndexMap<LocaleCode, IndexMap<MessageKey, String>>;

/// Options accepted when creating a [`LocaleResolver`](crate::i18n::LocaleResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nOptions {
    /// Locale to switch to immediately.
    pub locale: Option<LocaleCode>,

    /// Overrides merged into the shared custom messages.
    pub messages: Option<CustomMessages>,

    /// Consult the host application's translator first, when one is installed.
    pub use_global_i18n: bool,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            locale: None,
            messages: None,
            use_global_i18n: true,
        }
    }
}

/// Menu configuration file (`Accessibility.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub accessibility: AccessibilityConfig,
    pub i18n: I18nOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i18n_options_default_enables_host_translator() {
        let options = I18nOptions::default();
        assert!(options.use_global_i18n);
        assert!(options.locale.is_none());
        assert!(options.messages.is_none());
    }

    #[test]
    fn test_menu_config_parses_overrides() {
        let yaml = r##"
accessibility:
  colors:
    primaryColor: "#000000"
i18n:
  locale: en
  useGlobalI18n: false
  messages:
    en:
      title: Custom
    es:
      resetAll: Reiniciar
"##;
        let config: MenuConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(config.i18n.locale, Some(LocaleCode::En));
        assert!(!config.i18n.use_global_i18n);

        let messages = config.i18n.messages.unwrap();
        assert_eq!(
            messages[&LocaleCode::En].get(&MessageKey::Title).map(String::as_str),
            Some("Custom")
        );
        assert_eq!(
            messages[&LocaleCode::Es].get(&MessageKey::ResetAll).map(String::as_str),
            Some("Reiniciar")
        );
    }

    #[test]
    fn test_empty_menu_config_uses_defaults() {
        let config: MenuConfig = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config, MenuConfig::default());
    }
}
