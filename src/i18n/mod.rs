//! Message resolution for the accessibility menu.
//!
//! [`LocaleResolver::t`] resolves a [`MessageKey`] against three sources, first
//! match wins:
//!
//! 1. the host application's translator, looked up as `accessibility.<key>`
//! 2. custom overrides for the active locale
//! 3. the built-in table for the active locale, then for [`DEFAULT_LOCALE`]
//!
//! and finally the key itself, so a lookup always yields a string.
//!
//! The host translator is taken to have missed when it returns the lookup key
//! unchanged. A translation that legitimately equals `accessibility.<key>` is
//! therefore indistinguishable from a miss and falls through to tier 2.

use crate::context::{AppContext, ContextChange};
use crate::locales::{
    AVAILABLE_LOCALES, DEFAULT_LOCALE, LocaleCode, LocaleInfo, MessageKey, TTS_LANGS, messages,
    tts_lang_for,
};
use crate::services::{HostTranslator, host_key};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Resolves message keys for the active locale and switches locales.
///
/// Created by [`AppContext::use_i18n`]. All resolvers created from the same
/// context share the active locale and custom overrides.
#[derive(Clone)]
pub struct LocaleResolver {
    context: AppContext,
    translator: Option<Arc<dyn HostTranslator>>,
}

impl LocaleResolver {
    pub(crate) fn new(context: AppContext, translator: Option<Arc<dyn HostTranslator>>) -> Self {
        Self { context, translator }
    }

    /// Translate `key` for the active locale. Never fails.
    pub fn t(&self, key: MessageKey) -> String {
        if let Some(translated) = self.host_translation(key) {
            return translated;
        }

        let locale = self.context.locale();

        if let Some(custom) = self
            .context
            .custom_message(locale, key)
            .filter(|text| !text.is_empty())
        {
            return custom;
        }

        let builtin = messages(locale)
            .get(key)
            .filter(|text| !text.is_empty())
            .or_else(|| {
                tracing::debug!("No {} entry for '{}', using {}", locale, key, DEFAULT_LOCALE);
                messages(DEFAULT_LOCALE).get(key).filter(|text| !text.is_empty())
            });

        match builtin {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("Message '{}' has no translation in any table", key);
                key.as_str().to_string()
            }
        }
    }

    fn host_translation(&self, key: MessageKey) -> Option<String> {
        let translator = self.translator.as_ref()?;
        let lookup = host_key(key.as_str());
        let translated = translator.t(&lookup);

        if translated == lookup {
            None
        } else {
            Some(translated)
        }
    }

    /// Switch the active locale for every resolver sharing this context,
    /// persisting the choice when storage is available.
    pub fn set_locale(&self, locale: LocaleCode) {
        self.context.set_locale(locale);
    }

    /// The active locale.
    pub fn locale(&self) -> LocaleCode {
        self.context.locale()
    }

    /// Speech-synthesis language tag for the active locale.
    pub fn tts_lang(&self) -> &'static str {
        tts_lang_for(TTS_LANGS, self.context.locale())
    }

    pub fn available_locales(&self) -> &'static [LocaleInfo] {
        AVAILABLE_LOCALES
    }

    /// Whether lookups consult a host translator first.
    pub fn has_host_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Subscribe to locale and message changes of the shared context.
    pub fn subscribe(&self) -> broadcast::Receiver<ContextChange> {
        self.context.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Capabilities;
    use crate::models::{CustomMessages, I18nOptions};
    use crate::services::translator::MockHostTranslator;
    use indexmap::IndexMap;

    fn overrides(locale: LocaleCode, key: MessageKey, text: &str) -> CustomMessages {
        let mut messages = CustomMessages::new();
        messages.insert(locale, IndexMap::from([(key, text.to_string())]));
        messages
    }

    fn echoing_translator() -> MockHostTranslator {
        let mut translator = MockHostTranslator::new();
        translator.expect_t().returning(|key| key.to_string());
        translator
    }

    #[test]
    fn test_builtin_lookup_for_every_key() {
        let context = AppContext::default();
        let i18n = context.use_i18n(None);

        for locale in LocaleCode::all() {
            i18n.set_locale(*locale);
            let table = messages(*locale);
            for key in MessageKey::ALL {
                assert_eq!(i18n.t(key), table.get(key).unwrap());
            }
        }
    }

    #[test]
    fn test_title_in_both_locales() {
        let i18n = AppContext::default().use_i18n(None);

        i18n.set_locale(LocaleCode::En);
        assert_eq!(i18n.t(MessageKey::Title), "Accessibility");

        i18n.set_locale(LocaleCode::Es);
        assert_eq!(i18n.t(MessageKey::Title), "Accesibilidad");
    }

    #[test]
    fn test_custom_override_beats_builtin() {
        let options = I18nOptions {
            locale: Some(LocaleCode::En),
            messages: Some(overrides(LocaleCode::En, MessageKey::Title, "Custom")),
            ..Default::default()
        };
        let i18n = AppContext::default().use_i18n(Some(&options));

        assert_eq!(i18n.t(MessageKey::Title), "Custom");
        assert_eq!(i18n.t(MessageKey::Close), "Close menu");
    }

    #[test]
    fn test_override_for_other_locale_is_ignored() {
        let options = I18nOptions {
            locale: Some(LocaleCode::Es),
            messages: Some(overrides(LocaleCode::En, MessageKey::Title, "Custom")),
            ..Default::default()
        };
        let i18n = AppContext::default().use_i18n(Some(&options));

        assert_eq!(i18n.t(MessageKey::Title), "Accesibilidad");
    }

    #[test]
    fn test_empty_override_falls_through() {
        let options = I18nOptions {
            locale: Some(LocaleCode::En),
            messages: Some(overrides(LocaleCode::En, MessageKey::Title, "")),
            ..Default::default()
        };
        let i18n = AppContext::default().use_i18n(Some(&options));

        assert_eq!(i18n.t(MessageKey::Title), "Accessibility");
    }

    #[test]
    fn test_host_translation_wins() {
        let mut translator = MockHostTranslator::new();
        translator
            .expect_t()
            .withf(|key| key == "accessibility.title")
            .returning(|_| "Host Title".to_string());

        let context = AppContext::new(Capabilities::none().with_translator(Arc::new(translator)));
        let options = I18nOptions {
            messages: Some(overrides(LocaleCode::Es, MessageKey::Title, "Custom")),
            ..Default::default()
        };
        let i18n = context.use_i18n(Some(&options));

        assert!(i18n.has_host_translator());
        assert_eq!(i18n.t(MessageKey::Title), "Host Title");
    }

    #[test]
    fn test_echoed_key_counts_as_miss() {
        let context = AppContext::new(
            Capabilities::none().with_translator(Arc::new(echoing_translator())),
        );
        let i18n = context.use_i18n(None);

        assert_eq!(i18n.t(MessageKey::Title), "Accesibilidad");
    }

    #[test]
    fn test_host_translator_can_be_disabled() {
        let mut translator = MockHostTranslator::new();
        translator.expect_t().never();

        let context = AppContext::new(Capabilities::none().with_translator(Arc::new(translator)));
        let options = I18nOptions {
            use_global_i18n: false,
            ..Default::default()
        };
        let i18n = context.use_i18n(Some(&options));

        assert!(!i18n.has_host_translator());
        assert_eq!(i18n.t(MessageKey::ResetAll), "Restablecer Todo");
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let i18n = AppContext::default().use_i18n(None);
        assert_eq!(i18n.t(MessageKey::InfoText), i18n.t(MessageKey::InfoText));
    }

    #[test]
    fn test_tts_lang_follows_locale() {
        let i18n = AppContext::default().use_i18n(None);
        assert_eq!(i18n.tts_lang(), "es-MX");

        i18n.set_locale(LocaleCode::En);
        assert_eq!(i18n.tts_lang(), "en-US");
    }

    #[test]
    fn test_resolvers_share_locale() {
        let context = AppContext::default();
        let first = context.use_i18n(None);
        let second = context.use_i18n(None);

        first.set_locale(LocaleCode::En);

        assert_eq!(second.locale(), LocaleCode::En);
        assert_eq!(second.t(MessageKey::Language), "Language");
    }

    #[test]
    fn test_available_locales() {
        let i18n = AppContext::default().use_i18n(None);
        assert_eq!(i18n.available_locales().len(), 2);
    }
}
