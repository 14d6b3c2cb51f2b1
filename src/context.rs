// Application context
//
// Owns the state every consumer of the menu shares: the color palette and the
// locale/custom-message state. Optional host capabilities are injected here
// once and handed to every store and resolver created from the context.

use crate::i18n::LocaleResolver;
use crate::locales::{DEFAULT_LOCALE, LocaleCode, MessageKey};
use crate::models::{AccessibilityConfig, ColorOverrides, ColorPalette, CustomMessages, I18nOptions};
use crate::services::{DurableStorage, HostTranslator, StyleSurface};
use crate::state::PreferenceStore;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Storage key holding the persisted locale code.
pub const LOCALE_STORAGE_KEY: &str = "accessibility-locale";

/// Change events for the shared state owned by [`AppContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum ContextChange {
    /// A new palette replaced the shared one
    PaletteChanged { palette: ColorPalette },

    /// The active locale was switched
    LocaleChanged { locale: LocaleCode },

    /// Custom message overrides were merged in
    MessagesChanged,
}

/// Optional host capabilities.
///
/// Each `None` models an execution context without that facility: no durable
/// storage, no document to style, or no host translation service.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub storage: Option<Arc<dyn DurableStorage>>,
    pub style: Option<Arc<dyn StyleSurface>>,
    pub translator: Option<Arc<dyn HostTranslator>>,
}

impl Capabilities {
    /// No capabilities at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: Arc<dyn DurableStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_style(mut self, style: Arc<dyn StyleSurface>) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn HostTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("storage", &self.storage.is_some())
            .field("style", &self.style.is_some())
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
struct LocaleState {
    current_locale: LocaleCode,
    custom_messages: CustomMessages,
}

/// Shared configuration scope for every preference store and locale resolver.
///
/// Cloning is cheap and yields a handle to the same state: the palette and
/// locale set through one clone are visible through all others, and through
/// every store or resolver created from any of them.
///
/// # Related Types
///
/// - [`PreferenceStore`]: created by [`use_accessibility`](Self::use_accessibility)
/// - [`LocaleResolver`]: created by [`use_i18n`](Self::use_i18n)
/// - [`ContextChange`]: events emitted on shared-state mutations
#[derive(Clone, Debug)]
pub struct AppContext {
    palette: Arc<RwLock<ColorPalette>>,
    locale: Arc<RwLock<LocaleState>>,
    capabilities: Capabilities,
    change_tx: broadcast::Sender<ContextChange>,
}

impl AppContext {
    /// Create a context, recovering the persisted locale if storage holds a
    /// supported code.
    pub fn new(capabilities: Capabilities) -> Self {
        let (change_tx, _) = broadcast::channel(100);
        let current_locale = restore_locale(capabilities.storage.as_deref());

        Self {
            palette: Arc::new(RwLock::new(ColorPalette::default())),
            locale: Arc::new(RwLock::new(LocaleState {
                current_locale,
                custom_messages: CustomMessages::new(),
            })),
            capabilities,
            change_tx,
        }
    }

    /// Create a preference store with default preferences.
    ///
    /// When `config` carries colors, they are merged over the default palette,
    /// replace the shared palette and are pushed to the style surface.
    pub fn use_accessibility(&self, config: Option<&AccessibilityConfig>) -> PreferenceStore {
        let config = config.cloned().unwrap_or_default();

        if let Some(colors) = &config.colors {
            self.set_palette(colors);
        }

        PreferenceStore::new(self.clone(), config)
    }

    /// Create a locale resolver, applying `options` to the shared locale state.
    pub fn use_i18n(&self, options: Option<&I18nOptions>) -> LocaleResolver {
        let options = options.cloned().unwrap_or_default();

        if let Some(locale) = options.locale {
            self.switch_locale(locale);
        }

        if let Some(messages) = &options.messages {
            self.merge_messages(messages);
        }

        let translator = if options.use_global_i18n {
            self.capabilities.translator.clone()
        } else {
            None
        };

        LocaleResolver::new(self.clone(), translator)
    }

    /// The current shared palette.
    pub fn palette(&self) -> ColorPalette {
        self.palette.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the shared palette with `overrides` merged over the defaults,
    /// then apply it to the style surface.
    pub fn set_palette(&self, overrides: &ColorOverrides) -> ColorPalette {
        let palette = ColorPalette::merged(overrides);

        {
            // Held across application so the surface matches the stored palette
            let mut current = self.palette.write().unwrap_or_else(PoisonError::into_inner);
            *current = palette.clone();
            self.apply_colors(&current);
        }

        tracing::info!("Accessibility palette replaced (primary={})", palette.primary_color);
        let _ = self.change_tx.send(ContextChange::PaletteChanged {
            palette: palette.clone(),
        });

        palette
    }

    /// Write every palette color as a custom property on the style surface.
    ///
    /// Does nothing when no style surface is installed.
    pub fn apply_colors(&self, palette: &ColorPalette) {
        let Some(style) = &self.capabilities.style else {
            tracing::debug!("No style surface installed, skipping palette application");
            return;
        };

        for (name, value) in palette.style_properties() {
            style.set_property(name, value);
        }
    }

    /// The active locale.
    pub fn locale(&self) -> LocaleCode {
        self.locale.read().unwrap_or_else(PoisonError::into_inner).current_locale
    }

    /// Switch the active locale and persist it when storage is available.
    pub fn set_locale(&self, locale: LocaleCode) {
        self.switch_locale(locale);

        if let Some(storage) = &self.capabilities.storage
            && let Err(e) = storage.set(LOCALE_STORAGE_KEY, locale.code())
        {
            tracing::warn!("Failed to persist locale '{}': {}", locale, e);
        }
    }

    // Configured locales are applied for this run only; they are not persisted.
    fn switch_locale(&self, locale: LocaleCode) {
        self.locale.write().unwrap_or_else(PoisonError::into_inner).current_locale = locale;

        tracing::info!("Locale set to {}", locale);
        let _ = self.change_tx.send(ContextChange::LocaleChanged { locale });
    }

    /// Merge `messages` into the shared overrides.
    ///
    /// Keys present in `messages` are added or overwritten; other keys and
    /// other locales are left untouched.
    pub fn merge_messages(&self, messages: &CustomMessages) {
        {
            let mut state = self.locale.write().unwrap_or_else(PoisonError::into_inner);
            for (locale, overrides) in messages {
                let entry = state.custom_messages.entry(*locale).or_default();
                for (key, text) in overrides {
                    entry.insert(*key, text.clone());
                }
            }
        }

        tracing::debug!("Merged custom messages for {} locale(s)", messages.len());
        let _ = self.change_tx.send(ContextChange::MessagesChanged);
    }

    /// Custom override for `key` in `locale`, if one was supplied.
    pub fn custom_message(&self, locale: LocaleCode, key: MessageKey) -> Option<String> {
        let state = self.locale.read().unwrap_or_else(PoisonError::into_inner);
        state
            .custom_messages
            .get(&locale)
            .and_then(|overrides| overrides.get(&key))
            .cloned()
    }

    /// A copy of every custom override currently installed.
    pub fn custom_messages(&self) -> CustomMessages {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .custom_messages
            .clone()
    }

    /// Subscribe to palette, locale and message changes.
    pub fn subscribe(&self) -> broadcast::Receiver<ContextChange> {
        self.change_tx.subscribe()
    }

    pub fn storage(&self) -> Option<&Arc<dyn DurableStorage>> {
        self.capabilities.storage.as_ref()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Capabilities::none())
    }
}

fn restore_locale(storage: Option<&dyn DurableStorage>) -> LocaleCode {
    let Some(storage) = storage else {
        return DEFAULT_LOCALE;
    };

    match storage.get(LOCALE_STORAGE_KEY) {
        Ok(Some(saved)) => LocaleCode::from_code(&saved).unwrap_or_else(|| {
            tracing::warn!("Ignoring unsupported persisted locale '{}'", saved);
            DEFAULT_LOCALE
        }),
        Ok(None) => DEFAULT_LOCALE,
        Err(e) => {
            tracing::warn!("Failed to read persisted locale: {}", e);
            DEFAULT_LOCALE
        }
    }
}
