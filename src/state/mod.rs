// Preference store module
//
// This module provides the PreferenceStore which wraps PreferenceState with thread-safe
// access using Arc<RwLock<T>> and emits change events for the presentation layer.

use crate::context::AppContext;
use crate::models::{AccessibilityConfig, AccessibilitySnapshot, ColorPalette, PreferenceState};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Storage key holding the persisted preference fields.
pub const PREFERENCES_STORAGE_KEY: &str = "accessibility-preferences";

/// Change events emitted when preferences are modified
///
/// Each event carries the new value so observers can re-render without
/// reading the store back.
#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceChange {
    FontSizeChanged { font_size: u32 },

    DyslexicFontChanged { enabled: bool },

    HighContrastChanged { enabled: bool },

    HighlightLinksChanged { enabled: bool },

    ReadOnHoverChanged { enabled: bool },

    ReadOnSelectChanged { enabled: bool },

    /// Every preference was restored to its default
    PreferencesReset,
}

/// Observable preference fields plus the shared palette
///
/// Created by [`AppContext::use_accessibility`]. Every store owns its own
/// [`PreferenceState`]; the palette is read from the context and so is
/// shared by all stores created from it.
///
/// # Usage
///
/// - [`read()`](Self::read) / [`snapshot()`](Self::snapshot) for reading preferences
/// - [`update()`](Self::update) or the typed setters for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to changes
/// - [`config()`](Self::config) for the derived read-only view
pub struct PreferenceStore {
    state: Arc<RwLock<PreferenceState>>,

    /// Broadcast channel for emitting preference change events
    state_tx: broadcast::Sender<PreferenceChange>,

    context: AppContext,

    /// Initial configuration, kept for the snapshot's passthrough fields
    config: AccessibilityConfig,
}

impl PreferenceStore {
    pub(crate) fn new(context: AppContext, config: AccessibilityConfig) -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(PreferenceState::default())),
            state_tx,
            context,
            config,
        }
    }

    /// Get a copy of the current preferences
    pub fn snapshot(&self) -> PreferenceState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Execute a function with read access to the preferences
    ///
    /// # Example
    /// ```ignore
    /// let reading = store.read(|prefs| prefs.is_reading_enabled());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PreferenceState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Update the preferences and emit change events
    ///
    /// This is the primary way to modify preferences. It:
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects which fields changed
    /// 4. Emits one event per changed field
    ///
    /// The write lock is held while `update_fn` runs, so concurrent updates
    /// are never lost. `update_fn` must not call back into this store (or a
    /// clone of it): `read`, `snapshot`, `config` and `update` would deadlock.
    /// Work on the `&mut PreferenceState` it receives instead.
    ///
    /// # Example
    /// ```ignore
    /// store.update(|prefs| {
    ///     prefs.is_high_contrast = true;
    ///     prefs.font_size = 120;
    /// });
    /// ```
    pub fn update<F>(&self, update_fn: F) -> Vec<PreferenceChange>
    where
        F: FnOnce(&mut PreferenceState),
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);
        self.emit(&changes);

        changes
    }

    /// Subscribe to preference change events
    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceChange> {
        self.state_tx.subscribe()
    }

    /// Derived read-only view: all preference fields, the current shared
    /// palette and the passthrough fields of the initial configuration.
    ///
    /// Recomputed on every call, so it always reflects the latest writes.
    pub fn config(&self) -> AccessibilitySnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        AccessibilitySnapshot::new(&state, self.context.palette(), &self.config)
    }

    /// The shared palette currently in effect
    pub fn colors(&self) -> ColorPalette {
        self.context.palette()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    fn emit(&self, changes: &[PreferenceChange]) {
        for change in changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }
    }

    fn detect_changes(old: &PreferenceState, new: &PreferenceState) -> Vec<PreferenceChange> {
        let mut changes = Vec::new();

        if old.font_size != new.font_size {
            changes.push(PreferenceChange::FontSizeChanged {
                font_size: new.font_size,
            });
        }

        if old.is_dyslexic_font != new.is_dyslexic_font {
            changes.push(PreferenceChange::DyslexicFontChanged {
                enabled: new.is_dyslexic_font,
            });
        }

        if old.is_high_contrast != new.is_high_contrast {
            changes.push(PreferenceChange::HighContrastChanged {
                enabled: new.is_high_contrast,
            });
        }

        if old.is_highlight_links != new.is_highlight_links {
            changes.push(PreferenceChange::HighlightLinksChanged {
                enabled: new.is_highlight_links,
            });
        }

        if old.read_on_hover != new.read_on_hover {
            changes.push(PreferenceChange::ReadOnHoverChanged {
                enabled: new.read_on_hover,
            });
        }

        if old.read_on_select != new.read_on_select {
            changes.push(PreferenceChange::ReadOnSelectChanged {
                enabled: new.read_on_select,
            });
        }

        changes
    }

    // Convenience methods for common preference updates

    /// Set the font size, clamped to the supported range
    pub fn set_font_size(&self, font_size: u32) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.set_font_size(font_size))
    }

    pub fn increase_font_size(&self) -> Vec<PreferenceChange> {
        self.update(PreferenceState::increase_font_size)
    }

    pub fn decrease_font_size(&self) -> Vec<PreferenceChange> {
        self.update(PreferenceState::decrease_font_size)
    }

    pub fn reset_font_size(&self) -> Vec<PreferenceChange> {
        self.update(PreferenceState::reset_font_size)
    }

    pub fn set_dyslexic_font(&self, enabled: bool) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.is_dyslexic_font = enabled)
    }

    pub fn set_high_contrast(&self, enabled: bool) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.is_high_contrast = enabled)
    }

    pub fn set_highlight_links(&self, enabled: bool) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.is_highlight_links = enabled)
    }

    pub fn set_read_on_hover(&self, enabled: bool) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.read_on_hover = enabled)
    }

    pub fn set_read_on_select(&self, enabled: bool) -> Vec<PreferenceChange> {
        self.update(|prefs| prefs.read_on_select = enabled)
    }

    /// Restore every preference to its default
    ///
    /// The palette is shared and therefore left alone.
    pub fn reset_all(&self) -> Vec<PreferenceChange> {
        let mut changes = self.update(|prefs| *prefs = PreferenceState::default());

        let reset_event = PreferenceChange::PreferencesReset;
        let _ = self.state_tx.send(reset_event.clone());
        changes.push(reset_event);

        changes
    }

    /// Save the preference fields to durable storage
    ///
    /// Does nothing without storage; write failures are logged and ignored.
    pub fn persist(&self) {
        let Some(storage) = self.context.storage() else {
            return;
        };

        let yaml = match serde_yaml_ng::to_string(&self.snapshot()) {
            Ok(yaml) => yaml,
            Err(e) => {
                tracing::warn!("Failed to serialize preferences: {}", e);
                return;
            }
        };

        match storage.set(PREFERENCES_STORAGE_KEY, &yaml) {
            Ok(()) => tracing::debug!("Preferences persisted"),
            Err(e) => tracing::warn!("Failed to persist preferences: {}", e),
        }
    }

    /// Load previously persisted preferences, emitting change events for any
    /// field that differs
    ///
    /// Missing or malformed entries leave the store untouched. An out-of-range
    /// font size is clamped.
    pub fn restore(&self) -> Vec<PreferenceChange> {
        let Some(storage) = self.context.storage() else {
            return Vec::new();
        };

        let saved = match storage.get(PREFERENCES_STORAGE_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read persisted preferences: {}", e);
                return Vec::new();
            }
        };

        match serde_yaml_ng::from_str::<PreferenceState>(&saved) {
            Ok(mut restored) => {
                restored.set_font_size(restored.font_size);
                tracing::info!(
                    "Restored preferences: font_size={}%, dyslexic={}, contrast={}, links={}",
                    restored.font_size,
                    restored.is_dyslexic_font,
                    restored.is_high_contrast,
                    restored.is_highlight_links
                );
                self.update(|prefs| *prefs = restored)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted preferences: {}", e);
                Vec::new()
            }
        }
    }
}

// Clones share the same preference fields and event channel
impl Clone for PreferenceStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
            context: self.context.clone(),
            config: self.config.clone(),
        }
    }
}
