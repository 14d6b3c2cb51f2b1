//! Built-in locales, message keys and message tables.
//!
//! Every supported locale ships a complete [`MessageTable`]: one entry per
//! [`MessageKey`]. The tables are static data; runtime overrides live in the
//! shared state owned by [`AppContext`](crate::AppContext).
//!
//! # Related Types
//!
//! - [`crate::i18n::LocaleResolver`]: resolves keys against these tables
//! - [`TTS_LANGS`]: language tags handed to speech synthesis

mod en;
mod es;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported locale codes.
///
/// The set is closed: persisted or configured values outside it are rejected
/// by [`LocaleCode::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    #[default]
    Es,
    En,
}

/// Locale used when nothing else has been selected or persisted.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Es;

impl LocaleCode {
    /// Two-letter code used for persistence and configuration.
    pub fn code(&self) -> &'static str {
        match self {
            LocaleCode::Es => "es",
            LocaleCode::En => "en",
        }
    }

    /// Parse an exact two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(LocaleCode::Es),
            "en" => Some(LocaleCode::En),
            _ => None,
        }
    }

    /// All supported locales, in display order.
    pub fn all() -> &'static [LocaleCode] {
        &[LocaleCode::Es, LocaleCode::En]
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A supported locale together with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub code: LocaleCode,
    pub name: &'static str,
}

/// Locales offered by the language selector.
pub const AVAILABLE_LOCALES: &[LocaleInfo] = &[
    LocaleInfo {
        code: LocaleCode::Es,
        name: "Español",
    },
    LocaleInfo {
        code: LocaleCode::En,
        name: "English",
    },
];

/// Speech-synthesis language tag for each locale.
pub const TTS_LANGS: &[(LocaleCode, &str)] = &[(LocaleCode::Es, "es-MX"), (LocaleCode::En, "en-US")];

/// Look up the speech-synthesis tag for `locale` in `table`.
///
/// Falls back to the tag of [`DEFAULT_LOCALE`], and finally to the default
/// locale's bare code if the table has neither.
pub fn tts_lang_for(table: &[(LocaleCode, &'static str)], locale: LocaleCode) -> &'static str {
    let lookup = |code: LocaleCode| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, tag)| *tag)
    };

    lookup(locale)
        .or_else(|| lookup(DEFAULT_LOCALE))
        .unwrap_or_else(|| DEFAULT_LOCALE.code())
}

/// Keys of the user-facing strings shown by the accessibility menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    Title,
    Subtitle,
    Close,
    FontSize,
    IncreaseFontSize,
    DecreaseFontSize,
    ResetFontSize,
    DyslexicFont,
    HighContrast,
    HighlightLinks,
    ScreenReader,
    ReadFullPage,
    StopReading,
    ReadOnHover,
    ReadOnHoverDesc,
    ReadOnSelect,
    ReadOnSelectDesc,
    ResetAll,
    InfoTitle,
    InfoText,
    Language,
    SpeechNotSupported,
    AriaOpenMenu,
    AriaCloseMenu,
    AriaToggleDyslexic,
    AriaToggleContrast,
    AriaToggleLinks,
    AriaToggleHover,
    AriaToggleSelect,
}

impl MessageKey {
    /// Every key, in table order.
    pub const ALL: [MessageKey; 29] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::Close,
        MessageKey::FontSize,
        MessageKey::IncreaseFontSize,
        MessageKey::DecreaseFontSize,
        MessageKey::ResetFontSize,
        MessageKey::DyslexicFont,
        MessageKey::HighContrast,
        MessageKey::HighlightLinks,
        MessageKey::ScreenReader,
        MessageKey::ReadFullPage,
        MessageKey::StopReading,
        MessageKey::ReadOnHover,
        MessageKey::ReadOnHoverDesc,
        MessageKey::ReadOnSelect,
        MessageKey::ReadOnSelectDesc,
        MessageKey::ResetAll,
        MessageKey::InfoTitle,
        MessageKey::InfoText,
        MessageKey::Language,
        MessageKey::SpeechNotSupported,
        MessageKey::AriaOpenMenu,
        MessageKey::AriaCloseMenu,
        MessageKey::AriaToggleDyslexic,
        MessageKey::AriaToggleContrast,
        MessageKey::AriaToggleLinks,
        MessageKey::AriaToggleHover,
        MessageKey::AriaToggleSelect,
    ];

    /// The camelCase identifier used in configuration files and host lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Title => "title",
            MessageKey::Subtitle => "subtitle",
            MessageKey::Close => "close",
            MessageKey::FontSize => "fontSize",
            MessageKey::IncreaseFontSize => "increaseFontSize",
            MessageKey::DecreaseFontSize => "decreaseFontSize",
            MessageKey::ResetFontSize => "resetFontSize",
            MessageKey::DyslexicFont => "dyslexicFont",
            MessageKey::HighContrast => "highContrast",
            MessageKey::HighlightLinks => "highlightLinks",
            MessageKey::ScreenReader => "screenReader",
            MessageKey::ReadFullPage => "readFullPage",
            MessageKey::StopReading => "stopReading",
            MessageKey::ReadOnHover => "readOnHover",
            MessageKey::ReadOnHoverDesc => "readOnHoverDesc",
            MessageKey::ReadOnSelect => "readOnSelect",
            MessageKey::ReadOnSelectDesc => "readOnSelectDesc",
            MessageKey::ResetAll => "resetAll",
            MessageKey::InfoTitle => "infoTitle",
            MessageKey::InfoText => "infoText",
            MessageKey::Language => "language",
            MessageKey::SpeechNotSupported => "speechNotSupported",
            MessageKey::AriaOpenMenu => "ariaOpenMenu",
            MessageKey::AriaCloseMenu => "ariaCloseMenu",
            MessageKey::AriaToggleDyslexic => "ariaToggleDyslexic",
            MessageKey::AriaToggleContrast => "ariaToggleContrast",
            MessageKey::AriaToggleLinks => "ariaToggleLinks",
            MessageKey::AriaToggleHover => "ariaToggleHover",
            MessageKey::AriaToggleSelect => "ariaToggleSelect",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

/// Returned when parsing a string that names no [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message key: {0}")]
pub struct UnknownMessageKey(pub String);

/// Immutable table of built-in strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct MessageTable {
    locale: LocaleCode,
    entries: &'static [(MessageKey, &'static str)],
}

impl MessageTable {
    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Built-in string for `key`, if the table carries one.
    pub fn get(&self, key: MessageKey) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| *text)
    }

    /// Keys in [`MessageKey::ALL`] that this table lacks or maps to an empty string.
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .iter()
            .copied()
            .filter(|key| self.get(*key).is_none_or(str::is_empty))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// The built-in table for `locale`.
pub fn messages(locale: LocaleCode) -> MessageTable {
    let entries = match locale {
        LocaleCode::Es => es::ENTRIES,
        LocaleCode::En => en::ENTRIES,
    };
    MessageTable { locale, entries }
}
