use super::MessageKey::{self, *};

/// Built-in English strings.
pub(super) const ENTRIES: &[(MessageKey, &str)] = &[
    // Header
    (Title, "Accessibility"),
    (Subtitle, "Adjust the interface to your needs"),
    (Close, "Close menu"),
    // Font size
    (FontSize, "Font Size"),
    (IncreaseFontSize, "Increase font size"),
    (DecreaseFontSize, "Decrease font size"),
    (ResetFontSize, "Reset size"),
    // Features
    (DyslexicFont, "Dyslexic Font"),
    (HighContrast, "High Contrast"),
    (HighlightLinks, "Highlight Links"),
    // Screen reader
    (ScreenReader, "Screen Reader"),
    (ReadFullPage, "Read Full Page"),
    (StopReading, "Stop Reading"),
    // Reading modes
    (ReadOnHover, "Read on Hover"),
    (ReadOnHoverDesc, "Read text when you hover over it"),
    (ReadOnSelect, "Read Selected Text"),
    (ReadOnSelectDesc, "Read text when you select it"),
    (ResetAll, "Reset All"),
    (InfoTitle, "Information"),
    (
        InfoText,
        "These settings are automatically saved and will be applied across all pages.",
    ),
    (Language, "Language"),
    (
        SpeechNotSupported,
        "Your browser does not support speech synthesis.",
    ),
    // ARIA labels
    (AriaOpenMenu, "Open accessibility menu"),
    (AriaCloseMenu, "Close menu"),
    (AriaToggleDyslexic, "Enable dyslexic font"),
    (AriaToggleContrast, "Enable high contrast"),
    (AriaToggleLinks, "Highlight all links"),
    (AriaToggleHover, "Enable read on hover"),
    (AriaToggleSelect, "Enable read on select"),
];
