use super::MessageKey::{self, *};

/// Built-in Spanish strings.
pub(super) const ENTRIES: &[(MessageKey, &str)] = &[
    // Header
    (Title, "Accesibilidad"),
    (Subtitle, "Ajusta la interfaz según tus necesidades"),
    (Close, "Cerrar menú"),
    // Font size
    (FontSize, "Tamaño de Fuente"),
    (IncreaseFontSize, "Aumentar tamaño de fuente"),
    (DecreaseFontSize, "Disminuir tamaño de fuente"),
    (ResetFontSize, "Restablecer tamaño"),
    // Features
    (DyslexicFont, "Fuente para Dislexia"),
    (HighContrast, "Alto Contraste"),
    (HighlightLinks, "Resaltar Enlaces"),
    // Screen reader
    (ScreenReader, "Lector de Pantalla"),
    (ReadFullPage, "Leer Página Completa"),
    (StopReading, "Detener Lectura Completa"),
    // Reading modes
    (ReadOnHover, "Leer al Pasar Mouse"),
    (ReadOnHoverDesc, "Lee el texto cuando pasas el cursor sobre él"),
    (ReadOnSelect, "Leer Texto Seleccionado"),
    (ReadOnSelectDesc, "Lee el texto cuando lo seleccionas"),
    (ResetAll, "Restablecer Todo"),
    (InfoTitle, "Información"),
    (
        InfoText,
        "Estos ajustes se guardan automáticamente y se aplicarán en todas las páginas.",
    ),
    (Language, "Idioma"),
    (
        SpeechNotSupported,
        "Tu navegador no soporta la síntesis de voz.",
    ),
    // ARIA labels
    (AriaOpenMenu, "Abrir menú de accesibilidad"),
    (AriaCloseMenu, "Cerrar menú"),
    (AriaToggleDyslexic, "Activar fuente para dislexia"),
    (AriaToggleContrast, "Activar alto contraste"),
    (AriaToggleLinks, "Resaltar todos los enlaces"),
    (AriaToggleHover, "Activar lectura al pasar el mouse"),
    (AriaToggleSelect, "Activar lectura de texto seleccionado"),
];
