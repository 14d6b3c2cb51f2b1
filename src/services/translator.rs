/// Namespace prefix under which the menu's keys are looked up in a host translator.
pub const HOST_KEY_PREFIX: &str = "accessibility.";

/// Translation service of the host application.
///
/// Implementations conventionally echo the lookup key when they have no
/// translation for it; [`LocaleResolver`](crate::i18n::LocaleResolver) relies
/// on that to detect a miss.
#[cfg_attr(test, mockall::automock)]
pub trait HostTranslator: Send + Sync {
    fn t(&self, key: &str) -> String;
}

/// Fully qualified host lookup key for one of the menu's message keys.
pub fn host_key(key: &str) -> String {
    format!("{}{}", HOST_KEY_PREFIX, key)
}
