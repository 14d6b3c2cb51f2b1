use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock};

/// Global style surface the palette is written to (a document root's inline style).
#[cfg_attr(test, mockall::automock)]
pub trait StyleSurface: Send + Sync {
    fn set_property(&self, name: &str, value: &str);
}

/// In-memory root style: records custom properties in first-write order and
/// renders them as a `:root` rule.
#[derive(Debug, Default)]
pub struct RootStyle {
    properties: RwLock<IndexMap<String, String>>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.properties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn properties(&self) -> IndexMap<String, String> {
        self.properties.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Render every recorded property as a single `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let properties = self.properties.read().unwrap_or_else(PoisonError::into_inner);

        let mut css = String::from(":root {\n");
        for (name, value) in properties.iter() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

impl StyleSurface for RootStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }
}
