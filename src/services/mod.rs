//! Services module - optional capabilities supplied by the host environment.
//!
//! The preference store and locale resolver never probe their environment.
//! Instead, whatever the host can offer is injected into
//! [`AppContext`](crate::AppContext) as an optional trait object:
//!
//! - [`DurableStorage`]: string key/value storage that survives restarts
//!   ([`MemoryStorage`], [`FileStorage`])
//! - [`StyleSurface`]: the global style surface receiving palette custom properties
//!   ([`RootStyle`])
//! - [`HostTranslator`]: the host application's own translation service
//!
//! A missing capability turns the corresponding operation into a no-op. A
//! failing one is logged and then treated the same way.

pub mod storage;
pub mod style;
pub mod translator;

pub use storage::{DurableStorage, FileStorage, MemoryStorage, StorageError};
pub use style::{RootStyle, StyleSurface};
pub use translator::{HOST_KEY_PREFIX, HostTranslator, host_key};
