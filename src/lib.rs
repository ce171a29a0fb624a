#![warn(missing_docs)]

//! Themeable portfolio site engine.
//!
//! The site's colors come from one of fifteen built-in palettes or from a
//! custom palette derived from a single seed color. See [theme] for details.

pub use folio_theme as theme;

use folio_theme::config::ThemeConfig;
use folio_theme::manager::ThemeStore;
use folio_theme::storage::ThemeStorage;
use folio_theme::surface::RenderSurface;

/// A "prelude" for users of the folio engine.
///
/// Importing this module brings into scope the most common types
/// needed to drive a site's theme.
///
/// ```rust
/// use folio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::id::ThemeId;
    pub use crate::theme::manager::ThemeStore;
    pub use crate::theme::observer::{ThemeEvent, ThemeObserver};
    pub use crate::theme::palette::{Palette, PaletteField, PalettePatch};
    pub use crate::theme::storage::{FileStorage, MemoryStorage, StorageKeys, ThemeStorage};
    pub use crate::theme::surface::{RenderSurface, StyleVariables};
}

/// Open the theme store configured by the environment.
///
/// Reads [ThemeConfig::from_env_or_default], opens the configured storage and
/// applies the loaded state to `surface`.
///
/// ```rust
/// use folio::prelude::*;
///
/// let store = folio::open_theme_store(StyleVariables::new());
/// assert_eq!(store.surface().len(), 9);
/// ```
pub fn open_theme_store<R: RenderSurface>(surface: R) -> ThemeStore<Box<dyn ThemeStorage>, R> {
    let config = ThemeConfig::from_env_or_default();
    match &config.storage_path {
        Some(path) => log::info!("Using theme storage at {:?}", path),
        None => log::info!("No theme storage configured, theme state is kept in memory"),
    }
    ThemeStore::with_config(config.open_storage(), surface, &config)
}
