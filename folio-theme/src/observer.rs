//! # Theme Observers
//!
//! Collaborators outside the theme engine (toast notifications, the
//! achievement gallery, analytics) learn about theme changes through
//! [ThemeObserver]s registered on a [ThemeStore](crate::manager::ThemeStore).
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//! use folio_theme::manager::ThemeStore;
//! use folio_theme::storage::MemoryStorage;
//! use folio_theme::surface::StyleVariables;
//!
//! let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
//! store.subscribe(|event: &folio_theme::observer::ThemeEvent| {
//!     if event.is_non_default_selection() {
//!         println!("achievement unlocked: theme master");
//!     }
//! });
//! store.select_theme(ThemeId::Cyberpunk);
//! ```

use crate::id::ThemeId;
use crate::palette::PaletteField;

/// A change applied by a [ThemeStore](crate::manager::ThemeStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The active theme was selected explicitly.
    Selected {
        /// The theme active before the change.
        previous: ThemeId,
        /// The newly active theme.
        current: ThemeId,
    },
    /// A new seed color was set and the custom palette re-derived.
    SeedChanged {
        /// The new seed.
        seed: String,
    },
    /// Individual custom palette fields were edited.
    CustomFieldsEdited {
        /// The edited fields, in field order.
        fields: Vec<PaletteField>,
    },
}

impl ThemeEvent {
    /// Whether the user picked a theme other than [ThemeId::Default].
    pub fn is_non_default_selection(&self) -> bool {
        matches!(self, ThemeEvent::Selected { current, .. } if *current != ThemeId::Default)
    }

    /// A short user-facing message for toast notifications.
    pub fn summary(&self) -> String {
        match self {
            ThemeEvent::Selected { current, .. } => format!("Theme: {}", current.label()),
            ThemeEvent::SeedChanged { seed } => format!("Custom theme generated from {seed}"),
            ThemeEvent::CustomFieldsEdited { fields } => match fields.as_slice() {
                [field] => format!("Custom {} updated", field.label()),
                _ => format!("{} custom colors updated", fields.len()),
            },
        }
    }
}

/// Receives [ThemeEvent]s after they have been applied.
pub trait ThemeObserver {
    /// Called once per applied change.
    fn on_theme_event(&mut self, event: &ThemeEvent);
}

impl<F> ThemeObserver for F
where
    F: FnMut(&ThemeEvent),
{
    fn on_theme_event(&mut self, event: &ThemeEvent) {
        self(event)
    }
}
