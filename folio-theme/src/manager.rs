//! # Theme State Store
//!
//! [ThemeStore] owns the active theme, the seed color and the custom palette.
//! Every mutation runs the same pipeline:
//!
//! 1. update the in-memory state,
//! 2. persist all three entries to storage (best effort, failures are logged),
//! 3. write the resolved palette onto the rendering surface,
//! 4. notify observers.
//!
//! The store is an ordinary value owned by the application root; create one
//! per session (or per test).
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//! use folio_theme::manager::ThemeStore;
//! use folio_theme::palette::PaletteField;
//! use folio_theme::storage::MemoryStorage;
//! use folio_theme::surface::StyleVariables;
//!
//! let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
//! assert_eq!(store.active_theme(), ThemeId::Default);
//!
//! store.set_seed_color("#0EA5E9").unwrap();
//! assert_eq!(store.active_theme(), ThemeId::Custom);
//!
//! store.edit_custom_field(PaletteField::Primary, "#112233").unwrap();
//! assert_eq!(store.surface().get("--primary"), Some("#112233"));
//! ```

use crate::color::{is_css_color, is_hex_color};
use crate::config::ThemeConfig;
use crate::derive::generate_from_seed;
use crate::error::{ThemeError, ThemeResult};
use crate::id::ThemeId;
use crate::observer::{ThemeEvent, ThemeObserver};
use crate::palette::{Palette, PaletteField, PalettePatch};
use crate::registry;
use crate::storage::{StorageKeys, ThemeStorage};
use crate::surface::{apply_palette, RenderSurface};

/// Holds and applies the active theme state.
pub struct ThemeStore<S, R> {
    storage: S,
    surface: R,
    keys: StorageKeys,
    active: ThemeId,
    seed: String,
    custom: Palette,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl<S: ThemeStorage, R: RenderSurface> ThemeStore<S, R> {
    /// Load state from `storage` with the default configuration and apply it.
    pub fn new(storage: S, surface: R) -> Self {
        Self::with_config(storage, surface, &ThemeConfig::default())
    }

    /// Load state from `storage` and apply it to `surface`.
    ///
    /// Each entry falls back to its default independently when it is missing
    /// or malformed, so a corrupt palette does not discard a valid theme.
    pub fn with_config(storage: S, surface: R, config: &ThemeConfig) -> Self {
        let keys = config.storage_keys.clone();

        let active = read_entry(&storage, &keys.theme)
            .and_then(|raw| {
                raw.parse()
                    .inspect_err(|e| log::warn!("Ignoring stored theme: {}", e))
                    .ok()
            })
            .unwrap_or(config.default_theme);

        let seed = read_entry(&storage, &keys.custom_color)
            .filter(|raw| {
                let valid = is_hex_color(raw);
                if !valid {
                    log::warn!("Ignoring stored seed color '{}'", raw);
                }
                valid
            })
            .unwrap_or_else(|| config.default_seed.clone());

        let custom = read_entry(&storage, &keys.custom_theme)
            .and_then(|raw| {
                Palette::from_json(&raw)
                    .inspect_err(|e| log::warn!("Ignoring stored custom palette: {}", e))
                    .ok()
            })
            .unwrap_or_else(|| registry::palette(ThemeId::Custom));

        log::debug!("Loaded theme state: theme={}, seed={}", active, seed);

        let mut store = Self {
            storage,
            surface,
            keys,
            active,
            seed,
            custom,
            observers: Vec::new(),
        };
        store.apply();
        store
    }

    /// Register an observer for applied changes.
    pub fn subscribe(&mut self, observer: impl ThemeObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Make `id` the active theme.
    pub fn select_theme(&mut self, id: ThemeId) {
        let previous = self.active;
        self.active = id;
        log::debug!("Selected theme {} (was {})", id, previous);
        self.commit(ThemeEvent::Selected {
            previous,
            current: id,
        });
    }

    /// Advance to the next theme in [ThemeId::ALL] order, wrapping around.
    pub fn cycle_theme(&mut self) -> ThemeId {
        let next = self.active.next();
        self.select_theme(next);
        next
    }

    /// Switch between light mode and the default dark theme.
    pub fn toggle_light_dark(&mut self) -> ThemeId {
        let target = if self.active == ThemeId::Light {
            ThemeId::Default
        } else {
            ThemeId::Light
        };
        self.select_theme(target);
        target
    }

    /// Set a new seed color, re-derive the custom palette and activate it.
    ///
    /// Manual edits to the custom palette are discarded. Malformed seeds are
    /// rejected and leave the state untouched.
    pub fn set_seed_color(&mut self, color: &str) -> ThemeResult<()> {
        let palette = generate_from_seed(color)?;
        self.seed = color.to_string();
        self.custom = palette;
        self.active = ThemeId::Custom;
        log::debug!("Seed color set to {}", color);
        self.commit(ThemeEvent::SeedChanged {
            seed: color.to_string(),
        });
        Ok(())
    }

    /// Overwrite one field of the custom palette and activate it.
    pub fn edit_custom_field(&mut self, field: PaletteField, value: &str) -> ThemeResult<()> {
        self.edit_custom_fields(&PalettePatch::new().with(field, value))
    }

    /// Merge several fields into the custom palette and activate it.
    ///
    /// Other fields keep their values. If any value is not a CSS color
    /// nothing is changed.
    pub fn edit_custom_fields(&mut self, patch: &PalettePatch) -> ThemeResult<()> {
        if let Some((field, value)) = patch.iter().find(|(_, value)| !is_css_color(value)) {
            return Err(ThemeError::invalid_color(field, value));
        }

        let fields = self.custom.merge(patch);
        self.active = ThemeId::Custom;
        log::debug!("Edited custom fields {:?}", fields);
        self.commit(ThemeEvent::CustomFieldsEdited { fields });
        Ok(())
    }

    /// The palette the rendering surface should show.
    pub fn resolve_active_palette(&self) -> Palette {
        match self.active {
            ThemeId::Custom => self.custom.clone(),
            id => registry::palette(id),
        }
    }

    /// The active theme.
    pub fn active_theme(&self) -> ThemeId {
        self.active
    }

    /// The current seed color.
    pub fn seed_color(&self) -> &str {
        &self.seed
    }

    /// The current custom palette, whether or not it is active.
    pub fn custom_palette(&self) -> &Palette {
        &self.custom
    }

    /// The keys state is persisted under.
    pub fn storage_keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The rendering surface.
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Consume the store, returning its storage and surface.
    pub fn into_parts(self) -> (S, R) {
        (self.storage, self.surface)
    }

    fn commit(&mut self, event: ThemeEvent) {
        self.persist();
        self.apply();
        for observer in &mut self.observers {
            observer.on_theme_event(&event);
        }
    }

    fn persist(&mut self) {
        let custom = match self.custom.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to serialize custom palette: {}", e);
                None
            },
        };

        let entries = [
            (&self.keys.theme, Some(self.active.as_str().to_string())),
            (&self.keys.custom_color, Some(self.seed.clone())),
            (&self.keys.custom_theme, custom),
        ];
        for (key, value) in entries {
            let Some(value) = value else { continue };
            if let Err(e) = self.storage.set_item(key, &value) {
                log::warn!("Failed to persist theme state: {}", e);
            }
        }
    }

    fn apply(&mut self) {
        let palette = self.resolve_active_palette();
        apply_palette(&mut self.surface, &palette);
    }
}

fn read_entry<S: ThemeStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read theme state: {}", e);
            None
        },
    }
}
