#![warn(missing_docs)]

//! # Folio Theming System
//!
//! The theme engine of the folio portfolio site: fifteen built-in palettes, a
//! custom palette derived from a single seed color, and a state store that
//! persists the user's choice and pushes the active palette onto the
//! rendering surface.
//!
//! ## Overview
//!
//! The theming system consists of several key components:
//!
//! - **[Palette](palette::Palette)**: The nine colors applied to the page
//! - **[ThemeId](id::ThemeId)**: Closed set of theme identifiers
//! - **[registry]**: Fixed palettes for every built-in theme
//! - **[derive]**: Seed color to full palette derivation
//! - **[ThemeStore](manager::ThemeStore)**: Active state, persistence and application
//! - **[ThemeConfig](config::ThemeConfig)**: Defaults from environment variables and files
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//! use folio_theme::manager::ThemeStore;
//! use folio_theme::storage::MemoryStorage;
//! use folio_theme::surface::StyleVariables;
//!
//! let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
//! store.select_theme(ThemeId::Cyberpunk);
//!
//! assert_eq!(store.surface().get("--primary"), Some("#00FF9D"));
//! assert_eq!(
//!     store.storage_keys().theme,
//!     "portfolio_theme",
//! );
//! ```
//!
//! ## Custom Themes
//!
//! Setting a seed color derives and activates a complete dark palette;
//! individual fields can then be fine-tuned without re-deriving the rest:
//!
//! ```rust
//! use folio_theme::manager::ThemeStore;
//! use folio_theme::palette::PaletteField;
//! use folio_theme::storage::MemoryStorage;
//! use folio_theme::surface::StyleVariables;
//!
//! let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
//! store.set_seed_color("#F97316").unwrap();
//! store.edit_custom_field(PaletteField::Text, "#FFFFFF").unwrap();
//! assert_eq!(store.custom_palette().primary, "#F97316");
//! ```
//!
//! ## Persistence
//!
//! State lives in three storage entries (theme, seed, custom palette). Reads
//! fall back to defaults per entry; failed writes are logged through the
//! `log` facade and never surface as errors.

/// Contains hex and HSL color conversions.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains seed color palette derivation.
pub mod derive;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [id::ThemeId] enum.
pub mod id;
/// Contains the [manager::ThemeStore] state store.
pub mod manager;
/// Contains theme change observers.
pub mod observer;
/// Contains the [palette::Palette] struct.
pub mod palette;
/// Contains the built-in palette table.
pub mod registry;
/// Contains durable storage backends.
pub mod storage;
/// Contains rendering surface bindings.
pub mod surface;
