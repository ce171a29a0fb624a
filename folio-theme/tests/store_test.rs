//! Tests for loading, persisting and applying theme state

use folio_theme::config::ThemeConfig;
use folio_theme::derive::TEXT_ON_DARK;
use folio_theme::error::{ThemeError, ThemeResult};
use folio_theme::id::ThemeId;
use folio_theme::manager::ThemeStore;
use folio_theme::palette::{Palette, PaletteField};
use folio_theme::registry;
use folio_theme::storage::{FileStorage, MemoryStorage, StorageKeys, ThemeStorage};
use folio_theme::surface::StyleVariables;

/// Storage that is disabled: every access fails.
struct DisabledStorage;

impl ThemeStorage for DisabledStorage {
    fn get_item(&self, key: &str) -> ThemeResult<Option<String>> {
        Err(ThemeError::storage(key, "storage disabled"))
    }

    fn set_item(&mut self, key: &str, _value: &str) -> ThemeResult<()> {
        Err(ThemeError::storage(key, "quota exceeded"))
    }

    fn remove_item(&mut self, key: &str) -> ThemeResult<()> {
        Err(ThemeError::storage(key, "storage disabled"))
    }
}

#[test]
fn test_state_survives_reload() {
    let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
    store.set_seed_color("#0EA5E9").unwrap();
    store.edit_custom_field(PaletteField::Border, "rgba(1, 2, 3, 0.4)").unwrap();
    let custom = store.custom_palette().clone();

    let (storage, _) = store.into_parts();
    let reloaded = ThemeStore::new(storage, StyleVariables::new());

    assert_eq!(reloaded.active_theme(), ThemeId::Custom);
    assert_eq!(reloaded.seed_color(), "#0EA5E9");
    assert_eq!(reloaded.custom_palette(), &custom);
    assert_eq!(reloaded.surface().get("--border"), Some("rgba(1, 2, 3, 0.4)"));
}

#[test]
fn test_persists_three_keys() {
    let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
    store.select_theme(ThemeId::Royal);

    let storage = store.storage();
    assert_eq!(storage.len(), 3);
    assert_eq!(storage.get_item("portfolio_theme").unwrap().as_deref(), Some("royal"));
    assert_eq!(
        storage.get_item("portfolio_custom_color").unwrap().as_deref(),
        Some(registry::DEFAULT_SEED_COLOR)
    );
    let stored = storage.get_item("portfolio_custom_theme").unwrap().unwrap();
    assert_eq!(Palette::from_json(&stored).unwrap(), registry::palette(ThemeId::Custom));
}

#[test]
fn test_corrupt_palette_falls_back_per_key() {
    let storage = MemoryStorage::with_items([
        ("portfolio_theme", "custom"),
        ("portfolio_custom_color", "#10B981"),
        ("portfolio_custom_theme", "{ this is not json"),
    ]);
    let store = ThemeStore::new(storage, StyleVariables::new());

    assert_eq!(store.active_theme(), ThemeId::Custom);
    assert_eq!(store.seed_color(), "#10B981");
    assert_eq!(store.custom_palette(), &registry::palette(ThemeId::Custom));
    assert_eq!(store.resolve_active_palette(), registry::palette(ThemeId::Custom));
}

#[test]
fn test_incomplete_palette_falls_back() {
    let storage = MemoryStorage::with_items([(
        "portfolio_custom_theme",
        r##"{"primary": "#112233", "secondary": ""}"##,
    )]);
    let store = ThemeStore::new(storage, StyleVariables::new());
    assert_eq!(store.custom_palette(), &registry::palette(ThemeId::Custom));
}

#[test]
fn test_non_color_palette_falls_back() {
    let mut junk = registry::palette(ThemeId::Custom);
    for field in PaletteField::ALL {
        junk.set(field, "x");
    }
    junk.primary = "not-a-color".to_string();
    let storage = MemoryStorage::with_items([
        ("portfolio_theme".to_string(), "custom".to_string()),
        ("portfolio_custom_theme".to_string(), junk.to_json().unwrap()),
    ]);
    let store = ThemeStore::new(storage, StyleVariables::new());

    assert_eq!(store.active_theme(), ThemeId::Custom);
    assert_eq!(store.custom_palette(), &registry::palette(ThemeId::Custom));
    assert_eq!(
        store.surface().get("--primary"),
        Some(registry::palette(ThemeId::Custom).primary.as_str())
    );
}

#[test]
fn test_unknown_theme_and_bad_seed_fall_back() {
    let storage = MemoryStorage::with_items([
        ("portfolio_theme", "vaporwave"),
        ("portfolio_custom_color", "purple"),
    ]);
    let store = ThemeStore::new(storage, StyleVariables::new());
    assert_eq!(store.active_theme(), ThemeId::Default);
    assert_eq!(store.seed_color(), registry::DEFAULT_SEED_COLOR);
    assert_eq!(store.resolve_active_palette(), registry::palette(ThemeId::Default));
}

#[test]
fn test_disabled_storage_still_applies() {
    let mut store = ThemeStore::new(DisabledStorage, StyleVariables::new());
    assert_eq!(store.active_theme(), ThemeId::Default);

    store.select_theme(ThemeId::Sunset);
    assert_eq!(store.active_theme(), ThemeId::Sunset);
    assert_eq!(store.surface().get("--primary"), Some("#F97316"));

    store.set_seed_color("#FF0000").unwrap();
    assert_eq!(store.surface().get("--text-main"), Some(TEXT_ON_DARK));
}

#[test]
fn test_surface_gets_nine_writes_per_change() {
    let mut store = ThemeStore::new(MemoryStorage::new(), StyleVariables::new());
    assert_eq!(store.surface().writes(), 9);
    store.select_theme(ThemeId::Mint);
    store.edit_custom_field(PaletteField::Nav, "#000").unwrap();
    assert_eq!(store.surface().writes(), 27);
    assert_eq!(store.surface().len(), 9);
}

#[test]
fn test_config_defaults_and_keys() {
    let config = ThemeConfig::new()
        .with_default_theme(ThemeId::Midnight)
        .with_default_seed("#6366F1")
        .with_storage_keys(StorageKeys {
            theme: "t".into(),
            custom_color: "c".into(),
            custom_theme: "p".into(),
        });

    let mut store = ThemeStore::with_config(MemoryStorage::new(), StyleVariables::new(), &config);
    assert_eq!(store.active_theme(), ThemeId::Midnight);
    assert_eq!(store.seed_color(), "#6366F1");

    store.select_theme(ThemeId::Solar);
    assert_eq!(store.storage().get_item("t").unwrap().as_deref(), Some("solar"));
    assert_eq!(store.storage().get_item("portfolio_theme").unwrap(), None);
}

#[test]
fn test_file_storage_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = ThemeConfig::new().with_storage_path(dir.path().join("theme.json"));

    {
        let mut store = ThemeStore::with_config(config.open_storage(), StyleVariables::new(), &config);
        store.select_theme(ThemeId::Cherry);
    }

    let store = ThemeStore::with_config(config.open_storage(), StyleVariables::new(), &config);
    assert_eq!(store.active_theme(), ThemeId::Cherry);
    assert_eq!(store.surface().get("--accent"), Some("#F43F5E"));

    let file = FileStorage::open(dir.path().join("theme.json"));
    assert_eq!(file.get_item("portfolio_theme").unwrap().as_deref(), Some("cherry"));
}
