mod common;

use std::cell::Cell;
use std::rc::Rc;
use common::{ setup, MockRoot };
use theme_starter::theme::{
    install,
    FileStorage,
    KeyValueStorage,
    MemoryStorage,
    StoreOptions,
    Theme,
    ThemeStore,
    DEFAULT_STORE_ID,
    THEME_ATTRIBUTE,
};
use theme_starter::ThemeError;

#[test]
fn test_set_theme_updates_state_and_attribute() {
    setup();
    let store = ThemeStore::new(MemoryStorage::new());
    let root = MockRoot::new();
    install(&store, root.clone());

    for theme in [Theme::Dark, Theme::Light, Theme::Dark] {
        store.set_theme(theme);
        assert_eq!(store.current(), theme);
        assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn test_toggle_twice_restores_state() {
    setup();
    for start in Theme::all() {
        let store = ThemeStore::in_memory();
        store.set_theme(*start);

        store.toggle_theme();
        assert_ne!(store.current(), *start);
        store.toggle_theme();

        assert_eq!(store.current(), *start);
    }
}

#[test]
fn test_is_dark_consistent_inside_observer() {
    setup();
    let store = ThemeStore::in_memory();
    let reader = store.clone();
    let consistent = Rc::new(Cell::new(true));
    let flag = Rc::clone(&consistent);

    store.subscribe(move |state| {
        let expected = state.current == Theme::Dark;
        if state.is_dark() != expected || reader.is_dark() != expected {
            flag.set(false);
        }
    });
    store.toggle_theme();
    store.toggle_theme();
    store.set_theme(Theme::Dark);

    assert!(consistent.get());
    assert!(store.is_dark());
}

#[test]
fn test_reload_restores_persisted_theme() {
    setup();
    let storage = MemoryStorage::new();
    ThemeStore::new(storage.clone()).set_theme(Theme::Dark);

    let reloaded = ThemeStore::new(storage);

    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn test_reload_from_file_storage() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    ThemeStore::new(FileStorage::new(&path)).toggle_theme();

    let reloaded = ThemeStore::new(FileStorage::new(&path));

    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn test_fresh_storage_defaults_to_light() {
    setup();
    let store = ThemeStore::new(MemoryStorage::new());
    assert_eq!(store.current(), Theme::Light);
    assert!(!store.state().is_dark());
}

#[test]
fn test_corrupt_payload_falls_back_to_default() {
    setup();
    let storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORE_ID, r#"{"current":"purple"}"#).unwrap();

    let store = ThemeStore::new(storage.clone());
    assert_eq!(store.current(), Theme::Light);

    store.set_theme(Theme::Dark);
    assert_eq!(ThemeStore::new(storage).current(), Theme::Dark);
}

#[test]
fn test_plugin_fires_once_at_install_and_once_per_mutation() {
    setup();
    let store = ThemeStore::new(MemoryStorage::new());
    let root = MockRoot::new();

    install(&store, root.clone());
    assert_eq!(root.write_count(), 1);

    store.set_theme(Theme::Light);
    store.set_theme(Theme::Light);
    store.toggle_theme();

    assert_eq!(root.values(), vec!["light", "light", "light", "dark"]);
}

#[test]
fn test_invalid_theme_string_rejected() {
    setup();
    let store = ThemeStore::new(MemoryStorage::new());
    let root = MockRoot::new();
    install(&store, root.clone());

    assert_eq!(store.set_theme_str("DARK"), Err(ThemeError::InvalidTheme("DARK".to_string())));
    assert_eq!(root.write_count(), 1);

    assert_eq!(store.set_theme_str("dark"), Ok(()));
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
}

#[test]
fn test_same_theme_is_written_again() {
    setup();
    let storage = MemoryStorage::new();
    let store = ThemeStore::new(storage.clone());
    storage.set_item(DEFAULT_STORE_ID, "stale").unwrap();

    store.set_theme(store.current());

    assert_eq!(
        storage.get_item(DEFAULT_STORE_ID).unwrap().as_deref(),
        Some(r#"{"current":"light"}"#)
    );
}

#[test]
fn test_hydrating_client_applies_persisted_theme_after_mount() {
    setup();
    let storage = MemoryStorage::new();
    ThemeStore::new(storage.clone()).set_theme(Theme::Dark);

    let options = StoreOptions { restore: false, ..StoreOptions::default() };
    let store = ThemeStore::with_options(options, storage.clone());
    let root = MockRoot::new();
    install(&store, root.clone());

    // First render matches the server markup.
    assert_eq!(store.current(), Theme::Light);

    assert!(store.reload());
    assert_eq!(store.current(), Theme::Dark);
    assert_eq!(root.values(), vec!["light", "dark"]);
    assert_eq!(
        storage.get_item(DEFAULT_STORE_ID).unwrap().as_deref(),
        Some(r#"{"current":"dark"}"#)
    );
}
