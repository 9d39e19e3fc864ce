use std::cell::Cell;

use puck_terminal::api_client::Envelope;
use puck_terminal::player_cache::PlayerNameCache;
use puck_terminal::settings_store::{LEGACY_SESSION_KEY, SETTINGS_KEY, SettingsStore, Theme};
use puck_terminal::storage::{FileStorage, MemoryStorage, Storage};

#[test]
fn settings_roundtrip_through_storage() {
    let storage = MemoryStorage::new();
    {
        let mut store = SettingsStore::new(&storage);
        store.set_attributes("Jane", Theme::Dark);
    }

    // A fresh store over the same storage reconstructs the settings.
    let store = SettingsStore::new(&storage);
    assert_eq!(store.name(), "Jane");
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn missing_entry_falls_back_to_defaults() {
    let store = SettingsStore::new(MemoryStorage::new());
    assert_eq!(store.name(), "");
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn corrupt_entry_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set_item(SETTINGS_KEY, "{not json");
    let store = SettingsStore::new(storage);
    assert_eq!(store.name(), "");
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn legacy_session_key_is_honored() {
    let storage = MemoryStorage::new();
    storage.set_item(LEGACY_SESSION_KEY, r#"{"name":"Old","theme":"dark"}"#);
    let store = SettingsStore::new(storage);
    assert_eq!(store.name(), "Old");
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn tooltip_colors_follow_the_theme() {
    let storage = MemoryStorage::new();
    let mut store = SettingsStore::new(&storage);
    assert_eq!(store.tooltip_fill(), "#FFFFFF");
    assert_eq!(store.tooltip_text(), "#333333");

    store.set_attributes("", Theme::Dark);
    assert_eq!(store.tooltip_fill(), "#333333");
    assert_eq!(store.tooltip_text(), "#FFFFFF");
}

#[test]
fn file_storage_survives_a_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    {
        let storage = FileStorage::open(Some(path.clone()));
        let mut store = SettingsStore::new(storage);
        store.set_attributes("Jane", Theme::Dark);
    }

    let storage = FileStorage::open(Some(path));
    let store = SettingsStore::new(storage);
    assert_eq!(store.name(), "Jane");
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn file_storage_ignores_a_corrupt_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "][").expect("write corrupt file");

    let storage = FileStorage::open(Some(path));
    assert_eq!(storage.get_item(SETTINGS_KEY), None);
}

#[test]
fn player_cache_fetches_once() {
    let mut cache = PlayerNameCache::new();
    let calls = Cell::new(0);
    let fetch = || {
        calls.set(calls.get() + 1);
        Envelope::ok(vec!["Ovechkin, Alex".to_string(), "Crosby, Sidney".to_string()])
    };

    let first = cache.fetch_players(fetch);
    assert_eq!(first.len(), 2);
    assert!(cache.is_loaded());

    let second = cache.fetch_players(|| {
        calls.set(calls.get() + 1);
        Envelope::ok(vec!["someone else".to_string()])
    });
    assert_eq!(second, first);
    assert_eq!(calls.get(), 1);
}

#[test]
fn clear_cache_forces_a_refetch() {
    let mut cache = PlayerNameCache::new();
    let calls = Cell::new(0);

    cache.fetch_players(|| {
        calls.set(calls.get() + 1);
        Envelope::ok(vec!["a".to_string()])
    });
    cache.clear_cache();
    assert!(!cache.is_loaded());
    assert!(cache.players().is_empty());

    cache.fetch_players(|| {
        calls.set(calls.get() + 1);
        Envelope::ok(vec!["b".to_string()])
    });
    assert_eq!(calls.get(), 2);
    assert_eq!(cache.players(), ["b".to_string()]);
}

#[test]
fn failed_fetch_leaves_cache_unloaded() {
    let mut cache = PlayerNameCache::new();
    let players = cache.fetch_players(|| Envelope::err("backend down"));

    assert!(players.is_empty());
    assert!(!cache.is_loaded());

    // The next call goes back to the network and can succeed.
    let players = cache.fetch_players(|| Envelope::ok(vec!["a".to_string()]));
    assert_eq!(players, ["a".to_string()]);
    assert!(cache.is_loaded());
}
