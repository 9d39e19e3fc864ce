use serde::{Deserialize, Serialize};

use crate::storage::Storage;

pub const SETTINGS_KEY: &str = "stats-user-settings";
// Earlier releases kept the same payload under a "session" key.
pub const LEGACY_SESSION_KEY: &str = "stats-user-session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub theme: Theme,
}

/// Display name and theme, persisted through the storage port.
///
/// Storage is read once at construction; a missing or unparseable entry
/// falls back to the defaults. Every set re-serializes immediately.
pub struct SettingsStore<S: Storage> {
    storage: S,
    settings: Settings,
}

impl<S: Storage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        let settings = load_settings(&storage);
        Self { storage, settings }
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Both attributes are replaced together; no partial update.
    pub fn set_attributes(&mut self, name: impl Into<String>, theme: Theme) {
        self.settings = Settings {
            name: name.into(),
            theme,
        };
        if let Ok(json) = serde_json::to_string(&self.settings) {
            self.storage.set_item(SETTINGS_KEY, &json);
        }
    }

    pub fn tooltip_fill(&self) -> &'static str {
        match self.settings.theme {
            Theme::Light => "#FFFFFF",
            Theme::Dark => "#333333",
        }
    }

    pub fn tooltip_text(&self) -> &'static str {
        match self.settings.theme {
            Theme::Light => "#333333",
            Theme::Dark => "#FFFFFF",
        }
    }
}

fn load_settings(storage: &impl Storage) -> Settings {
    for key in [SETTINGS_KEY, LEGACY_SESSION_KEY] {
        if let Some(raw) = storage.get_item(key) {
            if let Ok(settings) = serde_json::from_str::<Settings>(&raw) {
                return settings;
            }
        }
    }
    Settings::default()
}
