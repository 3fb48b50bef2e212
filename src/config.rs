//! User settings
//!
//! Optional `settings.json` in the platform config directory. Every field has
//! a default, so a partial file (or no file at all) is fine.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.json";

/// Session defaults read at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Speed multiplier at launch; 0 starts paused.
    pub initial_speed: f64,
    /// Body the camera frames at launch.
    pub initial_focus: String,
    pub show_orbits: bool,
    pub show_labels: bool,
    /// Load surface/ring textures; flat catalog colors otherwise.
    pub load_textures: bool,
    pub star_count: usize,
    pub star_seed: u64,
    /// Calendar date at simulated day 0. `None` starts at the current time.
    pub epoch_utc: Option<DateTime<Utc>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_speed: 1.0,
            initial_focus: "sun".to_string(),
            show_orbits: true,
            show_labels: true,
            load_textures: true,
            star_count: 2000,
            star_seed: 0x5EED_50DA,
            epoch_utc: None,
        }
    }
}

/// Reads and writes `settings.json`.
pub struct SettingsStore {
    config_dir: PathBuf,
}

impl SettingsStore {
    /// Resolves the platform-specific config directory:
    /// - macOS: ~/Library/Application Support/bevysolar/
    /// - Linux: ~/.config/bevysolar/
    /// - Windows: %APPDATA%\bevysolar\config\
    pub fn new() -> Result<Self, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(Self::new_in_dir(proj_dirs.config_dir().to_path_buf()))
    }

    /// Store rooted at a specific directory (tests, portable installs).
    pub fn new_in_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Returns Ok(None) when there is no settings file.
    pub fn load(&self) -> Result<Option<Settings>, anyhow::Error> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    pub fn save(&self, settings: &Settings) -> Result<(), anyhow::Error> {
        fs::create_dir_all(&self.config_dir)?;
        let contents = serde_json::to_string_pretty(settings)?;
        fs::write(self.path(), contents)?;
        Ok(())
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", self.path().display());
                settings
            }
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!(
                    "Ignoring unreadable settings file {}: {}",
                    self.path().display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Like `load_or_default`, but writes the defaults out on first launch so
    /// there is a file to edit. An unreadable file is left alone.
    pub fn load_or_init(&self) -> Settings {
        let existed = self.path().exists();
        let settings = self.load_or_default();
        if !existed {
            match self.save(&settings) {
                Ok(()) => info!("Wrote default settings to {}", self.path().display()),
                Err(e) => warn!("Could not write {}: {}", self.path().display(), e),
            }
        }
        settings
    }
}

/// Settings from the platform config directory, or defaults.
pub fn load_settings() -> Settings {
    match SettingsStore::new() {
        Ok(store) => store.load_or_init(),
        Err(e) => {
            warn!("Using default settings: {}", e);
            Settings::default()
        }
    }
}
