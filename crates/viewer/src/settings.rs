//! # Viewer Settings Module
//!
//! Manages persistent viewer settings for the Vitrine showcase.
//!
//! ## Settings Persistence
//! - **Location**: `~/.vitrine/settings.json`
//! - **Format**: JSON with pretty formatting
//! - **Default Fallback**: If loading fails or no file exists, defaults are
//!   used and a fresh file is written so the knobs are discoverable
//!
//! Loading happens before the App is built, so status goes to stdout/stderr
//! rather than the log.

use bevy::prelude::*;
use bevy::window::PresentMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global viewer settings resource
///
/// Persisted to `~/.vitrine/settings.json`
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    /// Sweep progress per wheel line
    pub scroll_sensitivity: f32,

    /// Flip the scroll direction
    pub invert_scroll: bool,

    /// VSync on (Fifo) or off (AutoNoVsync)
    pub vsync: bool,

    /// Render every part as a colored cuboid even when it has a model
    pub force_placeholders: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            scroll_sensitivity: 0.03,
            invert_scroll: false,
            vsync: true,
            force_placeholders: false,
        }
    }
}

impl ViewerSettings {
    /// Get the settings file path (~/.vitrine/settings.json)
    fn settings_path() -> Option<PathBuf> {
        if let Some(home) = dirs::home_dir() {
            let settings_dir = home.join(".vitrine");
            Some(settings_dir.join("settings.json"))
        } else {
            None
        }
    }

    /// Load settings from file, or create the default file
    pub fn load_or_init() -> Self {
        if let Some(path) = Self::settings_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(content) => match serde_json::from_str::<ViewerSettings>(&content) {
                        Ok(settings) => {
                            println!("✅ Loaded viewer settings from {:?}", path);
                            return settings;
                        }
                        Err(e) => {
                            eprintln!("⚠ Failed to parse settings file: {}. Using defaults.", e);
                        }
                    },
                    Err(e) => {
                        eprintln!("⚠ Failed to read settings file: {}. Using defaults.", e);
                    }
                }
            } else {
                println!("ℹ No settings file found. Creating default settings.");
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    eprintln!("⚠ Could not write default settings: {}", e);
                }
                return settings;
            }
        } else {
            eprintln!("⚠ Could not determine home directory. Using default settings.");
        }

        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let path = Self::settings_path()
            .ok_or_else(|| "Could not determine home directory".to_string())?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write settings file: {}", e))?;

        println!("✅ Saved viewer settings to {:?}", path);
        Ok(())
    }

    /// Present mode for the primary window
    pub fn present_mode(&self) -> PresentMode {
        if self.vsync {
            PresentMode::Fifo
        } else {
            PresentMode::AutoNoVsync
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
