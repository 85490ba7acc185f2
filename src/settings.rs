use log::warn;
use serde::{Deserialize, Serialize};

use crate::CONFY_APP_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub show_hint: bool,
    pub sky_color: [f32; 3],
    pub sky_rotating_color: [f32; 3],
    pub light_direction: [f32; 3],
    pub ambient: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_hint: true,
            sky_color: [0.55, 0.78, 0.95],
            sky_rotating_color: [0.98, 0.76, 0.55],
            light_direction: [-0.4, -1.0, -0.3],
            ambient: 0.35,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_else(|e| {
            warn!("Failed to load display settings: {e}");
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "display", self) {
            warn!("Failed to save display settings: {e}");
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSettings {
    pub show_about: bool,
    pub show_projects: bool,
    pub show_contact: bool,
    pub show_debug: bool,
}

impl UiSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "ui").unwrap_or_else(|e| {
            warn!("Failed to load ui settings: {e}");
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "ui", self) {
            warn!("Failed to save ui settings: {e}");
        }
    }
}

pub struct Settings {
    pub display: DisplaySettings,
    pub ui: UiSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            ui: UiSettings::load(),
        }
    }
}
