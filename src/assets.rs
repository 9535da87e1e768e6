//! Best-effort resource loading
//!
//! Every asset is optional: a missing font falls back to the built-in one,
//! a missing key image falls back to a text label, and the game never
//! refuses to start over files.

use std::collections::HashMap;

use macroquad::text::{load_ttf_font, Font};
use macroquad::texture::{load_texture, Texture2D};

use crate::consts::{FONT_PATH, KEYS_DIR};

/// Keyboard key images shown on the menu and instruction screens
pub const KEY_NAMES: &[&str] = &[
    "up", "left", "right", "space", "shift", "alt", "s", "esc", "enter",
];

/// Loaded resources shared by every screen
pub struct Assets {
    pub font: Option<Font>,
    keys: HashMap<&'static str, Texture2D>,
}

impl Assets {
    pub async fn load() -> Self {
        let font = match load_ttf_font(FONT_PATH).await {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("Font {} unavailable, using default: {:?}", FONT_PATH, err);
                None
            }
        };

        let mut keys = HashMap::new();
        for name in KEY_NAMES {
            let path = format!("{}/{}.png", KEYS_DIR, name);
            match load_texture(&path).await {
                Ok(texture) => {
                    keys.insert(*name, texture);
                }
                Err(err) => log::warn!("Key image {} unavailable: {:?}", path, err),
            }
        }
        log::info!("Loaded {}/{} key images", keys.len(), KEY_NAMES.len());

        Self { font, keys }
    }

    /// Image for a key name, if it loaded.
    pub fn key(&self, name: &str) -> Option<&Texture2D> {
        self.keys.get(name)
    }
}
