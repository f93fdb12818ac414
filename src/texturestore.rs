//! Sheet texture registry.
//!
//! Owns the decoded GPU textures and hands out references by string key.
//! Sprites only carry keys, so many sprites can share one sheet.

use std::collections::HashMap;

use log::info;
use raylib::prelude::*;

/// Registry of loaded sheet textures keyed by name.
pub struct TextureStore {
    map: HashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Load a texture from `path` and register it under `key`.
    ///
    /// Point filtering is applied so scaled-up pixel art stays crisp.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: &str,
        path: &str,
    ) -> Result<(), String> {
        let mut texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture '{path}': {e}"))?;
        texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
        info!("Loaded texture '{key}' from {path}");
        self.map.insert(key.to_string(), texture);
        Ok(())
    }

    /// Register an already decoded texture under `key`.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
