//! Renderer binding.
//!
//! The sprite core needs exactly one capability from its environment:
//! copying a rectangular region of a sheet texture to a destination
//! rectangle on screen. [`Blit`] captures that seam; [`RaylibBlit`] is the
//! raylib-backed adapter used by the demo driver.

use raylib::prelude::*;

use crate::texturestore::TextureStore;

/// Drawing capability required to put a sprite frame on screen.
///
/// Implementations copy the `src` region of the texture registered under
/// `tex_key` to the `dst` rectangle. Scaling is whatever the two rectangle
/// sizes imply; mirrored sampling is requested through the flip flags.
pub trait Blit {
    fn blit(&mut self, tex_key: &str, src: Rectangle, dst: Rectangle, flip_x: bool, flip_y: bool);
}

/// [`Blit`] adapter over an active raylib draw handle.
///
/// Works with any handle implementing [`RaylibDraw`], so it can be used
/// inside a plain drawing scope or a 2D camera mode.
pub struct RaylibBlit<'a, D> {
    handle: &'a mut D,
    textures: &'a TextureStore,
}

impl<'a, D: RaylibDraw> RaylibBlit<'a, D> {
    pub fn new(handle: &'a mut D, textures: &'a TextureStore) -> Self {
        Self { handle, textures }
    }
}

impl<'a, D: RaylibDraw> Blit for RaylibBlit<'a, D> {
    fn blit(&mut self, tex_key: &str, src: Rectangle, dst: Rectangle, flip_x: bool, flip_y: bool) {
        let Some(tex) = self.textures.get(tex_key) else {
            log::warn!("unknown texture key '{tex_key}', skipping blit");
            return;
        };

        // Negative source dimensions make raylib sample the region mirrored.
        let mut src = src;
        if flip_x {
            src.width = -src.width;
        }
        if flip_y {
            src.height = -src.height;
        }

        self.handle.draw_texture_pro(
            tex,
            src,
            dst,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}
