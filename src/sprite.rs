//! Animated sprite playback.
//!
//! An [`AnimatedSprite`] owns a sheet texture key, the pixel origins of the
//! sheet's frames, a set of named animation definitions, and its mutable
//! playback state. The owning loop calls [`update`](AnimatedSprite::update)
//! with the elapsed seconds and then [`draw`](AnimatedSprite::draw) once per
//! tick.
//!
//! Playback moves through three states: after
//! [`set_current_anim`](AnimatedSprite::set_current_anim) no frame is
//! selected yet; the first `update` selects one and sequences start
//! advancing; a non-looping sequence that reaches its last frame holds it
//! forever, while a looping one wraps straight back to the start.

use raylib::prelude::{Rectangle, Vector2};

use crate::anim::{AnimationDef, AnimationSet};
use crate::error::SpriteError;
use crate::render::Blit;

/// A sprite-sheet character with named animations and playback state.
pub struct AnimatedSprite {
    tex_key: String,
    anims: AnimationSet,
    frames: Vec<Vector2>,
    frame_size: f32,
    pos: Vector2,
    scale: f32,
    flip_x: bool,
    flip_y: bool,
    current_anim: Option<String>,
    seq_index: usize,
    timer: f32,
    current_frame: Option<usize>,
    current_frame_pos: Option<Vector2>,
}

impl AnimatedSprite {
    /// Build a sprite from a sheet texture key, its animation set, and the
    /// frame origins produced by
    /// [`SheetGrid::frame_positions`](crate::sheet::SheetGrid::frame_positions).
    ///
    /// Every frame index referenced by `anims` must fall inside `frames`;
    /// violations are reported as [`SpriteError::InvalidDefinition`]. The
    /// set is not mutable afterwards, so playback can index the sequence
    /// without re-checking.
    pub fn new(
        tex_key: impl Into<String>,
        anims: AnimationSet,
        frames: Vec<Vector2>,
        frame_size: f32,
        pos: Vector2,
    ) -> Result<Self, SpriteError> {
        anims.validate(frames.len())?;
        Ok(Self {
            tex_key: tex_key.into(),
            anims,
            frames,
            frame_size,
            pos,
            scale: 1.0,
            flip_x: false,
            flip_y: false,
            current_anim: None,
            seq_index: 0,
            timer: 0.0,
            current_frame: None,
            current_frame_pos: None,
        })
    }

    /// Uniform destination scale factor (default 1.0).
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_flip_x(mut self, flip: bool) -> Self {
        self.flip_x = flip;
        self
    }

    pub fn with_flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    pub fn pos(&self) -> Vector2 {
        self.pos
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Name of the animation currently selected, if any.
    pub fn current_anim(&self) -> Option<&str> {
        self.current_anim.as_deref()
    }

    /// Sheet frame index shown by the last update, if one is selected yet.
    pub fn current_frame(&self) -> Option<usize> {
        self.current_frame
    }

    pub fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }

    pub fn set_flip_y(&mut self, flip: bool) {
        self.flip_y = flip;
    }

    /// Move the sprite to `pos`.
    ///
    /// Rejects non-finite coordinates with [`SpriteError::InvalidArgument`];
    /// the previous position is kept on failure.
    pub fn set_pos(&mut self, pos: Vector2) -> Result<(), SpriteError> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return Err(SpriteError::InvalidArgument { x: pos.x, y: pos.y });
        }
        self.pos = pos;
        Ok(())
    }

    /// Switch to the animation registered under `name`.
    ///
    /// Fails with [`SpriteError::UnknownAnimation`] if the name is not in
    /// the set; playback state is untouched in that case. On success the
    /// timer and sequence cursor reset and the current frame is cleared, so
    /// the next [`update`](Self::update) re-initializes playback.
    pub fn set_current_anim(&mut self, name: &str) -> Result<(), SpriteError> {
        if !self.anims.contains(name) {
            return Err(SpriteError::UnknownAnimation(name.to_string()));
        }
        self.current_anim = Some(name.to_string());
        self.seq_index = 0;
        self.timer = 0.0;
        self.current_frame = None;
        self.current_frame_pos = None;
        Ok(())
    }

    /// Advance playback by `dt` seconds.
    ///
    /// A static pose pins its frame and ignores timing entirely. A sequence
    /// accumulates `dt` and advances one frame per elapsed frame duration,
    /// carrying the remainder forward so timing stays accurate under
    /// variable tick rates. A single large `dt` (after a stall, say)
    /// advances as many frames as the accumulated time covers. Looping
    /// sequences wrap from the last frame straight to the first; non-looping
    /// ones hold the last frame and stop accumulating.
    ///
    /// Calling `update` before any animation has been selected is a no-op.
    pub fn update(&mut self, dt: f32) {
        let Some(name) = self.current_anim.as_deref() else {
            return;
        };
        let Some(def) = self.anims.get(name) else {
            // Unreachable: set_current_anim only accepts registered names.
            return;
        };
        match def {
            AnimationDef::StaticPose(frame) => {
                self.current_frame = Some(*frame);
                self.current_frame_pos = Some(self.frames[*frame]);
            }
            AnimationDef::Sequence { frames, fps, looped } => {
                let duration_per_frame = 1.0 / fps;
                self.timer += dt;

                if self.current_frame.is_none() {
                    self.seq_index = 0;
                }

                while self.timer >= duration_per_frame {
                    self.timer -= duration_per_frame;
                    if self.seq_index + 1 < frames.len() {
                        self.seq_index += 1;
                    } else if *looped {
                        self.seq_index = 0;
                    } else {
                        // Hold the last frame; drop the residue so the timer
                        // does not grow without bound.
                        self.timer = 0.0;
                        break;
                    }
                }

                let sheet_frame = frames[self.seq_index];
                self.current_frame = Some(sheet_frame);
                self.current_frame_pos = Some(self.frames[sheet_frame]);
            }
        }
    }

    /// Draw the current frame at the sprite's position, scaled by its scale
    /// factor.
    ///
    /// Fails with [`SpriteError::NotInitialized`] when no frame has been
    /// selected yet, i.e. `update` has not run since the last animation
    /// switch.
    pub fn draw(&self, blit: &mut impl Blit) -> Result<(), SpriteError> {
        let origin = self.current_frame_pos.ok_or(SpriteError::NotInitialized)?;
        let src = Rectangle {
            x: origin.x,
            y: origin.y,
            width: self.frame_size,
            height: self.frame_size,
        };
        let dst = Rectangle {
            x: self.pos.x,
            y: self.pos.y,
            width: self.frame_size * self.scale,
            height: self.frame_size * self.scale,
        };
        blit.blit(&self.tex_key, src, dst, self.flip_x, self.flip_y);
        Ok(())
    }
}
