//! Galop library.
//!
//! A small sprite-sheet animation engine: slice a sheet into a grid of
//! frames, describe named animations over those frames, and drive per-sprite
//! playback from a caller-owned tick loop.
//!
//! Modules overview:
//! - [`sheet`] – frame grid indexing for uniform sprite sheets
//! - [`anim`] – animation definitions and named sets, JSON loadable
//! - [`sprite`] – per-sprite playback state machine (update/draw)
//! - [`render`] – the blit seam between the core and a drawing backend
//! - [`texturestore`] – registry of loaded sheet textures
//! - [`clock`] – tick timing, time scale, and the slow-frame gate
//! - [`layout`] – fit-to-window scaling for a fixed design resolution
//! - [`config`] – demo driver settings from an INI file
//! - [`error`] – error types shared by the above

pub mod anim;
pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod sheet;
pub mod sprite;
pub mod texturestore;
