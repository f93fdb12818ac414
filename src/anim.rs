//! Animation definitions.
//!
//! An animation is either a single fixed sheet frame (a pose) or an ordered
//! sequence of sheet frame indices played back at a fixed rate. Definitions
//! are immutable data; playback state lives on the sprite that uses them.
//!
//! The JSON shape keeps poses as bare numbers and sequences as records, so a
//! set reads naturally:
//!
//! ```json
//! { "idle": 30, "attack": { "frames": [0, 1, 2], "fps": 24.0, "looped": true } }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

/// A named animation: a fixed pose or a timed frame sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimationDef {
    /// A single sheet frame index, held indefinitely. No timing applies.
    StaticPose(usize),
    /// An ordered run of sheet frame indices.
    Sequence {
        /// Sheet frame indices, in playback order.
        frames: Vec<usize>,
        /// Playback speed in frames per second.
        fps: f32,
        /// Whether playback restarts after the last frame.
        looped: bool,
    },
}

/// Registry of animation definitions keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationSet {
    anims: FxHashMap<String, AnimationDef>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one under `name`.
    pub fn insert(&mut self, name: impl Into<String>, def: AnimationDef) {
        self.anims.insert(name.into(), def);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, def: AnimationDef) -> Self {
        self.insert(name, def);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDef> {
        self.anims.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.anims.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.anims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anims.is_empty()
    }

    /// Parse a set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SpriteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the set to JSON text.
    pub fn to_json_string(&self) -> Result<String, SpriteError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every definition against a frame sequence of `sheet_frames`
    /// entries.
    ///
    /// Rejects out-of-range frame indices, empty sequences, and
    /// non-positive or non-finite playback rates.
    pub fn validate(&self, sheet_frames: usize) -> Result<(), SpriteError> {
        for (name, def) in &self.anims {
            match def {
                AnimationDef::StaticPose(frame) => {
                    if *frame >= sheet_frames {
                        return Err(SpriteError::InvalidDefinition {
                            name: name.clone(),
                            reason: format!(
                                "frame index {frame} out of range (sheet has {sheet_frames} frames)"
                            ),
                        });
                    }
                }
                AnimationDef::Sequence { frames, fps, .. } => {
                    if frames.is_empty() {
                        return Err(SpriteError::InvalidDefinition {
                            name: name.clone(),
                            reason: "sequence has no frames".to_string(),
                        });
                    }
                    if !(*fps > 0.0 && fps.is_finite()) {
                        return Err(SpriteError::InvalidDefinition {
                            name: name.clone(),
                            reason: format!("fps must be a positive number, got {fps}"),
                        });
                    }
                    if let Some(frame) = frames.iter().find(|f| **f >= sheet_frames) {
                        return Err(SpriteError::InvalidDefinition {
                            name: name.clone(),
                            reason: format!(
                                "frame index {frame} out of range (sheet has {sheet_frames} frames)"
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_parses_as_static_pose() {
        let set = AnimationSet::from_json_str(r#"{"idle": 30}"#).unwrap();
        assert_eq!(set.get("idle"), Some(&AnimationDef::StaticPose(30)));
    }

    #[test]
    fn record_parses_as_sequence() {
        let set = AnimationSet::from_json_str(
            r#"{"attack": {"frames": [0, 1, 2], "fps": 24.0, "looped": true}}"#,
        )
        .unwrap();
        assert_eq!(
            set.get("attack"),
            Some(&AnimationDef::Sequence {
                frames: vec![0, 1, 2],
                fps: 24.0,
                looped: true,
            })
        );
    }

    #[test]
    fn set_round_trips_through_json() {
        let set = AnimationSet::new()
            .with("idle", AnimationDef::StaticPose(30))
            .with(
                "walk",
                AnimationDef::Sequence {
                    frames: vec![3, 4, 5, 4],
                    fps: 12.0,
                    looped: false,
                },
            );
        let json = set.to_json_string().unwrap();
        let back = AnimationSet::from_json_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = AnimationSet::from_json_str(r#"{"idle": "#).unwrap_err();
        assert!(matches!(err, SpriteError::MalformedSet(_)));
    }

    #[test]
    fn validate_accepts_in_range_definitions() {
        let set = AnimationSet::new()
            .with("idle", AnimationDef::StaticPose(3))
            .with(
                "run",
                AnimationDef::Sequence {
                    frames: vec![0, 1, 2, 3],
                    fps: 10.0,
                    looped: true,
                },
            );
        assert!(set.validate(4).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_pose() {
        let set = AnimationSet::new().with("idle", AnimationDef::StaticPose(4));
        let err = set.validate(4).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidDefinition { name, .. } if name == "idle"));
    }

    #[test]
    fn validate_rejects_out_of_range_sequence_frame() {
        let set = AnimationSet::new().with(
            "run",
            AnimationDef::Sequence {
                frames: vec![0, 7],
                fps: 10.0,
                looped: false,
            },
        );
        assert!(set.validate(4).is_err());
    }

    #[test]
    fn validate_rejects_empty_sequence() {
        let set = AnimationSet::new().with(
            "run",
            AnimationDef::Sequence {
                frames: vec![],
                fps: 10.0,
                looped: false,
            },
        );
        assert!(set.validate(4).is_err());
    }

    #[test]
    fn validate_rejects_non_positive_fps() {
        for fps in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let set = AnimationSet::new().with(
                "run",
                AnimationDef::Sequence {
                    frames: vec![0],
                    fps,
                    looped: true,
                },
            );
            assert!(set.validate(4).is_err(), "fps {fps} should be rejected");
        }
    }
}
