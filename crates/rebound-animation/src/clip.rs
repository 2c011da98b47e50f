//! Core animation data types

use rebound_core::BounceStrategy;
use serde::{Deserialize, Serialize};

/// A keyframe: a vertical position at a discrete frame index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Frame index from curve start
    pub frame: u32,
    /// World-space height (base height already applied)
    pub value: f64,
}

impl Keyframe {
    pub fn new(frame: u32, value: f64) -> Self {
        Self { frame, value }
    }
}

/// How to interpolate between keyframes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum Interpolation {
    /// Linear interpolation
    #[default]
    Linear,
    /// Quadratic ease-in while falling, quadratic ease-out while rising
    Gravity,
    /// Bounce-out easing over each segment with the given number of bounces
    BounceOut { bounces: u32 },
}

/// A generated bounce trajectory, ready to hand to playback.
///
/// Owned by the caller once returned; the generator keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BounceCurve {
    /// Algorithm that produced the keyframes
    pub strategy: BounceStrategy,
    /// Keyframes ordered by frame
    pub keyframes: Vec<Keyframe>,
    /// Playback frames per second, derived from the requested duration
    pub sample_rate: u32,
    /// Number of frames spanned by the curve (last frame + 1)
    pub total_frames: u32,
    /// Interpolation mode between keyframes
    pub interpolation: Interpolation,
    /// Whether playback should wrap around
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Set when generation hit the frame cap before the object came to rest
    #[serde(default)]
    pub truncated: bool,
}

impl BounceCurve {
    /// Value of the first keyframe, or 0.0 for an empty curve.
    pub fn first_value(&self) -> f64 {
        self.keyframes.first().map(|kf| kf.value).unwrap_or(0.0)
    }

    /// Value of the last keyframe, or 0.0 for an empty curve.
    pub fn last_value(&self) -> f64 {
        self.keyframes.last().map(|kf| kf.value).unwrap_or(0.0)
    }

    /// Frame index of the last keyframe.
    pub fn last_frame(&self) -> u32 {
        self.keyframes.last().map(|kf| kf.frame).unwrap_or(0)
    }

    /// Wall-clock playback length in seconds at `sample_rate`.
    pub fn playback_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.total_frames as f64 / self.sample_rate as f64
    }
}
