//! Animation system for Rebound
//!
//! Provides the bounce drop animation end to end:
//! - **Synthesis**: `bounce` turns amplitude, duration and bounce factor into a keyframe curve
//! - **Evaluation**: `sampler` + `easing` interpolate a curve at any frame time
//! - **Playback**: `player` keeps at most one running curve per scene object

pub mod bounce;
pub mod clip;
pub mod easing;
pub mod player;
pub mod sampler;

pub use bounce::{generate, BounceCurveGenerator, BounceParameters};
pub use clip::{BounceCurve, Interpolation, Keyframe};
pub use player::{ActiveAnimation, AnimationPlayer, PlaybackState};
pub use sampler::sample_curve;
