//! Bounce keyframe synthesis
//!
//! Turns a drop height, a playback duration and a bounce factor into a
//! [`BounceCurve`]. Four strategies share validation, the safety cap and the
//! final duration rescale:
//!
//! - `PhysicsSimulated` - dense fixed-step free fall (see [`physics`])
//! - `GeometricDecay` / `DebugDry` - sparse peaks and troughs (see [`geometric`])
//! - `EasedTwoPoint` - two keyframes and a bounce-out easing (see [`eased`])
//!
//! The shape is generated at `BounceConfig::base_rate` in simulated time;
//! the playback `sample_rate` is derived afterwards so the curve lasts
//! exactly `duration` milliseconds.

pub mod eased;
pub mod geometric;
pub mod physics;

use crate::clip::{BounceCurve, Interpolation, Keyframe};
use log::{debug, warn};
use rebound_core::{BounceConfig, BounceStrategy, ReboundError, Result, SafetyCapPolicy};
use serde::{Deserialize, Serialize};

/// Largest accepted bounce factor.
pub const MAX_BOUNCE_FACTOR: f64 = 0.99;

/// User-facing inputs for one bounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceParameters {
    /// Drop height above the resting position
    pub amplitude: f64,
    /// Playback length in milliseconds
    pub duration: f64,
    /// Fraction of vertical velocity kept after each impact
    pub bounce_factor: f64,
}

impl Default for BounceParameters {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            duration: 4000.0,
            bounce_factor: 0.7,
        }
    }
}

impl BounceParameters {
    pub fn new(amplitude: f64, duration: f64, bounce_factor: f64) -> Self {
        Self {
            amplitude,
            duration,
            bounce_factor,
        }
    }

    /// Reject out-of-range inputs with `InvalidParameter`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_BOUNCE_FACTOR).contains(&self.bounce_factor) {
            return Err(ReboundError::invalid(
                "bounce_factor",
                format!(
                    "must be between 0 and {}, got {}",
                    MAX_BOUNCE_FACTOR, self.bounce_factor
                ),
            ));
        }
        if !(self.amplitude.is_finite() && self.amplitude > 0.0) {
            return Err(ReboundError::invalid(
                "amplitude",
                format!("must be greater than 0, got {}", self.amplitude),
            ));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ReboundError::invalid(
                "duration",
                format!("must be greater than 0, got {}", self.duration),
            ));
        }
        Ok(())
    }
}

/// Keyframes produced by one strategy, before the shared post-processing.
pub(crate) struct RawCurve {
    pub keyframes: Vec<Keyframe>,
    pub interpolation: Interpolation,
    /// The strategy stopped because of `frame_cap`, not because it came to rest
    pub capped: bool,
}

/// Generates bounce curves with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct BounceCurveGenerator {
    config: BounceConfig,
}

impl BounceCurveGenerator {
    pub fn new(config: BounceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BounceConfig {
        &self.config
    }

    /// Generate a curve for an object resting at `base_height`.
    pub fn generate(&self, params: &BounceParameters, base_height: f64) -> Result<BounceCurve> {
        generate(params, base_height, &self.config)
    }
}

/// Generate a bounce curve with the strategy selected in `config`.
///
/// Fails before any work is done with `ConfigError` if `config` is unusable
/// or `InvalidParameter` if `params` is out of range, and with
/// `SafetyCapExceeded` only under `SafetyCapPolicy::Fail`.
pub fn generate(
    params: &BounceParameters,
    base_height: f64,
    config: &BounceConfig,
) -> Result<BounceCurve> {
    if let Err(e) = config.validate() {
        warn!("bounce config rejected: {}", e);
        return Err(e);
    }
    if let Err(e) = params.validate() {
        warn!("bounce rejected: {}", e);
        return Err(e);
    }

    let raw = match config.strategy {
        BounceStrategy::PhysicsSimulated => physics::simulate(params, base_height, config),
        BounceStrategy::GeometricDecay => {
            geometric::peaks_and_troughs(params, base_height, config, Interpolation::Gravity)
        }
        BounceStrategy::DebugDry => {
            geometric::peaks_and_troughs(params, base_height, config, Interpolation::Linear)
        }
        BounceStrategy::EasedTwoPoint => eased::two_point(params, base_height, config),
    };

    let RawCurve {
        mut keyframes,
        interpolation,
        capped,
    } = raw;

    if capped {
        match config.safety_cap {
            SafetyCapPolicy::Fail => {
                warn!(
                    "{} bounce did not settle within {} frames",
                    config.strategy, config.frame_cap
                );
                return Err(ReboundError::SafetyCapExceeded {
                    cap: config.frame_cap,
                });
            }
            SafetyCapPolicy::Settle => {
                warn!(
                    "{} bounce hit the {}-frame cap, settling last frame at rest",
                    config.strategy, config.frame_cap
                );
                if let Some(last) = keyframes.last_mut() {
                    last.value = base_height;
                }
            }
            SafetyCapPolicy::Truncate => {
                warn!(
                    "{} bounce hit the {}-frame cap, curve truncated",
                    config.strategy, config.frame_cap
                );
            }
        }
    }

    let total_frames = keyframes.last().map(|kf| kf.frame + 1).unwrap_or(0);
    let sample_rate = playback_rate(total_frames, params.duration);

    debug!(
        "{} bounce: {} keyframes, {} frames at {} fps (amplitude {}, {} ms, factor {})",
        config.strategy,
        keyframes.len(),
        total_frames,
        sample_rate,
        params.amplitude,
        params.duration,
        params.bounce_factor
    );

    Ok(BounceCurve {
        strategy: config.strategy,
        keyframes,
        sample_rate,
        total_frames,
        interpolation,
        looping: false,
        truncated: capped,
    })
}

/// Frames per second that stretch `total_frames` over `duration_ms`.
///
/// Never returns 0, so very long durations still advance.
pub fn playback_rate(total_frames: u32, duration_ms: f64) -> u32 {
    let rate = (1000.0 * total_frames as f64 / duration_ms).round();
    if rate < 1.0 {
        1
    } else if rate >= u32::MAX as f64 {
        u32::MAX
    } else {
        rate as u32
    }
}
