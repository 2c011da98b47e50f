//! Dense fixed-step bounce simulation
//!
//! Sampling every step of the parabola keeps the velocity visually even;
//! sparse keyframes with linear or spline blending between them do not
//! reproduce parabolic motion and show as stutter.

use super::{BounceParameters, RawCurve};
use crate::clip::{Interpolation, Keyframe};
use rebound_core::BounceConfig;

/// Transient state for one simulation run.
struct SimulationState {
    /// Steps since the start of the current fall or bounce phase
    local_steps: u32,
    frame_index: u32,
    gravity: f64,
    has_impacted: bool,
    /// Time from the current phase used to launch the next bounce
    impact_local_time: f64,
}

impl SimulationState {
    fn new(gravity: f64) -> Self {
        Self {
            local_steps: 0,
            frame_index: 0,
            gravity,
            has_impacted: false,
            impact_local_time: 0.0,
        }
    }

    /// Height above ground at local time `t`, before impact clamping.
    fn height_at(&self, params: &BounceParameters, t: f64) -> f64 {
        let fall = 0.5 * self.gravity * t * t;
        if self.has_impacted {
            -self.gravity * self.impact_local_time * params.bounce_factor * t + fall
        } else {
            params.amplitude + fall
        }
    }
}

/// Simulate the drop one `1 / base_rate` step at a time.
pub(crate) fn simulate(
    params: &BounceParameters,
    base_height: f64,
    config: &BounceConfig,
) -> RawCurve {
    let dt = 1.0 / config.base_rate as f64;
    let mut state = SimulationState::new(config.gravity);
    let mut keyframes: Vec<Keyframe> = Vec::new();
    let mut at_rest = false;

    while state.frame_index < config.frame_cap {
        let t = state.local_steps as f64 * dt;
        let mut height = state.height_at(params, t);

        if height <= 0.0 {
            height = 0.0;
            // Later phases start on the ground, so half the phase is the rise time.
            state.impact_local_time = if state.has_impacted { t / 2.0 } else { t };
            state.local_steps = 0;
            state.has_impacted = true;
        }

        let value = height + base_height;
        if value <= base_height {
            if let Some(prev) = keyframes.last() {
                if prev.value - value < config.rest_epsilon {
                    at_rest = true;
                    break;
                }
            }
        }

        keyframes.push(Keyframe::new(state.frame_index, value));
        state.frame_index += 1;
        state.local_steps += 1;
    }

    RawCurve {
        keyframes,
        interpolation: Interpolation::Linear,
        capped: !at_rest,
    }
}
