//! Sparse peak/trough bounce keyframes
//!
//! One keyframe per apex and one per ground contact. Each bounce keeps
//! `bounce_factor` of the previous apex height and of the previous fall
//! time; the curve ends once the next apex would be lower than
//! `min_peak_height`.

use super::{BounceParameters, RawCurve};
use crate::clip::{Interpolation, Keyframe};
use rebound_core::BounceConfig;

/// Whole frames covering `seconds` of simulated time (at least one).
fn frames_for(seconds: f64, base_rate: u32) -> u32 {
    let frames = (seconds * base_rate as f64).round();
    if frames < 1.0 {
        1
    } else if frames >= u32::MAX as f64 {
        u32::MAX
    } else {
        frames as u32
    }
}

/// Build the apex/contact keyframes; `interpolation` is passed through to the curve.
pub(crate) fn peaks_and_troughs(
    params: &BounceParameters,
    base_height: f64,
    config: &BounceConfig,
    interpolation: Interpolation,
) -> RawCurve {
    let mut peak = params.amplitude;
    let mut fall_time = (2.0 * params.amplitude / -config.gravity).sqrt();
    let mut frame: u32 = 0;
    let mut keyframes = vec![Keyframe::new(0, base_height + peak)];
    let mut capped = false;

    loop {
        frame = frame.saturating_add(frames_for(fall_time, config.base_rate));
        if frame >= config.frame_cap {
            // Land on the last allowed frame so a capped fall still reaches the ground.
            let last = config.frame_cap.saturating_sub(1);
            if keyframes.last().map_or(true, |kf| kf.frame < last) {
                keyframes.push(Keyframe::new(last, base_height));
            }
            capped = true;
            break;
        }
        keyframes.push(Keyframe::new(frame, base_height));

        peak *= params.bounce_factor;
        fall_time *= params.bounce_factor;
        if peak < config.min_peak_height {
            break;
        }

        // Rise to the next apex takes as long as the fall from it.
        frame = frame.saturating_add(frames_for(fall_time, config.base_rate));
        if frame >= config.frame_cap {
            capped = true;
            break;
        }
        keyframes.push(Keyframe::new(frame, base_height + peak));
    }

    RawCurve {
        keyframes,
        interpolation,
        capped,
    }
}
