//! Pure keyframe evaluation - binary search + interpolation

use crate::clip::{BounceCurve, Interpolation, Keyframe};
use crate::easing::{bounce_ease_out, ease_in_quad, ease_out_quad, DEFAULT_BOUNCINESS};

/// Sample a curve at a (fractional) frame time, returning the interpolated height.
pub fn sample_curve(curve: &BounceCurve, frame_time: f64) -> f64 {
    sample_keyframes(&curve.keyframes, curve.interpolation, frame_time)
}

/// Sample raw keyframes at a given frame time.
///
/// Uses binary search to find the surrounding keyframes, then interpolates
/// according to `interpolation`.
pub fn sample_keyframes(
    keyframes: &[Keyframe],
    interpolation: Interpolation,
    frame_time: f64,
) -> f64 {
    if keyframes.is_empty() {
        return 0.0;
    }

    // Before first keyframe - clamp to first value
    if frame_time <= keyframes[0].frame as f64 {
        return keyframes[0].value;
    }

    // After last keyframe - clamp to last value
    let last = &keyframes[keyframes.len() - 1];
    if frame_time >= last.frame as f64 {
        return last.value;
    }

    // Binary search for the interval containing `frame_time`
    let idx = match keyframes.binary_search_by(|kf| (kf.frame as f64).total_cmp(&frame_time)) {
        Ok(i) => return keyframes[i].value, // exact match
        Err(i) => i, // insertion point - time is between [i-1] and [i]
    };

    let prev = &keyframes[idx - 1];
    let next = &keyframes[idx];

    let span = (next.frame - prev.frame) as f64;
    if span <= 0.0 {
        return prev.value;
    }
    let t = (frame_time - prev.frame as f64) / span;

    let progress = match interpolation {
        Interpolation::Linear => t,
        Interpolation::Gravity => {
            if next.value < prev.value {
                ease_in_quad(t)
            } else {
                ease_out_quad(t)
            }
        }
        Interpolation::BounceOut { bounces } => bounce_ease_out(t, bounces, DEFAULT_BOUNCINESS),
    };

    prev.value + (next.value - prev.value) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(frame: u32, value: f64) -> Keyframe {
        Keyframe::new(frame, value)
    }

    #[test]
    fn sample_empty_returns_zero() {
        assert_eq!(sample_keyframes(&[], Interpolation::Linear, 0.5), 0.0);
    }

    #[test]
    fn sample_before_first_keyframe_clamps() {
        let keys = [kf(2, 5.0), kf(4, 1.0)];
        assert_eq!(sample_keyframes(&keys, Interpolation::Linear, 0.0), 5.0);
        assert_eq!(sample_keyframes(&keys, Interpolation::Linear, -3.0), 5.0);
    }

    #[test]
    fn sample_after_last_keyframe_clamps() {
        let keys = [kf(0, 0.0), kf(10, 4.0)];
        assert_eq!(sample_keyframes(&keys, Interpolation::Linear, 50.0), 4.0);
    }

    #[test]
    fn sample_linear_midpoint() {
        let keys = [kf(0, 0.0), kf(10, 4.0)];
        let v = sample_keyframes(&keys, Interpolation::Linear, 5.0);
        assert!((v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sample_exact_keyframe_time() {
        let keys = [kf(0, 0.0), kf(10, 10.0), kf(20, 20.0)];
        assert_eq!(sample_keyframes(&keys, Interpolation::Linear, 10.0), 10.0);
    }

    #[test]
    fn gravity_falls_slowly_at_the_peak() {
        // Falling from 10 to 0: after a quarter of the segment the object has
        // dropped far less than a quarter of the distance.
        let keys = [kf(0, 10.0), kf(40, 0.0)];
        let v = sample_keyframes(&keys, Interpolation::Gravity, 10.0);
        assert!((v - (10.0 - 10.0 * 0.0625)).abs() < 1e-12);
        assert!(v > 7.5);
    }

    #[test]
    fn gravity_rises_fast_off_the_ground() {
        let keys = [kf(0, 0.0), kf(40, 10.0)];
        let v = sample_keyframes(&keys, Interpolation::Gravity, 10.0);
        assert!((v - 10.0 * 0.4375).abs() < 1e-12);
        assert!(v > 2.5);
    }

    #[test]
    fn bounce_out_ends_at_rest_value() {
        let keys = [kf(0, 10.0), kf(120, 0.0)];
        let interp = Interpolation::BounceOut { bounces: 6 };
        assert_eq!(sample_keyframes(&keys, interp, 120.0), 0.0);
        let near_end = sample_keyframes(&keys, interp, 119.999);
        assert!(near_end.abs() < 0.01);
        // Mid-segment values stay between rest and drop height.
        for frame in 0..120 {
            let v = sample_keyframes(&keys, interp, frame as f64 + 0.5);
            assert!((-1e-9..=10.0 + 1e-9).contains(&v));
        }
    }

    #[test]
    fn duplicate_frames_return_previous_value() {
        let keys = [kf(0, 3.0), kf(5, 2.0), kf(5, 1.0), kf(8, 0.0)];
        let v = sample_keyframes(&keys, Interpolation::Linear, 6.5);
        assert!((v - 0.5).abs() < 1e-12);
    }
}
