//! Two-keyframe bounce driven by an easing curve

use super::{BounceParameters, RawCurve};
use crate::clip::{Interpolation, Keyframe};
use rebound_core::BounceConfig;

/// Length of the eased drop in simulated seconds.
const WINDOW_SECONDS: u32 = 2;

/// Hops for the easing curve: how many times `amplitude` can be halved
/// before dropping below `min_peak_height`.
pub fn bounce_count(amplitude: f64, min_peak_height: f64) -> u32 {
    if amplitude <= min_peak_height {
        return 0;
    }
    (amplitude / min_peak_height).log2().floor() as u32
}

/// Drop start at frame 0, rest at the end of a fixed two-second window.
pub(crate) fn two_point(
    params: &BounceParameters,
    base_height: f64,
    config: &BounceConfig,
) -> RawCurve {
    let window = config.base_rate.saturating_mul(WINDOW_SECONDS);
    let capped = window >= config.frame_cap;
    let end = if capped {
        config.frame_cap.saturating_sub(1)
    } else {
        window
    };

    RawCurve {
        keyframes: vec![
            Keyframe::new(0, base_height + params.amplitude),
            Keyframe::new(end, base_height),
        ],
        interpolation: Interpolation::BounceOut {
            bounces: bounce_count(params.amplitude, config.min_peak_height),
        },
        capped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounce::generate;
    use crate::sampler::sample_curve;
    use rebound_core::BounceStrategy;

    fn eased_config() -> BounceConfig {
        BounceConfig::default().with_strategy(BounceStrategy::EasedTwoPoint)
    }

    #[test]
    fn bounce_count_halvings() {
        assert_eq!(bounce_count(10.0, 0.1), 6);
        assert_eq!(bounce_count(1.0, 0.1), 3);
        assert_eq!(bounce_count(0.1, 0.1), 0);
        assert_eq!(bounce_count(0.05, 0.1), 0);
    }

    #[test]
    fn two_keyframes_over_two_seconds() {
        let curve = generate(&BounceParameters::default(), 0.5, &eased_config()).unwrap();
        assert_eq!(
            curve.keyframes,
            vec![Keyframe::new(0, 10.5), Keyframe::new(120, 0.5)]
        );
        assert_eq!(curve.interpolation, Interpolation::BounceOut { bounces: 6 });
        assert_eq!(curve.total_frames, 121);
        // 121 frames over 4 seconds
        assert_eq!(curve.sample_rate, 30);
        assert!(!curve.truncated);
    }

    #[test]
    fn eased_curve_rebounds_before_rest() {
        let curve = generate(&BounceParameters::default(), 0.0, &eased_config()).unwrap();
        let samples: Vec<f64> = (0..=120).map(|f| sample_curve(&curve, f as f64)).collect();
        let first_low = samples.iter().position(|v| *v < 1.0).unwrap();
        assert!(samples[first_low..].iter().any(|v| *v > 2.0));
        assert_eq!(*samples.last().unwrap(), 0.0);
    }

    #[test]
    fn short_cap_clips_window() {
        let config = BounceConfig {
            frame_cap: 50,
            ..eased_config()
        };
        let curve = generate(&BounceParameters::default(), 0.0, &config).unwrap();
        assert!(curve.truncated);
        assert_eq!(curve.last_frame(), 49);
        assert_eq!(curve.last_value(), 0.0);
    }
}
