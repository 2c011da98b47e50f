//! Easing functions used between sparse keyframes
//!
//! All functions map a normalized segment parameter `t` in [0, 1] to an
//! eased progress value with `f(0) = 0` and `f(1) = 1`.

/// Bounciness used by `bounce_ease_out`: each bounce is half as tall as the last.
pub const DEFAULT_BOUNCINESS: f64 = 2.0;

/// Quadratic ease-in: starts at rest and accelerates, like free fall.
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out: starts fast and decelerates, like a rising throw.
pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Bounce easing that ends in a series of shrinking hops.
///
/// `bounces` is the number of hops after the first arc. `bounciness` is
/// the ratio between consecutive hop heights and durations; values at or
/// below 1 are nudged just above 1.
pub fn bounce_ease_in(t: f64, bounces: u32, bounciness: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let b = if bounciness <= 1.0 { 1.001 } else { bounciness };
    let n = bounces as f64;

    let pow_n = b.powf(n);
    let one_minus_b = 1.0 - b;
    // Total length of all arcs in units of the first (shortest) arc.
    let total = (1.0 - pow_n) / one_minus_b + pow_n * 0.5;

    let scaled = t * total;
    let arc = ((-scaled * one_minus_b + 1.0).ln() / b.ln()).floor();
    let arc_start = (1.0 - b.powf(arc)) / (one_minus_b * total);
    let arc_end = (1.0 - b.powf(arc + 1.0)) / (one_minus_b * total);

    let arc_mid = (arc_start + arc_end) * 0.5;
    let offset = t - arc_mid;
    let half_width = arc_mid - arc_start;

    (-(1.0 / b).powf(n - arc) / (half_width * half_width))
        * (offset - half_width)
        * (offset + half_width)
}

/// Mirror of `bounce_ease_in`: the hops happen at the end of the segment.
pub fn bounce_ease_out(t: f64, bounces: u32, bounciness: f64) -> f64 {
    1.0 - bounce_ease_in(1.0 - t.clamp(0.0, 1.0), bounces, bounciness)
}
