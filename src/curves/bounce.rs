use super::Curve;
use crate::util::unit_clamp;

const N1: f64 = 7.5625;
const D1: f64 = 2.75;

/// Bounces at the start, mirroring [`ease_out_bounce`].
pub fn ease_in_bounce(t: f64) -> f64 {
    let t = unit_clamp(t);
    1.0 - ease_out_bounce(1.0 - t)
}

/// Four quadratic lobes of decreasing amplitude, settling on 1.0
pub fn ease_out_bounce(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let tt = t - 1.5 / D1;
        N1 * tt * tt + 0.75
    } else if t < 2.5 / D1 {
        let tt = t - 2.25 / D1;
        N1 * tt * tt + 0.9375
    } else {
        let tt = t - 2.625 / D1;
        N1 * (tt / D1) * tt + 0.984375
    }
}

/// Bounces at both ends.
pub fn ease_in_ease_out_bounce(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * t - 1.0)) / 2.0
    }
}

/// Curve form of [`ease_in_bounce`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInBounce;

impl Curve for EaseInBounce {
    fn title(&self) -> String {
        "easeInBounce".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_bounce(t)
    }
}

/// Curve form of [`ease_out_bounce`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOutBounce;

impl Curve for EaseOutBounce {
    fn title(&self) -> String {
        "easeOutBounce".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_out_bounce(t)
    }
}

/// Curve form of [`ease_in_ease_out_bounce`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInEaseOutBounce;

impl Curve for EaseInEaseOutBounce {
    fn title(&self) -> String {
        "easeInEaseOutBounce".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_ease_out_bounce(t)
    }
}
