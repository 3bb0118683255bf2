use super::Curve;
use crate::util::unit_clamp;
use std::f64::consts::PI;

const C4: f64 = (2.0 * PI) / 3.0;
const C5: f64 = (2.0 * PI) / 4.5;

/// Damped sine oscillation winding up before release.
pub fn ease_in_elastic(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
}

/// Damped sine oscillation ringing out around 1.0
pub fn ease_out_elastic(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
}

/// Oscillates into and out of the midpoint with symmetric amplitude decay.
pub fn ease_in_ease_out_elastic(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    if t < 0.5 {
        -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
    } else {
        2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin() / 2.0 + 1.0
    }
}

/// Curve form of [`ease_in_elastic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInElastic;

impl Curve for EaseInElastic {
    fn title(&self) -> String {
        "easeInElastic".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_elastic(t)
    }
}

/// Curve form of [`ease_out_elastic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOutElastic;

impl Curve for EaseOutElastic {
    fn title(&self) -> String {
        "easeOutElastic".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_out_elastic(t)
    }
}

/// Curve form of [`ease_in_ease_out_elastic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInEaseOutElastic;

impl Curve for EaseInEaseOutElastic {
    fn title(&self) -> String {
        "easeInEaseOutElastic".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_ease_out_elastic(t)
    }
}
