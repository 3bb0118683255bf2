use super::Curve;
use crate::util::unit_clamp;

const C1: f64 = 1.70158;
const C2: f64 = C1 * 1.525;
const C3: f64 = C1 + 1.0;

/// Pulls slightly below 0.0 before accelerating towards 1.0
pub fn ease_in_back(t: f64) -> f64 {
    let t = unit_clamp(t);
    C3 * t * t * t - C1 * t * t
}

/// Overshoots 1.0 then settles back onto it
pub fn ease_out_back(t: f64) -> f64 {
    let t = unit_clamp(t);
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

/// Overshoots at both ends
pub fn ease_in_ease_out_back(t: f64) -> f64 {
    let t = unit_clamp(t);
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

/// Curve form of [`ease_in_back`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInBack;

impl Curve for EaseInBack {
    fn title(&self) -> String {
        "easeInBack".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_back(t)
    }
}

/// Curve form of [`ease_out_back`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOutBack;

impl Curve for EaseOutBack {
    fn title(&self) -> String {
        "easeOutBack".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_out_back(t)
    }
}

/// Curve form of [`ease_in_ease_out_back`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInEaseOutBack;

impl Curve for EaseInEaseOutBack {
    fn title(&self) -> String {
        "easeInEaseOutBack".to_owned()
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_ease_out_back(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_pinned() {
        for curve in [ease_in_back, ease_out_back, ease_in_ease_out_back] {
            assert_abs_diff_eq!(curve(0.0), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(curve(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn overshoot_happens_mid_curve() {
        assert!(ease_in_back(0.2) < 0.0);
        assert!(ease_out_back(0.5) > 1.0);
        assert!(ease_in_ease_out_back(0.1) < 0.0);
        assert!(ease_in_ease_out_back(0.9) > 1.0);
    }

    #[test]
    fn in_out_midpoint() {
        assert_eq!(ease_in_ease_out_back(0.5), 0.5);
    }

    #[test]
    fn known_values() {
        // c3·t³ − c1·t² at t = 0.5
        assert_abs_diff_eq!(
            ease_in_back(0.5),
            2.70158 * 0.125 - 1.70158 * 0.25,
            epsilon = 1e-12
        );
    }
}
