use super::{back, bounce, elastic, Curve};
use crate::util::unit_clamp;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

/// Selects the closed-form formula used by [`EaseIn`], [`EaseOut`] and
/// [`EaseInEaseOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingKind {
    Linear,
    Sine,
    Quad,
    #[default]
    Cubic,
    Quart,
    Quint,
    Circular,
    Exponential,
    Bounce,
    Elastic,
    Back,
}

impl Display for EasingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EasingKind::Linear => "linear",
            EasingKind::Sine => "sine",
            EasingKind::Quad => "quad",
            EasingKind::Cubic => "cubic",
            EasingKind::Quart => "quart",
            EasingKind::Quint => "quint",
            EasingKind::Circular => "circular",
            EasingKind::Exponential => "exponential",
            EasingKind::Bounce => "bounce",
            EasingKind::Elastic => "elastic",
            EasingKind::Back => "back",
        };
        write!(f, "{}", name)
    }
}

/// Accelerating ease of the given kind.
pub fn ease_in(kind: EasingKind, t: f64) -> f64 {
    let t = unit_clamp(t);
    match kind {
        EasingKind::Linear => t,
        EasingKind::Sine => 1.0 - (t * PI / 2.0).cos(),
        EasingKind::Quad => t * t,
        EasingKind::Cubic => t * t * t,
        EasingKind::Quart => t * t * t * t,
        EasingKind::Quint => t * t * t * t * t,
        EasingKind::Circular => 1.0 - (1.0 - t * t).sqrt(),
        EasingKind::Exponential => {
            // 2^(10t - 10) never quite reaches 0 on its own
            if t == 0.0 {
                0.0
            } else {
                2f64.powf(10.0 * t - 10.0)
            }
        }
        EasingKind::Bounce => bounce::ease_in_bounce(t),
        EasingKind::Elastic => elastic::ease_in_elastic(t),
        EasingKind::Back => back::ease_in_back(t),
    }
}

/// Decelerating ease of the given kind.
pub fn ease_out(kind: EasingKind, t: f64) -> f64 {
    let t = unit_clamp(t);
    match kind {
        EasingKind::Linear => t,
        EasingKind::Sine => (t * PI / 2.0).sin(),
        EasingKind::Quad => 1.0 - (1.0 - t) * (1.0 - t),
        EasingKind::Cubic => 1.0 - (1.0 - t).powi(3),
        EasingKind::Quart => 1.0 - (1.0 - t).powi(4),
        EasingKind::Quint => 1.0 - (1.0 - t).powi(5),
        EasingKind::Circular => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
        EasingKind::Exponential => {
            if t == 1.0 {
                1.0
            } else {
                1.0 - 2f64.powf(-10.0 * t)
            }
        }
        EasingKind::Bounce => bounce::ease_out_bounce(t),
        EasingKind::Elastic => elastic::ease_out_elastic(t),
        EasingKind::Back => back::ease_out_back(t),
    }
}

/// Ease that accelerates to the midpoint then decelerates, mirroring the
/// out-half of the kind's formula at t = 0.5.
pub fn ease_in_ease_out(kind: EasingKind, t: f64) -> f64 {
    let t = unit_clamp(t);
    match kind {
        EasingKind::Linear => t,
        EasingKind::Sine => -((PI * t).cos() - 1.0) / 2.0,
        EasingKind::Quad => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        EasingKind::Cubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        EasingKind::Quart => {
            if t < 0.5 {
                8.0 * t * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
            }
        }
        EasingKind::Quint => {
            if t < 0.5 {
                16.0 * t * t * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
            }
        }
        EasingKind::Circular => {
            if t < 0.5 {
                (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
            } else {
                ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
            }
        }
        EasingKind::Exponential => {
            if t == 0.0 {
                0.0
            } else if t == 1.0 {
                1.0
            } else if t < 0.5 {
                2f64.powf(20.0 * t - 10.0) / 2.0
            } else {
                (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
            }
        }
        EasingKind::Bounce => bounce::ease_in_ease_out_bounce(t),
        EasingKind::Elastic => elastic::ease_in_ease_out_elastic(t),
        EasingKind::Back => back::ease_in_ease_out_back(t),
    }
}

/// Curve form of [`ease_in`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseIn {
    pub kind: EasingKind,
}

impl EaseIn {
    pub fn new(kind: EasingKind) -> Self {
        Self { kind }
    }
}

impl Curve for EaseIn {
    fn title(&self) -> String {
        format!("easeIn({})", self.kind)
    }
    fn value(&self, t: f64) -> f64 {
        ease_in(self.kind, t)
    }
}

/// Curve form of [`ease_out`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOut {
    pub kind: EasingKind,
}

impl EaseOut {
    pub fn new(kind: EasingKind) -> Self {
        Self { kind }
    }
}

impl Curve for EaseOut {
    fn title(&self) -> String {
        format!("easeOut({})", self.kind)
    }
    fn value(&self, t: f64) -> f64 {
        ease_out(self.kind, t)
    }
}

/// Curve form of [`ease_in_ease_out`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseInEaseOut {
    pub kind: EasingKind,
}

impl EaseInEaseOut {
    pub fn new(kind: EasingKind) -> Self {
        Self { kind }
    }
}

impl Curve for EaseInEaseOut {
    fn title(&self) -> String {
        format!("easeInEaseOut({})", self.kind)
    }
    fn value(&self, t: f64) -> f64 {
        ease_in_ease_out(self.kind, t)
    }
}
