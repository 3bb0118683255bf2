//! Easing curves over unit progress, and combinators for applying them.
//!
//! Every curve maps a progress value t in 0.0 ..= 1.0 to an eased output
//! through the [`curves::Curve`] trait; [`interpolate::CurveExt`] layers
//! sampling and scalar/point/size/rect interpolation on top of any of them.

pub use error_stack::{Context, IntoReport, Report, Result, ResultExt};
pub use error_stack_derive::ErrorStack;

pub mod curves;
pub mod geometry;
pub mod interpolate;
pub mod point;
pub mod util;

pub mod prelude {
    pub use crate::curves::{
        ease_in, ease_in_back, ease_in_bounce, ease_in_ease_out, ease_in_ease_out_back,
        ease_in_ease_out_bounce, ease_in_ease_out_elastic, ease_in_elastic, ease_out,
        ease_out_back, ease_out_bounce, ease_out_elastic, CubicBezier, Curve,
        CurveConstructionError, EaseIn, EaseInBack, EaseInBounce, EaseInEaseOut,
        EaseInEaseOutBack, EaseInEaseOutBounce, EaseInEaseOutElastic, EaseInElastic, EaseOut,
        EaseOutBack, EaseOutBounce, EaseOutElastic, EasingKind, Jump, JumpPolicy, Linear,
    };
    pub use crate::geometry::{Rect, Size};
    pub use crate::interpolate::CurveExt;
    pub use crate::point::Point;
    pub use crate::util::{approx_eq, equally_spaced, lerp, unit_clamp};
}
