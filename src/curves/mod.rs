use dyn_clone::{clone_trait_object, DynClone};
use error_stack_derive::ErrorStack;

pub mod back;
pub mod bezier;
pub mod bounce;
pub mod ease;
pub mod elastic;
pub mod jump;
pub mod linear;

pub use back::{
    ease_in_back, ease_in_ease_out_back, ease_out_back, EaseInBack, EaseInEaseOutBack, EaseOutBack,
};
pub use bezier::CubicBezier;
pub use bounce::{
    ease_in_bounce, ease_in_ease_out_bounce, ease_out_bounce, EaseInBounce, EaseInEaseOutBounce,
    EaseOutBounce,
};
pub use ease::{ease_in, ease_in_ease_out, ease_out, EaseIn, EaseInEaseOut, EaseOut, EasingKind};
pub use elastic::{
    ease_in_ease_out_elastic, ease_in_elastic, ease_out_elastic, EaseInElastic,
    EaseInEaseOutElastic, EaseOutElastic,
};
pub use jump::{Jump, JumpPolicy};
pub use linear::Linear;

/// Common contract for every easing curve.
///
/// A curve maps a unit progress value to an eased output. Implementations
/// are immutable values; evaluation is pure and accepts any real input,
/// clamping it to 0.0 ..= 1.0 before use.
pub trait Curve: DynClone + Send + Sync {
    /// A deterministic label encoding the curve and its parameters. Stable
    /// for identical parameters, so callers can use it as a cache or
    /// fixture key.
    fn title(&self) -> String;
    /// The eased output at progress `t`.
    fn value(&self, t: f64) -> f64;
}
clone_trait_object!(Curve);

#[derive(ErrorStack, Debug)]
#[error_message("A curve was constructed with invalid parameters")]
pub enum CurveConstructionError {
    TooFewSteps,
    TooFewControlValues,
    BadEndpointValues,
    ControlPointOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_are_object_safe_and_cloneable() {
        let curves: Vec<Box<dyn Curve>> = vec![
            Box::new(EaseIn::new(EasingKind::Cubic)),
            Box::new(EaseOutBounce),
            Box::new(Linear::new()),
            Box::new(Jump::new(JumpPolicy::End, 4).unwrap()),
        ];
        let cloned = curves.clone();
        for (a, b) in curves.iter().zip(cloned.iter()) {
            assert_eq!(a.title(), b.title());
            assert_eq!(a.value(0.3), b.value(0.3));
        }
    }

    #[test]
    fn titles_are_deterministic() {
        assert_eq!(
            EaseIn::new(EasingKind::Quart).title(),
            EaseIn::new(EasingKind::Quart).title()
        );
        assert_eq!(EaseInEaseOut::default().title(), "easeInEaseOut(cubic)");
    }
}
