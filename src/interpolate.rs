use crate::curves::Curve;
use crate::geometry::{Rect, Size};
use crate::point::Point;
use crate::util::{equally_spaced, lerp, unit_clamp};
use num_traits::Float;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Sampling and interpolation combinators available on every [`Curve`].
///
/// All of these are layered on `Curve::value` and the numeric helpers; the
/// point, size and rect forms lerp each component independently by the
/// curve's output.
pub trait CurveExt: Curve {
    /// The eased outputs for each of the given times.
    fn values(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|t| self.value(*t)).collect()
    }

    /// The eased outputs at `count` equally spaced times across the unit
    /// range. `count` must be greater than 1.
    fn spaced_values(&self, count: usize) -> Vec<f64> {
        equally_spaced(count).map(|t| self.value(t)).collect()
    }

    /// The curve value at `t` mapped linearly between two values.
    fn value_between(&self, t: f64, from: f64, through: f64) -> f64 {
        lerp(from, through, self.value(unit_clamp(t)))
    }

    /// [`CurveExt::value_between`] over a closed range.
    fn value_in(&self, t: f64, range: RangeInclusive<f64>) -> f64 {
        self.value_between(t, *range.start(), *range.end())
    }

    /// The curve values at each given time, mapped onto a closed range.
    fn values_in(&self, t: &[f64], range: RangeInclusive<f64>) -> Vec<f64> {
        t.iter()
            .map(|t| self.value_between(*t, *range.start(), *range.end()))
            .collect()
    }

    /// `count` equally spaced curve values mapped onto a closed range.
    fn spaced_values_in(&self, count: usize, range: RangeInclusive<f64>) -> Vec<f64> {
        self.spaced_values(count)
            .into_iter()
            .map(|position| lerp(*range.start(), *range.end(), position))
            .collect()
    }

    /// The curve position at `t` between two points.
    fn point_between<T: Float + Display>(&self, t: f64, p0: Point<T>, p1: Point<T>) -> Point<T> {
        let position = T::from(self.value(unit_clamp(t))).unwrap();
        Point::new(lerp(p0.x, p1.x, position), lerp(p0.y, p1.y, position))
    }

    /// The curve positions between two points for each given time.
    fn points_between<T: Float + Display>(
        &self,
        t: &[f64],
        p0: Point<T>,
        p1: Point<T>,
    ) -> Vec<Point<T>> {
        t.iter().map(|t| self.point_between(*t, p0, p1)).collect()
    }

    /// `count` equally spaced curve positions between two points.
    fn spaced_points_between<T: Float + Display>(
        &self,
        count: usize,
        p0: Point<T>,
        p1: Point<T>,
    ) -> Vec<Point<T>> {
        equally_spaced(count)
            .map(|t| self.point_between(t, p0, p1))
            .collect()
    }

    /// The curve position at `t` between two sizes.
    fn size_between<T: Float + Display>(&self, t: f64, s0: Size<T>, s1: Size<T>) -> Size<T> {
        let position = T::from(self.value(unit_clamp(t))).unwrap();
        Size::new(
            lerp(s0.width, s1.width, position),
            lerp(s0.height, s1.height, position),
        )
    }

    /// The curve positions between two sizes for each given time.
    fn sizes_between<T: Float + Display>(
        &self,
        t: &[f64],
        s0: Size<T>,
        s1: Size<T>,
    ) -> Vec<Size<T>> {
        t.iter().map(|t| self.size_between(*t, s0, s1)).collect()
    }

    /// `count` equally spaced curve positions between two sizes.
    fn spaced_sizes_between<T: Float + Display>(
        &self,
        count: usize,
        s0: Size<T>,
        s1: Size<T>,
    ) -> Vec<Size<T>> {
        equally_spaced(count)
            .map(|t| self.size_between(t, s0, s1))
            .collect()
    }

    /// A rect interpolated field-by-field (min corner, width, height)
    /// between two rects.
    fn rect_between(&self, t: f64, r0: Rect<f64>, r1: Rect<f64>) -> Rect<f64> {
        let t = unit_clamp(t);
        Rect::new(
            self.value_between(t, r0.min_x(), r1.min_x()),
            self.value_between(t, r0.min_y(), r1.min_y()),
            self.value_between(t, r0.width, r1.width),
            self.value_between(t, r0.height, r1.height),
        )
    }

    /// Treats the curve as a plot across `size`: `x` is clamped to
    /// 0.0 ..= width, progress is x / width, and the output is mapped onto
    /// 0.0 ..= height.
    fn value_in_size(&self, x: f64, size: Size<f64>) -> f64 {
        let x = x.max(0.0).min(size.width);
        let t = x / size.width;
        lerp(0.0, size.height, self.value(t))
    }

    /// [`CurveExt::value_in_size`] for each given x value.
    fn values_in_size(&self, x: &[f64], size: Size<f64>) -> Vec<f64> {
        x.iter().map(|x| self.value_in_size(*x, size)).collect()
    }

    /// Treats the curve as a plot across `rect`: `x` is clamped to the
    /// rect's horizontal extent and the output is mapped between the
    /// rect's minimum and maximum y.
    fn value_in_rect(&self, x: f64, rect: Rect<f64>) -> f64 {
        let x = x.max(rect.min_x()).min(rect.max_x());
        let dt = x / rect.width;
        lerp(rect.min_y(), rect.max_y(), self.value(dt))
    }

    /// [`CurveExt::value_in_rect`] for each given x value.
    fn values_in_rect(&self, x: &[f64], rect: Rect<f64>) -> Vec<f64> {
        x.iter().map(|x| self.value_in_rect(*x, rect)).collect()
    }
}

impl<C: Curve + ?Sized> CurveExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{EaseIn, EaseInEaseOut, EasingKind, Linear};
    use approx::assert_abs_diff_eq;

    #[test]
    fn spaced_values_over_the_identity() {
        let identity = Linear::new();
        assert_eq!(
            identity.spaced_values(5),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
    }

    #[test]
    fn range_mapping_over_the_identity() {
        let identity = Linear::new();
        assert_eq!(identity.value_in(0.0, -100.0..=100.0), -100.0);
        assert_eq!(identity.value_in(0.25, -100.0..=100.0), -50.0);
        assert_eq!(identity.value_in(0.5, -100.0..=100.0), 0.0);
        assert_eq!(identity.value_in(0.75, -100.0..=100.0), 50.0);
        assert_eq!(identity.value_in(1.0, -100.0..=100.0), 100.0);
        assert_eq!(
            identity.spaced_values_in(5, -100.0..=100.0),
            vec![-100.0, -50.0, 0.0, 50.0, 100.0]
        );
    }

    #[test]
    fn values_applies_elementwise() {
        let ease = EaseIn::new(EasingKind::Quad);
        assert_eq!(ease.values(&[0.0, 0.5, 1.0]), vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn time_is_clamped_before_mapping() {
        let identity = Linear::new();
        assert_eq!(identity.value_in(-1.0, 10.0..=20.0), 10.0);
        assert_eq!(identity.value_in(2.0, 10.0..=20.0), 20.0);
    }

    #[test]
    fn point_interpolation() {
        let identity = Linear::new();
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(10.0, 20.0);
        assert_eq!(identity.point_between(0.5, p0, p1), Point::new(5.0, 10.0));
        assert_eq!(
            identity.spaced_points_between(3, p0, p1),
            vec![p0, Point::new(5.0, 10.0), p1]
        );
    }

    #[test]
    fn point_interpolation_follows_the_curve() {
        let ease = EaseInEaseOut::new(EasingKind::Quad);
        let p0 = Point::new(0.0f64, 0.0);
        let p1 = Point::new(100.0, 100.0);
        let halfway = ease.point_between(0.25, p0, p1);
        assert_abs_diff_eq!(halfway.x, 12.5, epsilon = 1e-9);
        assert_abs_diff_eq!(halfway.y, 12.5, epsilon = 1e-9);
    }

    #[test]
    fn size_interpolation() {
        let identity = Linear::new();
        let s0 = Size::new(0.0, 0.0);
        let s1 = Size::new(200.0, 100.0);
        assert_eq!(identity.size_between(0.25, s0, s1), Size::new(50.0, 25.0));
        assert_eq!(
            identity.sizes_between(&[0.0, 1.0], s0, s1),
            vec![s0, s1]
        );
    }

    #[test]
    fn rect_interpolation_is_per_field() {
        let identity = Linear::new();
        let r0 = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r1 = Rect::new(50.0, 100.0, 200.0, 300.0);
        let mid = identity.rect_between(0.5, r0, r1);
        assert_eq!(mid, Rect::new(25.0, 50.0, 150.0, 200.0));
    }

    #[test]
    fn plotting_across_a_size() {
        let identity = Linear::new();
        let size = Size::new(100.0, 50.0);
        assert_eq!(identity.value_in_size(0.0, size), 0.0);
        assert_eq!(identity.value_in_size(50.0, size), 25.0);
        assert_eq!(identity.value_in_size(100.0, size), 50.0);
        // x values outside the plot clamp to its edges
        assert_eq!(identity.value_in_size(-10.0, size), 0.0);
        assert_eq!(identity.value_in_size(400.0, size), 50.0);
    }

    #[test]
    fn plotting_across_a_rect_at_the_origin() {
        let identity = Linear::new();
        let rect = Rect::new(0.0, 10.0, 100.0, 80.0);
        assert_eq!(identity.value_in_rect(0.0, rect), 10.0);
        assert_eq!(identity.value_in_rect(50.0, rect), 50.0);
        assert_eq!(identity.value_in_rect(100.0, rect), 90.0);
    }

    #[test]
    fn combinators_work_through_trait_objects() {
        let curve: Box<dyn Curve> = Box::new(EaseIn::new(EasingKind::Cubic));
        assert_eq!(curve.spaced_values(3), vec![0.0, 0.125, 1.0]);
        assert_eq!(curve.value_in(1.0, 0.0..=10.0), 10.0);
    }
}
