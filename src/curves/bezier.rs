use super::{Curve, CurveConstructionError};
use crate::point::Point;
use crate::util::unit_clamp;
use error_stack::{Report, Result, ResultExt};

/// A four-point Bernstein cubic with fixed endpoints.
#[derive(Debug, Clone, Copy)]
struct BezierSpan {
    p0: Point<f64>,
    p1: Point<f64>,
    p2: Point<f64>,
    p3: Point<f64>,
}

impl BezierSpan {
    /// `B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃`
    fn point_at(&self, t: f64) -> Point<f64> {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point::new(
            (self.p0.x * mt3)
                + (3.0 * self.p1.x * mt2 * t)
                + (3.0 * self.p2.x * mt * t2)
                + (self.p3.x * t3),
            (self.p0.y * mt3)
                + (3.0 * self.p1.y * mt2 * t)
                + (3.0 * self.p2.y * mt * t2)
                + (self.p3.y * t3),
        )
    }
}

/// A cubic Bézier easing curve.
///
/// The endpoints are fixed at P0 = (0, 0) and P3 = (1, 1); the caller
/// supplies the two interior control points. The x coordinates of the
/// interior points must lie within the unit range so the curve's
/// x-component stays weakly monotonic.
///
/// The clamped input is used as the Bézier *parameter* directly and the
/// y-component of the resulting point is returned. No root-finding against
/// the x-component is performed, so output differs from the CSS
/// `cubic-bezier()` timing function whenever the x-component is not linear
/// in the parameter.
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    span: BezierSpan,
}

impl CubicBezier {
    /// Create a cubic Bézier curve from the interior control points
    /// (x1, y1) and (x2, y2). Fails if x1 or x2 falls outside 0.0 ..= 1.0
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, CurveConstructionError> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(Report::new(CurveConstructionError::ControlPointOutOfRange))
                .attach_printable_lazy(|| {
                    format!(
                        "control point x coordinates must lie within 0.0 ..= 1.0, got {} and {}",
                        x1, x2
                    )
                });
        }
        Ok(Self {
            span: BezierSpan {
                p0: Point::new(0.0, 0.0),
                p1: Point::new(x1, y1),
                p2: Point::new(x2, y2),
                p3: Point::new(1.0, 1.0),
            },
        })
    }
}

impl Curve for CubicBezier {
    fn title(&self) -> String {
        format!(
            "CubicBezier({},{},{},{})",
            self.span.p1.x, self.span.p1.y, self.span.p2.x, self.span.p2.y
        )
    }
    fn value(&self, t: f64) -> f64 {
        self.span.point_at(unit_clamp(t)).y
    }
}
