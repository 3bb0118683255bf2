use super::{Curve, CurveConstructionError};
use crate::util::{approx_eq, lerp, unit_clamp};
use error_stack::{Report, Result, ResultExt};

/// A curve interpolating linearly between explicit output values spaced
/// evenly across the unit range.
///
/// Constructed without values it is the identity curve. The control values
/// need not be monotonic, so a curve may dip or overshoot on its way from
/// 0.0 to 1.0
#[derive(Debug, Clone, Default)]
pub struct Linear {
    progress_values: Vec<f64>,
}

impl Linear {
    /// The identity transfer curve (output == t).
    pub fn new() -> Self {
        Self {
            progress_values: vec![],
        }
    }

    /// A curve passing through the given output values at the implicit
    /// positions `i / (len - 1)`. Requires more than 2 values, with the
    /// first equal to 0.0 and the last equal to 1.0 (to 8 decimal places).
    pub fn with_values(values: Vec<f64>) -> Result<Self, CurveConstructionError> {
        if values.len() < 3 {
            return Err(Report::new(CurveConstructionError::TooFewControlValues))
                .attach_printable_lazy(|| {
                    format!(
                        "a piecewise linear curve requires at least 3 control values, got {}",
                        values.len()
                    )
                });
        }
        if !approx_eq(values[0], 0.0, 8) || !approx_eq(values[values.len() - 1], 1.0, 8) {
            return Err(Report::new(CurveConstructionError::BadEndpointValues))
                .attach_printable_lazy(|| {
                    format!(
                        "control values must start at 0.0 and end at 1.0, got {} and {}",
                        values[0],
                        values[values.len() - 1]
                    )
                });
        }
        Ok(Self {
            progress_values: values,
        })
    }
}

impl Curve for Linear {
    fn title(&self) -> String {
        if self.progress_values.is_empty() {
            return "linear".to_owned();
        }
        let values = self
            .progress_values
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join(",");
        format!("linear({})", values)
    }
    fn value(&self, t: f64) -> f64 {
        let t = unit_clamp(t);

        // With less than 3 values just interpret as the identity
        if self.progress_values.len() < 3 {
            return t;
        }
        if approx_eq(t, 0.0, 8) {
            return self.progress_values[0];
        }
        if approx_eq(t, 1.0, 8) {
            return *self.progress_values.last().unwrap();
        }

        let divisor = 1.0 / (self.progress_values.len() - 1) as f64;
        let which = (t / divisor) as usize;

        let x1 = which as f64 * divisor;
        let x2 = (which + 1) as f64 * divisor;
        let y1 = self.progress_values[which];
        let y2 = self.progress_values[which + 1];

        // The new t value is the current t value fractionally between x1 and x2
        let new_t = (t - x1) / (x2 - x1);
        lerp(y1, y2, new_t)
    }
}
