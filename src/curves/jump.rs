use super::{Curve, CurveConstructionError};
use crate::util::unit_clamp;
use error_stack::{Report, Result, ResultExt};
use std::fmt::{Display, Formatter};

/// Governs how the steps of a [`Jump`] curve align to the unit output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpPolicy {
    /// The first step is already elevated at t = 0.0
    Start,
    /// Output starts at 0.0 and rises at the end of each step
    End,
    /// First and last steps sit exactly on 0.0 and 1.0
    None,
    /// An extra step is inserted at both ends
    Both,
}

impl Display for JumpPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JumpPolicy::Start => "start",
            JumpPolicy::End => "end",
            JumpPolicy::None => "none",
            JumpPolicy::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Quantizes progress into a fixed number of equidistant plateaus.
#[derive(Debug, Clone, Copy)]
pub struct Jump {
    steps: usize,
    policy: JumpPolicy,
    chunk_size: f64,
}

impl Jump {
    /// Create a step curve. Fails if `steps` is less than 2.
    pub fn new(policy: JumpPolicy, steps: usize) -> Result<Self, CurveConstructionError> {
        if steps < 2 {
            return Err(Report::new(CurveConstructionError::TooFewSteps))
                .attach_printable_lazy(|| {
                    format!("a jump curve requires at least 2 steps, got {}", steps)
                });
        }
        Ok(Self {
            steps,
            policy,
            chunk_size: 1.0 / steps as f64,
        })
    }
}

impl Curve for Jump {
    fn title(&self) -> String {
        format!("jump-{}-{}", self.policy, self.steps)
    }
    fn value(&self, t: f64) -> f64 {
        let t = unit_clamp(t);

        // Which chunk does the value fall in?
        let which = (t / self.chunk_size).floor();

        match self.policy {
            JumpPolicy::Start => (self.chunk_size + which * self.chunk_size).min(1.0),
            JumpPolicy::End => (which * self.chunk_size).min(1.0),
            JumpPolicy::None => {
                let v_div = 1.0 / (self.steps - 1) as f64;
                (which * v_div).min(1.0)
            }
            JumpPolicy::Both => {
                let v_div = 1.0 / (self.steps + 1) as f64;
                (v_div + which * v_div).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_steps_is_rejected() {
        assert!(Jump::new(JumpPolicy::Start, 0).is_err());
        assert!(Jump::new(JumpPolicy::End, 1).is_err());
        assert!(Jump::new(JumpPolicy::End, 2).is_ok());
    }

    #[test]
    fn end_policy_rises_at_each_boundary() {
        let jump = Jump::new(JumpPolicy::End, 4).unwrap();
        assert_eq!(jump.value(0.0), 0.0);
        assert_eq!(jump.value(0.3), 0.25);
        assert_eq!(jump.value(0.6), 0.5);
        assert_eq!(jump.value(0.8), 0.75);
        assert_eq!(jump.value(1.0), 1.0);
    }

    #[test]
    fn start_policy_is_elevated_at_zero() {
        let jump = Jump::new(JumpPolicy::Start, 2).unwrap();
        assert_eq!(jump.value(0.0), 0.5);
        assert_eq!(jump.value(0.49), 0.5);
        assert_eq!(jump.value(0.5), 1.0);
        assert_eq!(jump.value(1.0), 1.0);
    }

    #[test]
    fn none_policy_pins_both_endpoints() {
        let jump = Jump::new(JumpPolicy::None, 5).unwrap();
        assert_eq!(jump.value(0.0), 0.0);
        assert_eq!(jump.value(0.1), 0.0);
        assert_eq!(jump.value(0.3), 0.25);
        assert_eq!(jump.value(0.5), 0.5);
        assert_eq!(jump.value(1.0), 1.0);
    }

    #[test]
    fn both_policy_inserts_steps_at_the_ends() {
        let jump = Jump::new(JumpPolicy::Both, 3).unwrap();
        assert_eq!(jump.value(0.0), 0.25);
        assert_eq!(jump.value(0.5), 0.5);
        assert_eq!(jump.value(0.7), 0.75);
        assert_eq!(jump.value(1.0), 1.0);
    }

    #[test]
    fn title_encodes_policy_and_steps() {
        assert_eq!(Jump::new(JumpPolicy::Both, 3).unwrap().title(), "jump-both-3");
    }
}
