//! Core types for midpi
//!
//! Validated partition counts, integration results and the error type shared
//! by the integrator and the CLI.

use std::fmt;

/// Number of subintervals used by the `midpi` binary.
pub const NUM_STEPS: i64 = 100_000;

/// Number of equal-width subintervals of [0, 1]. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepCount(u64);

impl StepCount {
    /// Validate a partition count
    ///
    /// # Errors
    ///
    /// Returns `MidpiError::InvalidStepCount` if `steps` is zero
    pub fn new(steps: u64) -> Result<Self, MidpiError> {
        if steps == 0 {
            return Err(MidpiError::InvalidStepCount { steps: 0 });
        }
        Ok(Self(steps))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for StepCount {
    type Error = MidpiError;

    fn try_from(steps: i64) -> Result<Self, Self::Error> {
        match u64::try_from(steps) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(MidpiError::InvalidStepCount {
                steps: i128::from(steps),
            }),
        }
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one midpoint-rule integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// step width × accumulated samples
    pub value: f64,
    pub steps: StepCount,
    pub step_width: f64,
}

impl Estimate {
    /// Absolute distance from π
    #[must_use]
    pub fn error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MidpiError {
    #[error("midpi: ERR_STEP_COUNT: step count must be positive, got {steps}")]
    InvalidStepCount { steps: i128 },

    #[error("midpi: ERR_OUTPUT: {0}")]
    Output(#[from] std::io::Error),
}
