//! Midpoint-rule integrator for midpi
//!
//! Approximates π as the integral of 4/(1+x²) over [0, 1] and times the
//! computation with a monotonic clock.

use midpi_core::{Estimate, MidpiError, StepCount};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The integrand whose integral over [0, 1] is π.
#[must_use]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Sequential midpoint-rule integrator over [0, 1]
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    steps: StepCount,
}

impl Integrator {
    #[must_use]
    pub const fn new(steps: StepCount) -> Self {
        Self { steps }
    }

    #[must_use]
    pub const fn steps(&self) -> StepCount {
        self.steps
    }

    #[must_use]
    pub fn step_width(&self) -> f64 {
        1.0 / self.steps.get() as f64
    }

    /// Midpoints of every subinterval, in ascending index order
    pub fn sample_points(&self) -> impl Iterator<Item = f64> {
        let width = self.step_width();
        (0..self.steps.get()).map(move |i| (i as f64 + 0.5) * width)
    }

    /// Integrate 4/(1+x²), giving the π approximation.
    #[must_use]
    pub fn integrate(&self) -> Estimate {
        self.integrate_with(integrand)
    }

    /// Apply the midpoint rule to an arbitrary integrand over [0, 1].
    ///
    /// Samples are added one at a time from index 0 upward, so the result is
    /// reproducible bit for bit.
    #[must_use]
    pub fn integrate_with<F>(&self, f: F) -> Estimate
    where
        F: Fn(f64) -> f64,
    {
        let step_width = self.step_width();
        debug!(steps = self.steps.get(), step_width, "integrating");

        let sum = self.sample_points().fold(0.0, |acc, x| acc + f(x));

        Estimate {
            value: step_width * sum,
            steps: self.steps,
            step_width,
        }
    }
}

/// Outcome of a timed run
#[derive(Debug, Clone, Copy)]
pub struct Run {
    pub estimate: Estimate,
    pub elapsed: Duration,
}

impl Run {
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Fixed-point rendering with six fractional digits, as `%f` prints.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    format!("{value:.6}")
}

/// Integrate and write the two-line report to `out`
///
/// The clock starts right before the computation and stops after the estimate
/// line has been written; the elapsed seconds form the second line.
///
/// # Errors
///
/// Returns `MidpiError::Output` if writing to `out` fails
pub fn run_timed<W: Write>(integrator: &Integrator, out: &mut W) -> Result<Run, MidpiError> {
    let start = Instant::now();
    let estimate = integrator.integrate();
    writeln!(out, "{}", format_fixed(estimate.value))?;
    let elapsed = start.elapsed();
    writeln!(out, "{}", format_fixed(elapsed.as_secs_f64()))?;
    out.flush()?;

    info!(
        steps = estimate.steps.get(),
        pi = estimate.value,
        error = estimate.error(),
        elapsed_secs = elapsed.as_secs_f64(),
        "integration finished"
    );

    Ok(Run { estimate, elapsed })
}
