//! Integration tests for the timed two-line report

use midpi_core::StepCount;
use midpi_integrator::{Integrator, Run, run_timed};
use proptest::prelude::*;

fn timed(steps: u64) -> (Run, String) {
    let integrator = Integrator::new(StepCount::new(steps).unwrap());
    let mut out = Vec::new();
    let run = run_timed(&integrator, &mut out).unwrap();
    (run, String::from_utf8(out).unwrap())
}

#[test]
fn test_report_for_default_steps() {
    let (run, text) = timed(100_000);

    assert_eq!(text.lines().next(), Some("3.141593"));
    assert!(run.elapsed_secs() >= 0.0);
}

#[test]
fn test_elapsed_grows_with_step_count() {
    let small = (0..3)
        .map(|_| timed(1_000).0.elapsed)
        .min()
        .unwrap();
    let large = timed(10_000_000).0.elapsed;

    assert!(large > small);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_report_is_two_decimal_lines(steps in 1_u64..50_000) {
        let (run, text) = timed(steps);
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), 2);
        let value: f64 = lines[0].parse().unwrap();
        let elapsed: f64 = lines[1].parse().unwrap();
        prop_assert!((value - run.estimate.value).abs() <= 5e-7);
        prop_assert!(elapsed >= 0.0);
    }
}
