use std::io::{self, Write};

use tracing::{debug, warn};

use crate::{arith::checked_divide, errors::CalcError, fib::fibonacci};

/// Inputs for a single driver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub numbers: Vec<u32>,
    pub dividend: i64,
    pub divisor: i64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            numbers: (1..=8).collect(),
            dividend: 10,
            divisor: 0,
        }
    }
}

/// What happened during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub computed: usize,
    pub failed: usize,
    pub division_caught: bool,
}

pub fn run<W: Write>(out: &mut W, config: &DriverConfig) -> io::Result<Summary> {
    run_with(out, config, fibonacci)
}

/// Runs the demo with the given calculator. Calculation and division errors are
/// printed and recovered; only write failures are returned.
pub fn run_with<W, F>(out: &mut W, config: &DriverConfig, calc: F) -> io::Result<Summary>
where
    W: Write,
    F: Fn(u32) -> Result<u64, CalcError>,
{
    let mut summary = Summary::default();

    writeln!(out, "Testing debugging capabilities...")?;

    for &n in &config.numbers {
        match calc(n) {
            Ok(value) => {
                debug!(n, value, "computed fibonacci");
                writeln!(out, "fibonacci({}) = {}", n, value)?;
                summary.computed += 1;
            }
            Err(e) => {
                warn!(n, error = %e, "fibonacci failed");
                writeln!(out, "Error calculating fibonacci({}): {}", n, e)?;
                summary.failed += 1;
            }
        }
    }

    match checked_divide(config.dividend, config.divisor) {
        Ok(quotient) => {
            writeln!(out, "Division result: {}", quotient)?;
        }
        Err(e) => {
            debug!(dividend = config.dividend, divisor = config.divisor, "caught division error");
            writeln!(out, "Caught division error: {}", e)?;
            summary.division_caught = true;
        }
    }

    out.flush()?;
    Ok(summary)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn capture(config: &DriverConfig) -> (String, Summary) {
        let mut buf = Vec::new();
        let summary = run(&mut buf, config).expect("writing to a Vec never fails");
        (String::from_utf8(buf).unwrap(), summary)
    }

    #[test]
    fn default_run_prints_expected_transcript() {
        let (out, summary) = capture(&DriverConfig::default());
        let expected = "\
Testing debugging capabilities...
fibonacci(1) = 1
fibonacci(2) = 1
fibonacci(3) = 2
fibonacci(4) = 3
fibonacci(5) = 5
fibonacci(6) = 8
fibonacci(7) = 13
fibonacci(8) = 21
Caught division error: division by zero
";
        assert_eq!(out, expected);
        assert_eq!(
            summary,
            Summary { computed: 8, failed: 0, division_caught: true }
        );
    }

    #[test]
    fn default_run_has_ten_lines() {
        let (out, _) = capture(&DriverConfig::default());
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn calculation_error_is_printed_and_loop_continues() {
        let config = DriverConfig { numbers: vec![3, 4, 5], ..Default::default() };
        let mut buf = Vec::new();
        let summary = run_with(&mut buf, &config, |n| {
            if n == 4 { Err(CalcError::Overflow { n }) } else { fibonacci(n) }
        })
        .unwrap();

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "fibonacci(3) = 2");
        assert_eq!(lines[2], "Error calculating fibonacci(4): fibonacci(4) overflows a 64-bit integer");
        assert_eq!(lines[3], "fibonacci(5) = 5");
        assert_eq!(summary.computed, 2);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn nonzero_divisor_prints_quotient() {
        let config = DriverConfig { numbers: vec![], dividend: 10, divisor: 4 };
        let (out, summary) = capture(&config);
        assert_eq!(out, "Testing debugging capabilities...\nDivision result: 2\n");
        assert!(!summary.division_caught);
    }

    #[test]
    fn write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = run(&mut Broken, &DriverConfig::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
