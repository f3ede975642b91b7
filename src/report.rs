//! Console report comparing the naive baseline with both fast engines.
//!
//! Every writer takes a generic [`Write`] so the report can be rendered into a buffer as well as
//! to stdout.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::fibonacci::{fast_fib, fast_fib_big, slow_fib, MAX_FIXED_INDEX};

/// Decimal representations longer than this are shortened by [`display_digits`].
pub const DISPLAY_LIMIT: usize = 100;
/// Number of leading and trailing digits kept when a value is shortened.
pub const DISPLAY_EDGE: usize = 50;

/// The hardcoded indices the report runs through.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkPlan {
    /// Indices computed by both the naive and the fast fixed-width engine.
    pub comparison: &'static [u64],
    /// Indices too large for the naive engine, computed by the fixed-width engine only.
    pub large: &'static [u64],
    /// Indices computed by the arbitrary-precision engine.
    pub big: &'static [u64],
}

impl BenchmarkPlan {
    pub const DEFAULT: BenchmarkPlan = BenchmarkPlan {
        comparison: &[30, 35, 40],
        large: &[50, 75, 90],
        big: &[50, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000],
    };
}

impl Default for BenchmarkPlan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runs `f` and returns its result together with the elapsed wall-clock time.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Renders `value` in decimal, keeping only the first and last [`DISPLAY_EDGE`] digits when it
/// has more than [`DISPLAY_LIMIT`] of them. Returns the rendered text and the full digit count.
pub fn display_digits(value: &BigUint) -> (String, usize) {
    let digits = value.to_string();
    let len = digits.len();
    if len <= DISPLAY_LIMIT {
        return (digits, len);
    }
    // decimal digits are ASCII, so byte offsets are char boundaries
    let shortened = format!(
        "{}...{}",
        &digits[..DISPLAY_EDGE],
        &digits[len - DISPLAY_EDGE..]
    );
    (shortened, len)
}

fn seconds(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}

/// Writes the fixed-width section: the naive/fast speed comparison, the large values and the
/// 64-bit ceiling.
pub fn write_fixed_report<W: Write>(out: &mut W, plan: &BenchmarkPlan) -> io::Result<()> {
    writeln!(out, "=== FAST FIBONACCI: O(log n) Matrix Exponentiation ===")?;
    writeln!(out)?;

    writeln!(out, "SPEED COMPARISON:")?;
    for &n in plan.comparison {
        let (slow, elapsed) = timed(|| slow_fib(n));
        writeln!(out, "SLOW fib({n}) = {slow}  [{}]", seconds(elapsed))?;
        log::debug!("slow_fib({n}) took {elapsed:?}");

        let (fast, elapsed) = timed(|| fast_fib(n));
        match fast {
            Ok(value) => writeln!(out, "FAST fib({n}) = {value}  [{}]", seconds(elapsed))?,
            Err(e) => writeln!(out, "FAST fib({n}) failed: {e}")?,
        }
        writeln!(out)?;
    }

    writeln!(out, "LARGE VALUES (slow version would take years):")?;
    for &n in plan.large {
        let (fast, elapsed) = timed(|| fast_fib(n));
        match fast {
            Ok(value) => writeln!(out, "fib({n}) = {value}  [{}]", seconds(elapsed))?,
            Err(e) => writeln!(out, "fib({n}) failed: {e}")?,
        }
    }
    writeln!(out)?;

    match fast_fib(MAX_FIXED_INDEX) {
        Ok(value) => writeln!(out, "Max value: fib({MAX_FIXED_INDEX}) = {value}")?,
        Err(e) => writeln!(out, "Max value unavailable: {e}")?,
    }
    if let Err(e) = fast_fib(MAX_FIXED_INDEX + 1) {
        writeln!(out, "Beyond that: {e}")?;
    }
    writeln!(out)
}

/// Writes the arbitrary-precision section. Values up to fib(100) are printed in full, larger ones
/// through [`display_digits`] with their digit count.
pub fn write_big_report<W: Write>(out: &mut W, plan: &BenchmarkPlan) -> io::Result<()> {
    writeln!(out, "=== FAST FIBONACCI (ARBITRARY PRECISION) ===")?;
    writeln!(out)?;

    for &n in plan.big {
        let (value, elapsed) = timed(|| fast_fib_big(n));
        log::debug!("fast_fib_big({n}) took {elapsed:?}, {} bits", value.bits());

        if n <= 100 {
            writeln!(out, "fib({n}) = {value}  [{}]", seconds(elapsed))?;
        } else {
            let (digits, len) = display_digits(&value);
            writeln!(out, "fib({n}) = {digits}")?;
            writeln!(out, "  [{len} digits, {}]", seconds(elapsed))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes the complete report for `plan`.
pub fn write_report<W: Write>(out: &mut W, plan: &BenchmarkPlan) -> io::Result<()> {
    write_fixed_report(out, plan)?;
    write_big_report(out, plan)
}
