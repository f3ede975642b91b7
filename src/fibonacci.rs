use num_bigint::BigUint;

use crate::math::{power, Matrix, MatrixEntry};

/// Largest index whose Fibonacci number fits in an `i64`; fib(93) exceeds `i64::MAX`.
pub const MAX_FIXED_INDEX: u64 = 92;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("fib({n}) does not fit in a signed 64-bit integer (largest supported index is {max})")]
    Overflow { n: u64, max: u64 },
}

/// Computes fib(n) over any [`MatrixEntry`] type by raising the step matrix to the power n-1.
///
/// Unchecked: with `T = i64` it overflows past `MAX_FIXED_INDEX`, so only the checked
/// [`fast_fib`] and the unbounded [`fast_fib_big`] are exported.
pub(crate) fn fast_fib_with<T: MatrixEntry>(n: u64) -> T {
    if n == 0 {
        return T::zero();
    }

    let mut f = Matrix::step();
    power(&mut f, n - 1);
    log::trace!("computed fib({n}) via matrix exponentiation");

    f.a
}

/// Computes fib(n) in O(log n) using machine integers.
///
/// # Errors
/// Returns [`FibonacciError::Overflow`] when `n > MAX_FIXED_INDEX`; use [`fast_fib_big`] for
/// larger indices.
///
/// # Example
/// ```
/// use fast_fibonacci::fibonacci::{fast_fib, FibonacciError};
/// assert_eq!(fast_fib(92), Ok(7540113804746346429));
/// assert_eq!(fast_fib(93), Err(FibonacciError::Overflow { n: 93, max: 92 }));
/// ```
///
/// `fast_fib` is the only `i64` entry point; the generic driver behind it is not exported:
/// ```compile_fail
/// let _ = fast_fibonacci::fibonacci::fast_fib_with::<i64>(93);
/// ```
pub fn fast_fib(n: u64) -> Result<i64, FibonacciError> {
    if n > MAX_FIXED_INDEX {
        return Err(FibonacciError::Overflow {
            n,
            max: MAX_FIXED_INDEX,
        });
    }
    Ok(fast_fib_with(n))
}

/// Computes fib(n) exactly for any `n`, bounded only by memory and time.
///
/// # Example
/// ```
/// use fast_fibonacci::fibonacci::fast_fib_big;
/// use num_bigint::BigUint;
/// assert_eq!(fast_fib_big(100), BigUint::parse_bytes(b"354224848179261915075", 10).unwrap());
/// ```
pub fn fast_fib_big(n: u64) -> BigUint {
    fast_fib_with(n)
}

/// Naive recursive Fibonacci, O(φ^n). Only meant as a reference for small `n`.
///
/// Shares the fixed-width domain of [`fast_fib`]: `n` must not exceed `MAX_FIXED_INDEX` (92),
/// past which the `i64` sum overflows. Debug builds assert the bound.
pub fn slow_fib(n: u64) -> i64 {
    debug_assert!(
        n <= MAX_FIXED_INDEX,
        "slow_fib({n}) exceeds the i64 domain (n <= {MAX_FIXED_INDEX})"
    );
    if n <= 1 {
        return n as i64;
    }
    slow_fib(n - 1) + slow_fib(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn fast_matches_slow_for_small_n() {
        for n in 0..=30 {
            assert_eq!(fast_fib(n), Ok(slow_fib(n)), "fib({n})");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(fast_fib(0), Ok(0));
        assert_eq!(fast_fib(1), Ok(1));
        assert_eq!(fast_fib(2), Ok(1));
        assert_eq!(fast_fib(10), Ok(55));
        assert_eq!(fast_fib(20), Ok(6765));
        assert_eq!(fast_fib(50), Ok(12586269025));
    }

    #[test]
    fn largest_fixed_width_value() {
        assert_eq!(fast_fib(MAX_FIXED_INDEX), Ok(7540113804746346429));
    }

    #[test]
    fn rejects_indices_past_the_fixed_width_ceiling() {
        assert_eq!(
            fast_fib(93),
            Err(FibonacciError::Overflow { n: 93, max: 92 })
        );
        assert!(fast_fib(u64::MAX).is_err());
        assert_eq!(
            FibonacciError::Overflow { n: 93, max: 92 }.to_string(),
            "fib(93) does not fit in a signed 64-bit integer (largest supported index is 92)"
        );
    }

    #[test]
    fn big_engine_agrees_with_fixed_width_engine() {
        for n in 0..=MAX_FIXED_INDEX {
            let fixed = fast_fib(n).unwrap();
            assert_eq!(fast_fib_big(n), BigUint::from(fixed as u64), "fib({n})");
        }
    }

    #[test]
    fn big_engine_crosses_the_i64_ceiling() {
        let f91 = fast_fib_big(91);
        let f92 = fast_fib_big(92);
        let f93 = fast_fib_big(93);
        assert_eq!(f93, &f91 + &f92);
        assert!(f93 > BigUint::from(i64::MAX as u64));
        assert_eq!(f93.to_string(), "12200160415121876738");
    }

    #[test]
    fn big_known_values() {
        assert!(fast_fib_big(0).is_zero());
        assert_eq!(fast_fib_big(100).to_string(), "354224848179261915075");
        assert_eq!(fast_fib_big(1000).to_string().len(), 209);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(fast_fib(77), fast_fib(77));
        assert_eq!(fast_fib_big(500), fast_fib_big(500));
        // an unrelated call in between leaves nothing behind
        let before = fast_fib_big(300);
        let _ = fast_fib_big(1000);
        assert_eq!(fast_fib_big(300), before);
    }

    #[test]
    fn unchecked_driver_only_backs_checked_entry_points() {
        assert!(fast_fib(93).is_err());
        assert_eq!(fast_fib_with::<BigUint>(93), fast_fib_big(93));
        assert_eq!(fast_fib_with::<i64>(92), fast_fib(92).unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "slow_fib(93) exceeds the i64 domain")]
    fn slow_fib_asserts_the_fixed_width_domain() {
        slow_fib(93);
    }

    #[test]
    fn slow_fib_base_cases() {
        assert_eq!(slow_fib(0), 0);
        assert_eq!(slow_fib(1), 1);
        assert_eq!(slow_fib(25), 75025);
    }
}
