//! # Fast Fibonacci Library
//!
//! This library computes individual Fibonacci numbers in O(log n) multiplications by fast
//! exponentiation of the 2x2 transition matrix `[[1, 1], [1, 0]]`, and contrasts it with the
//! naive O(φ^n) recursive definition.
//!
//! ## Key Features
//! - **Matrix Exponentiation**: `step^(n-1)` holds fib(n) in its top-left cell. The power is
//!   computed by recursive halving and squaring.
//! - **Two Engines**: the same algorithm over machine integers (`i64`) and over arbitrary
//!   precision integers (`num_bigint::BigUint`).
//! - **Naive Baseline**: the textbook recursion, used as a correctness oracle and as the slow
//!   side of the speed comparison.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: returned by the fixed-width engine when fib(n) would not fit in an `i64`
//!   (any n above 92).
//!
//! ### `math`
//! `Matrix`, `matrix_mult`, the in-place `multiply` and `square`, and the recursive `power`.
//! Cells are any `MatrixEntry` type.
//!
//! ### `fibonacci`
//! - `fast_fib`: fixed width, valid for `0 <= n <= 92`.
//! - `fast_fib_big`: arbitrary precision, valid for any `n`.
//! - `slow_fib`: the naive recursion.
//!
//! ### `report`
//! The console report printed by the `fast_fibonacci` binary: timings for both engines and
//! shortened output for very large values.
//!
//! ## Usage Example
//! ```rust
//! use fast_fibonacci::fibonacci::{fast_fib, fast_fib_big, slow_fib};
//! assert_eq!(fast_fib(25), Ok(slow_fib(25)));
//! assert_eq!(fast_fib_big(1000).to_string().len(), 209);
//! ```

pub mod fibonacci;
pub mod math;
pub mod report;

pub use fibonacci::{fast_fib, fast_fib_big, slow_fib, FibonacciError, MAX_FIXED_INDEX};
