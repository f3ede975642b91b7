use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A value that can be stored in a cell of a [`Matrix`].
///
/// `dot` computes `x0 * y0 + x1 * y1` from references, so big integers are multiplied without
/// cloning their operands.
pub trait MatrixEntry: Clone + Zero + One {
    fn dot(x0: &Self, y0: &Self, x1: &Self, y1: &Self) -> Self;
}

impl MatrixEntry for i64 {
    fn dot(x0: &Self, y0: &Self, x1: &Self, y1: &Self) -> Self {
        x0 * y0 + x1 * y1
    }
}

impl MatrixEntry for BigUint {
    fn dot(x0: &Self, y0: &Self, x1: &Self, y1: &Self) -> Self {
        x0 * y0 + x1 * y1
    }
}

// Matrix structure for 2x2 matrices, laid out as [[a, b], [c, d]]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: MatrixEntry> Matrix<T> {
    /// The Fibonacci transition matrix [[1, 1], [1, 0]].
    pub fn step() -> Self {
        Matrix {
            a: T::one(),
            b: T::one(),
            c: T::one(),
            d: T::zero(),
        }
    }

    pub fn identity() -> Self {
        Matrix {
            a: T::one(),
            b: T::zero(),
            c: T::zero(),
            d: T::one(),
        }
    }
}

// Matrix multiplication for 2x2 matrices
pub fn matrix_mult<T: MatrixEntry>(m1: &Matrix<T>, m2: &Matrix<T>) -> Matrix<T> {
    Matrix {
        a: T::dot(&m1.a, &m2.a, &m1.b, &m2.c),
        b: T::dot(&m1.a, &m2.b, &m1.b, &m2.d),
        c: T::dot(&m1.c, &m2.a, &m1.d, &m2.c),
        d: T::dot(&m1.c, &m2.b, &m1.d, &m2.d),
    }
}

/// Replaces `f` with `f × m`.
///
/// All four cells of the product are computed before `f` is touched; the old cells are dropped
/// when the product is moved in.
pub fn multiply<T: MatrixEntry>(f: &mut Matrix<T>, m: &Matrix<T>) {
    let product = matrix_mult(f, m);
    *f = product;
}

/// Replaces `f` with `f × f`.
pub fn square<T: MatrixEntry>(f: &mut Matrix<T>) {
    let product = matrix_mult(f, f);
    *f = product;
}

/// Raises `f` to the `n`-th power in place using O(log n) multiplications.
///
/// The value `f` holds on entry is the base: `power(f, 0)` yields the identity matrix and
/// `power(f, 1)` leaves `f` untouched.
///
/// # Example
/// ```
/// use fast_fibonacci::math::{power, Matrix};
/// let mut f = Matrix::<i64>::step();
/// power(&mut f, 9);
/// // step^9 = [[fib(10), fib(9)], [fib(9), fib(8)]]
/// assert_eq!(f, Matrix { a: 55, b: 34, c: 34, d: 21 });
/// ```
pub fn power<T: MatrixEntry>(f: &mut Matrix<T>, n: u64) {
    if n == 0 {
        *f = Matrix::identity();
        return;
    }
    let base = f.clone();
    raise(f, &base, n);
}

// Requires `f == base` on entry, so the n == 1 case is already done
fn raise<T: MatrixEntry>(f: &mut Matrix<T>, base: &Matrix<T>, n: u64) {
    if n == 1 {
        return;
    }
    raise(f, base, n / 2);
    square(f);
    if n % 2 == 1 {
        multiply(f, base);
    }
}
