// src/sums/convolution.rs
//
// Dirichlet convolution of arithmetic functions:
// (f * g)(n) = sum over d | n of f(d) g(n / d)

use std::ops::Mul;
use log::debug;
use num::Zero;
use crate::core::error::NumberTheoryError;
use crate::integer_math::factorization::factor_magnitude;

/// The `val` coefficient of the Dirichlet convolution of `fun1` and `fun2`.
///
/// Terms are accumulated in ascending divisor order. The result type is
/// whatever the two functions return, e.g. `i64` or `num::Complex<f64>`;
/// overflow follows that type's native arithmetic.
///
/// # Errors
/// `NumberTheoryError::InvalidArgument` if `val == 0`.
///
/// # Examples
/// ```
/// use ntkit::sums::convolution::convolution_coeff;
///
/// // f(1) + f(2) + f(3) + f(6) with f(x) = 2x
/// let total = convolution_coeff(6, |x| 2 * x as i64, |_| 1).unwrap();
/// assert_eq!(total, 24);
/// ```
pub fn convolution_coeff<T, F, G>(val: u64, mut fun1: F, mut fun2: G) -> Result<T, NumberTheoryError>
where
    T: Zero + Mul<Output = T>,
    F: FnMut(u64) -> T,
    G: FnMut(u64) -> T,
{
    if val == 0 {
        return Err(NumberTheoryError::invalid_argument("convolution_coeff", 0));
    }
    Ok(coefficient(val, &mut fun1, &mut fun2))
}

fn coefficient<T, F, G>(val: u64, fun1: &mut F, fun2: &mut G) -> T
where
    T: Zero + Mul<Output = T>,
    F: FnMut(u64) -> T,
    G: FnMut(u64) -> T,
{
    factor_magnitude(val)
        .divisors()
        .into_iter()
        .fold(T::zero(), |acc, d| acc + fun1(d) * fun2(val / d))
}

/// Like [`convolution_coeff`] for arithmetic functions that can fail.
///
/// The first error returned by `fun1` or `fun2` is passed back unchanged and no
/// further terms are evaluated.
pub fn try_convolution_coeff<T, E, F, G>(val: u64, mut fun1: F, mut fun2: G) -> Result<T, E>
where
    T: Zero + Mul<Output = T>,
    E: From<NumberTheoryError>,
    F: FnMut(u64) -> Result<T, E>,
    G: FnMut(u64) -> Result<T, E>,
{
    if val == 0 {
        return Err(NumberTheoryError::invalid_argument("try_convolution_coeff", 0).into());
    }
    factor_magnitude(val)
        .divisors()
        .into_iter()
        .try_fold(T::zero(), |acc, d| -> Result<T, E> {
            Ok(acc + fun1(d)? * fun2(val / d)?)
        })
}

/// Coefficients `(fun1 * fun2)(n)` for `n = 1..=len`. Empty when `len == 0`.
pub fn dirichlet_convolution<T, F, G>(len: u64, mut fun1: F, mut fun2: G) -> Vec<T>
where
    T: Zero + Mul<Output = T>,
    F: FnMut(u64) -> T,
    G: FnMut(u64) -> T,
{
    debug!("Computing {} Dirichlet convolution coefficients", len);
    (1..=len)
        .map(|n| coefficient(n, &mut fun1, &mut fun2))
        .collect()
}
