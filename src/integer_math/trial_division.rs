// src/integer_math/trial_division.rs
//
// Trial division over a mod-30 wheel.
// Candidates divisible by 2, 3 or 5 are never tried, which leaves 8 of every
// 30 integers (about 27%) to test.

use log::trace;
use crate::core::error::NumberTheoryError;

const SMALL_PRIMES: [u64; 3] = [2, 3, 5];

/// Gaps between consecutive residues coprime to 30, starting from 1.
const WHEEL_INCREMENTS: [u64; 8] = [6, 4, 2, 4, 2, 4, 6, 2];

/// Returns the smallest prime divisor of `num` if that prime is at most `bound`.
///
/// `bound` defaults to `num`. The primes 2, 3 and 5 are checked directly and
/// are reported whatever the bound is.
///
/// If no divisor is found within the bound, `num` itself is returned. That
/// value is only guaranteed to be prime when the search was unbounded (or the
/// bound reached `sqrt(num)`); with a smaller bound it may be composite.
/// `smallest_prime_divisor(1, _)` returns 1.
///
/// # Errors
/// `NumberTheoryError::InvalidArgument` if `num < 1`.
///
/// # Examples
/// ```
/// use ntkit::integer_math::trial_division::smallest_prime_divisor;
///
/// assert_eq!(smallest_prime_divisor(15, None).unwrap(), 3);
/// assert_eq!(smallest_prime_divisor(1001, None).unwrap(), 7);
/// // 11 * 13: no divisor at most 10, so 143 comes back unchanged
/// assert_eq!(smallest_prime_divisor(143, Some(10)).unwrap(), 143);
/// assert!(smallest_prime_divisor(0, None).is_err());
/// ```
pub fn smallest_prime_divisor(num: i64, bound: Option<u64>) -> Result<u64, NumberTheoryError> {
    if num < 1 {
        return Err(NumberTheoryError::invalid_argument("smallest_prime_divisor", num));
    }
    let num = num as u64;
    Ok(wheel_divisor(num, bound.unwrap_or(num)))
}

/// Wheel trial division on an unsigned value. `num` must be at least 1.
pub(crate) fn wheel_divisor(num: u64, bound: u64) -> u64 {
    if num == 1 {
        return 1;
    }
    if let Some(&prime) = SMALL_PRIMES.iter().find(|&&p| num % p == 0) {
        return prime;
    }

    // 7 is the residue after 1, so the cycle is entered at its second gap
    let mut candidate = 7u64;
    for &step in WHEEL_INCREMENTS.iter().cycle().skip(1) {
        if candidate > bound || candidate > num / candidate {
            break;
        }
        if num % candidate == 0 {
            trace!("Found divisor {} of {}", candidate, num);
            return candidate;
        }
        candidate += step;
    }

    num
}

/// Deterministic primality check by unbounded trial division.
///
/// # Examples
/// ```
/// use ntkit::integer_math::trial_division::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    wheel_divisor(n, n) == n
}
