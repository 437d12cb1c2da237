// src/integer_math/gcd.rs

use crate::integer_math::magnitude;

/// Returns the non-negative greatest common divisor of `left` and `right`.
///
/// Signs are dropped before the Euclidean loop runs, so `gcd(-1001, 26) == 13`.
/// `gcd(0, 0) == 0` and `gcd(0, x) == |x|`.
///
/// # Examples
/// ```
/// use ntkit::integer_math::gcd::gcd;
///
/// assert_eq!(gcd(12, 30), 6);
/// assert_eq!(gcd(0, 0), 0);
/// assert_eq!(gcd(-1001, 26), 13);
/// ```
pub fn gcd(left: i64, right: i64) -> u64 {
    gcd_magnitude(magnitude(left), magnitude(right))
}

pub(crate) fn gcd_magnitude(mut left: u64, mut right: u64) -> u64 {
    while right != 0 {
        let remainder = left % right;
        left = right;
        right = remainder;
    }
    left
}

pub struct GCD;

impl GCD {
    /// Least common multiple of every value, or `None` if it does not fit in a `u64`.
    pub fn find_lcm(numbers: &[i64]) -> Option<u64> {
        numbers.iter().try_fold(1u64, |acc, &x| Self::lcm_magnitude(acc, magnitude(x)))
    }

    pub fn find_lcm_pair(left: i64, right: i64) -> Option<u64> {
        Self::lcm_magnitude(magnitude(left), magnitude(right))
    }

    fn lcm_magnitude(left: u64, right: u64) -> Option<u64> {
        if left == 0 || right == 0 {
            return Some(0);
        }
        (left / gcd_magnitude(left, right)).checked_mul(right)
    }

    pub fn find_gcd(numbers: &[i64]) -> u64 {
        numbers.iter().fold(0u64, |acc, &x| gcd_magnitude(acc, magnitude(x)))
    }

    pub fn find_gcd_pair(left: i64, right: i64) -> u64 {
        gcd(left, right)
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
