// src/integer_math/divisors.rs

use log::debug;
use crate::integer_math::factorization::{factor, Factorization};

impl Factorization {
    /// All positive divisors, ascending.
    ///
    /// Each divisor picks an exponent in `0..=e` for every prime power, so the
    /// list has `divisor_count()` entries. The empty factorization yields `[1]`.
    pub fn divisors(&self) -> Vec<u64> {
        let mut divisors = Vec::with_capacity(self.divisor_count() as usize);
        divisors.push(1u64);

        for pp in self.iter() {
            let current = divisors.len();
            let mut power = 1u64;
            for _ in 0..pp.exponent {
                power *= pp.prime;
                for i in 0..current {
                    let divisor = divisors[i] * power;
                    divisors.push(divisor);
                }
            }
        }

        divisors.sort_unstable();
        divisors
    }
}

/// Every positive divisor of `|num|`, ascending.
///
/// `0`, `1` and `-1` factor to the empty product, so they all give `[1]`.
///
/// # Examples
/// ```
/// use ntkit::integer_math::divisors::enumerate_divisors;
///
/// assert_eq!(enumerate_divisors(6), vec![1, 2, 3, 6]);
/// assert_eq!(enumerate_divisors(30), vec![1, 2, 3, 5, 6, 10, 15, 30]);
/// assert_eq!(enumerate_divisors(0), vec![1]);
/// ```
pub fn enumerate_divisors(num: i64) -> Vec<u64> {
    let divisors = factor(num).divisors();
    debug!("{} has {} divisors", num, divisors.len());
    divisors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_divisors() {
        assert_eq!(enumerate_divisors(6), vec![1, 2, 3, 6]);
        assert_eq!(enumerate_divisors(30), vec![1, 2, 3, 5, 6, 10, 15, 30]);
        assert_eq!(enumerate_divisors(16), vec![1, 2, 4, 8, 16]);
        assert_eq!(enumerate_divisors(-12), vec![1, 2, 3, 4, 6, 12]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(enumerate_divisors(1), vec![1]);
        assert_eq!(enumerate_divisors(0), vec![1]);
        assert_eq!(enumerate_divisors(-1), vec![1]);
    }

    #[test]
    fn test_matches_naive_divisors() {
        for n in 1..500i64 {
            let naive: Vec<u64> = (1..=n as u64).filter(|d| n as u64 % d == 0).collect();
            assert_eq!(enumerate_divisors(n), naive, "n = {}", n);
        }
    }

    #[test]
    fn test_largest_value_fits() {
        let divisors = enumerate_divisors(i64::MIN);
        assert_eq!(divisors.len(), 64);
        assert_eq!(divisors.last(), Some(&(1u64 << 63)));
    }
}
