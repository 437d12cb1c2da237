// tests/factorization_tests.rs
//
// Integration tests for the factorization pipeline: gcd, smallest prime
// divisor, factor and divisor enumeration working together.

use ntkit::integer_math::factorization::factor_magnitude;
use ntkit::{enumerate_divisors, factor, gcd, is_prime, smallest_prime_divisor, NumberTheoryError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(test)]
mod factorization_tests {
    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x6e74_6b69_74)
    }

    #[test]
    fn test_gcd_properties() {
        let mut rng = rng();
        for _ in 0..500 {
            let a: i64 = rng.random_range(-100_000..100_000);
            let b: i64 = rng.random_range(-100_000..100_000);
            let g = gcd(a, b);

            if a == 0 && b == 0 {
                assert_eq!(g, 0);
                continue;
            }
            assert!(g > 0);
            assert_eq!(a.unsigned_abs() % g, 0, "gcd({}, {}) = {} must divide a", a, b, g);
            assert_eq!(b.unsigned_abs() % g, 0, "gcd({}, {}) = {} must divide b", a, b, g);
            // the cofactors share nothing, so no larger common divisor exists
            assert_eq!(gcd((a.unsigned_abs() / g) as i64, (b.unsigned_abs() / g) as i64), 1);
        }
    }

    #[test]
    fn test_documented_values() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 30), 6);
        assert_eq!(gcd(-1001, 26), 13);

        assert_eq!(smallest_prime_divisor(15, None), Ok(3));
        assert_eq!(smallest_prime_divisor(1001, None), Ok(7));
        assert!(matches!(
            smallest_prime_divisor(0, None),
            Err(NumberTheoryError::InvalidArgument { .. })
        ));

        assert_eq!(factor(100).pairs(), vec![(2, 2), (5, 2)]);
        assert_eq!(factor(-7007).pairs(), vec![(7, 2), (11, 1), (13, 1)]);
        assert!(factor(1).pairs().is_empty());

        assert_eq!(enumerate_divisors(6), vec![1, 2, 3, 6]);
        assert_eq!(enumerate_divisors(30), vec![1, 2, 3, 5, 6, 10, 15, 30]);
    }

    #[test]
    fn test_factorization_reconstructs_input() {
        let mut rng = rng();
        for _ in 0..300 {
            let n: i64 = rng.random_range(2..10_000_000);
            let sign = if rng.random_bool(0.5) { -1 } else { 1 };
            let f = factor(sign * n);

            assert_eq!(f.value(), Some(n as u64), "factor({}) = {}", sign * n, f);
            let primes: Vec<u64> = f.primes().collect();
            assert!(primes.windows(2).all(|w| w[0] < w[1]), "primes not increasing: {:?}", primes);
            assert!(primes.iter().all(|&p| is_prime(p as i64)));
            assert!(f.iter().all(|pp| pp.exponent >= 1));
        }
    }

    #[test]
    fn test_smallest_prime_divisor_is_first_factor() {
        for n in 2..5_000i64 {
            let spd = smallest_prime_divisor(n, None).unwrap();
            assert_eq!(factor(n).primes().next(), Some(spd), "n = {}", n);
        }
    }

    #[test]
    fn test_divisor_count_matches_exponents() {
        let mut rng = rng();
        for _ in 0..200 {
            let n: i64 = rng.random_range(1..1_000_000);
            let f = factor(n);
            let expected: u64 = f.iter().map(|pp| u64::from(pp.exponent) + 1).product();
            let divisors = enumerate_divisors(n);

            assert_eq!(divisors.len() as u64, expected);
            assert!(divisors.windows(2).all(|w| w[0] < w[1]));
            assert!(divisors.iter().all(|d| n as u64 % d == 0));
            assert_eq!(divisors.first(), Some(&1));
            assert_eq!(divisors.last(), Some(&(n as u64)));
        }
    }

    #[test]
    fn test_highly_composite() {
        // 720720 = 2^4 * 3^2 * 5 * 7 * 11 * 13
        let f = factor(720_720);
        assert_eq!(f.pairs(), vec![(2, 4), (3, 2), (5, 1), (7, 1), (11, 1), (13, 1)]);
        assert_eq!(enumerate_divisors(720_720).len(), 240);
    }

    #[test]
    fn test_large_magnitudes() {
        // a prime square runs the wheel all the way to its square root
        let p = 1_000_003u64;
        assert_eq!(factor_magnitude(p * p).pairs(), vec![(p, 2)]);
        assert_eq!(enumerate_divisors((p * p) as i64), vec![1, p, p * p]);
        assert_eq!(factor(i64::MAX).pairs(), vec![(7, 2), (73, 1), (127, 1), (337, 1), (92_737, 1), (649_657, 1)]);
    }
}
