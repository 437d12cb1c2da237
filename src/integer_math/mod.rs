// src/integer_math/mod.rs

pub mod divisors;
pub mod factorization;
pub mod gcd;
pub mod prime_sieve;
pub mod trial_division;

/// Sign normalization used before any factoring: the absolute value as a `u64`.
///
/// Total over `i64`, including `i64::MIN`.
pub fn magnitude(n: i64) -> u64 {
    n.unsigned_abs()
}
