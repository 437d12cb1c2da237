// src/integer_math/factorization.rs

use std::fmt;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use crate::core::error::NumberTheoryError;
use crate::integer_math::magnitude;
use crate::integer_math::trial_division::wheel_divisor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrimePower {
    pub prime: u64,
    pub exponent: u32,
}

impl PrimePower {
    pub fn new(prime: u64, exponent: u32) -> Self {
        PrimePower { prime, exponent }
    }

    /// prime^exponent, or `None` on overflow.
    pub fn value(&self) -> Option<u64> {
        self.prime.checked_pow(self.exponent)
    }
}

impl fmt::Display for PrimePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.prime, self.exponent)
    }
}

/// Prime-power factorization, ascending by prime.
///
/// The empty factorization stands for 1 (and for the degenerate inputs 0 and -1).
/// Deserialization goes through [`Factorization::from_prime_powers`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PrimePower>")]
pub struct Factorization(Vec<PrimePower>);

impl Factorization {
    pub fn new() -> Self {
        Factorization(Vec::new())
    }

    /// Builds a factorization from caller-supplied prime powers.
    ///
    /// Primes must be prime and strictly increasing, every exponent at least 1,
    /// and the product must fit in a `u64`.
    pub fn from_prime_powers(powers: Vec<PrimePower>) -> Result<Self, NumberTheoryError> {
        let invalid = |reason, prime| NumberTheoryError::InvalidFactorization { reason, prime };

        let mut product = 1u64;
        let mut previous = None;
        for pp in &powers {
            if pp.exponent == 0 {
                return Err(invalid("exponent must be at least 1", pp.prime));
            }
            if previous.map_or(false, |p| p >= pp.prime) {
                return Err(invalid("primes must be strictly increasing", pp.prime));
            }
            product = pp
                .value()
                .and_then(|v| product.checked_mul(v))
                .ok_or_else(|| invalid("product does not fit in a u64", pp.prime))?;
            previous = Some(pp.prime);
        }
        // trial division last, once the product is known to fit
        if let Some(pp) = powers.iter().find(|pp| pp.prime < 2 || wheel_divisor(pp.prime, pp.prime) != pp.prime) {
            return Err(invalid("not a prime", pp.prime));
        }

        Ok(Factorization(powers))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrimePower> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(prime, exponent)` pairs in ascending prime order.
    pub fn pairs(&self) -> Vec<(u64, u32)> {
        self.0.iter().map(|pp| (pp.prime, pp.exponent)).collect()
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().map(|pp| pp.prime)
    }

    /// Product of every prime power, or `None` if it does not fit in a `u64`.
    pub fn value(&self) -> Option<u64> {
        self.0
            .iter()
            .try_fold(1u64, |acc, pp| pp.value().and_then(|v| acc.checked_mul(v)))
    }

    /// Number of positive divisors, the product of `exponent + 1`.
    pub fn divisor_count(&self) -> u64 {
        self.0.iter().map(|pp| u64::from(pp.exponent) + 1).product()
    }

    fn push(&mut self, prime: u64, exponent: u32) {
        trace!("Recording prime power {}^{}", prime, exponent);
        self.0.push(PrimePower::new(prime, exponent));
    }
}

impl TryFrom<Vec<PrimePower>> for Factorization {
    type Error = NumberTheoryError;

    fn try_from(powers: Vec<PrimePower>) -> Result<Self, Self::Error> {
        Factorization::from_prime_powers(powers)
    }
}

impl<'a> IntoIterator for &'a Factorization {
    type Item = &'a PrimePower;
    type IntoIter = std::slice::Iter<'a, PrimePower>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        let factors: Vec<String> = self.0.iter().map(|pp| pp.to_string()).collect();
        write!(f, "{}", factors.join(" * "))
    }
}

/// Factors `num` into prime powers, ascending by prime.
///
/// The sign is dropped first; `factor(0)`, `factor(1)` and `factor(-1)` are empty.
///
/// # Examples
/// ```
/// use ntkit::integer_math::factorization::factor;
///
/// assert_eq!(factor(100).pairs(), vec![(2, 2), (5, 2)]);
/// assert_eq!(factor(-7007).pairs(), vec![(7, 2), (11, 1), (13, 1)]);
/// assert!(factor(1).is_empty());
/// ```
pub fn factor(num: i64) -> Factorization {
    factor_magnitude(magnitude(num))
}

/// Factors a non-negative value. 0 and 1 give the empty factorization.
pub fn factor_magnitude(num: u64) -> Factorization {
    let mut factorization = Factorization::new();
    if num <= 1 {
        return factorization;
    }

    let mut remaining = num;
    while remaining != 1 {
        // unbounded, so this is always a true prime divisor of remaining
        let prime = wheel_divisor(remaining, remaining);
        let mut exponent = 1;
        remaining /= prime;
        while remaining % prime == 0 {
            exponent += 1;
            remaining /= prime;
        }
        factorization.push(prime, exponent);
    }

    debug!("Factored {} -> {}", num, factorization);
    factorization
}
