// src/integer_math/prime_sieve.rs
//
// Sieve of Eratosthenes over the integers coprime to 6.
// Bit i stands for (3i + 1) | 1, i.e. 1, 5, 7, 11, 13, 17, ...
// Multiples of 2 and 3 are never stored, so the table holds limit / 3 bits.

use bitvec::prelude::*;
use log::debug;
use num::integer::Roots;

pub struct PrimeSieve {
    limit: u64,
    residues: BitVec,
}

impl PrimeSieve {
    /// Sieves every prime strictly below `limit`.
    pub fn new(limit: u64) -> Self {
        let len = (limit / 3) as usize + usize::from(limit % 6 == 2);
        let mut residues = bitvec![1; len];

        let root = limit.sqrt() as usize;
        for i in 1..=root / 3 {
            if !residues[i] {
                continue;
            }
            let k = (3 * i + 1) | 1;
            let step = 2 * k;
            // the two residue classes of k's multiples that are coprime to 6
            let first = k * k / 3;
            let second = k * (k - 2 * (i & 1) + 4) / 3;
            for start in [first, second] {
                let mut j = start;
                while j < len {
                    residues.set(j, false);
                    j += step;
                }
            }
        }

        debug!("Sieved primes below {} using {} bits", limit, len);
        PrimeSieve { limit, residues }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Primes below the limit, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        let limit = self.limit;
        [2u64, 3]
            .into_iter()
            .filter(move |&p| p < limit)
            .chain(
                self.residues
                    .iter_ones()
                    .filter(|&i| i > 0)
                    .map(|i| ((3 * i + 1) | 1) as u64),
            )
    }

    /// Whether `n` is one of the sieved primes. Always false for `n >= limit`.
    pub fn contains(&self, n: u64) -> bool {
        if n >= self.limit {
            return false;
        }
        match n % 6 {
            _ if n == 2 || n == 3 => true,
            1 | 5 if n > 1 => self.residues[(n / 3) as usize],
            _ => false,
        }
    }

    /// Primes `p` with `floor <= p <= ceiling`.
    pub fn get_range(floor: u64, ceiling: u64) -> Vec<u64> {
        debug!("In prime_sieve get_range with floor: {}, ceiling: {}", floor, ceiling);
        let sieve = PrimeSieve::new(ceiling.saturating_add(1));
        sieve.iter().filter(|&p| p >= floor).collect()
    }
}

impl IntoIterator for PrimeSieve {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

/// Every prime strictly less than `limit`, ascending.
///
/// # Examples
/// ```
/// use ntkit::integer_math::prime_sieve::prime_sieve;
///
/// assert_eq!(prime_sieve(10), vec![2, 3, 5, 7]);
/// assert_eq!(prime_sieve(2), Vec::<u64>::new());
/// assert_eq!(prime_sieve(3), vec![2]);
/// ```
pub fn prime_sieve(limit: u64) -> Vec<u64> {
    PrimeSieve::new(limit).iter().collect()
}
