// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;
pub mod sums;

pub use crate::core::error::NumberTheoryError;
pub use crate::integer_math::divisors::enumerate_divisors;
pub use crate::integer_math::factorization::{factor, Factorization, PrimePower};
pub use crate::integer_math::gcd::gcd;
pub use crate::integer_math::magnitude;
pub use crate::integer_math::prime_sieve::{prime_sieve, PrimeSieve};
pub use crate::integer_math::trial_division::{is_prime, smallest_prime_divisor};
pub use crate::sums::convolution::{convolution_coeff, dirichlet_convolution, try_convolution_coeff};
pub use crate::sums::partial_sums::{compute_partial_sums, summatory};
