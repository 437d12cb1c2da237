// src/core/mod.rs

pub mod error;

pub use error::NumberTheoryError;
