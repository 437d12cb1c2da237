// src/sums/mod.rs

pub mod convolution;
pub mod partial_sums;
