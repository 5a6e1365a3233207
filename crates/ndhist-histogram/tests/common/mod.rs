//! Shared utilities for histogram integration tests

#![allow(dead_code)]

use ndhist_axis::{Axis, EquidistantAxis, GrowableAxis, IrregularAxis, LabeledAxis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn equidistant(n_bins: usize, low: f64, high: f64) -> Axis {
    EquidistantAxis::new(n_bins, low, high).unwrap().into()
}

pub fn growable(n_bins: usize, low: f64, high: f64) -> Axis {
    GrowableAxis::new(n_bins, low, high).unwrap().into()
}

pub fn irregular(borders: &[f64]) -> Axis {
    IrregularAxis::new(borders.to_vec()).unwrap().into()
}

pub fn labeled(labels: &[&str]) -> Axis {
    LabeledAxis::from_labels(labels.iter().copied()).unwrap().into()
}

/// Reproducible coordinates spread over `[low, high)` in every dimension
pub fn random_coords<const D: usize>(n: usize, low: f64, high: f64, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.gen_range(low..high)))
        .collect()
}

pub fn random_weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.5..2.0)).collect()
}
