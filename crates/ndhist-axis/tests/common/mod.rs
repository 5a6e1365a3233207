//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use ndhist_axis::{EquidistantAxis, IrregularAxis};

pub fn equidistant(n_bins: usize, low: f64, high: f64) -> EquidistantAxis {
    EquidistantAxis::new(n_bins, low, high).unwrap()
}

pub fn irregular(borders: &[f64]) -> IrregularAxis {
    IrregularAxis::new(borders.to_vec()).unwrap()
}

/// Strictly increasing borders from positive widths
pub fn borders_from_widths(start: f64, widths: &[f64]) -> Vec<f64> {
    let mut borders = Vec::with_capacity(widths.len() + 1);
    let mut edge = start;
    borders.push(edge);
    for w in widths {
        edge += w;
        borders.push(edge);
    }
    borders
}
