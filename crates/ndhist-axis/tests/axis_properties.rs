//! Property-based tests for bin lookup and axis classification

mod common;

use common::*;
use ndhist_axis::{classify, AxisCompatibility, BinnedAxis, LabeledAxis};
use proptest::prelude::*;

proptest! {
    // Property: in-range coordinates land in a regular bin that brackets them
    #[test]
    fn prop_equidistant_find_bin_brackets(
        n_bins in 1usize..500,
        low in -1e6f64..1e6,
        width in 1e-3f64..1e6,
        frac in 0.0f64..1.0,
    ) {
        let axis = equidistant(n_bins, low, low + width);
        let x = low + frac * width;
        prop_assume!(x < axis.maximum());
        let bin = axis.find_bin(x);
        prop_assert!((1..=n_bins).contains(&bin));
        prop_assert!(axis.bin_from(bin) <= x, "{} > {}", axis.bin_from(bin), x);
        prop_assert!(x < axis.bin_to(bin), "{} >= {}", x, axis.bin_to(bin));
    }

    // Property: coordinates outside the range go to underflow or overflow
    #[test]
    fn prop_equidistant_out_of_range(
        n_bins in 1usize..100,
        low in -1e3f64..1e3,
        width in 1e-2f64..1e3,
        distance in 0.0f64..1e6,
    ) {
        let axis = equidistant(n_bins, low, low + width);
        prop_assert_eq!(axis.find_bin(axis.minimum() - distance - 1e-9), 0);
        prop_assert_eq!(axis.find_bin(axis.maximum() + distance), n_bins + 1);
    }

    // Property: irregular lookup agrees with the border list
    #[test]
    fn prop_irregular_find_bin_brackets(
        widths in prop::collection::vec(1e-3f64..10.0, 1..50),
        start in -100.0f64..100.0,
        frac in 0.0f64..1.0,
    ) {
        let axis = irregular(&borders_from_widths(start, &widths));
        let x = axis.minimum() + frac * (axis.maximum() - axis.minimum());
        prop_assume!(x < axis.maximum());
        let bin = axis.find_bin(x);
        prop_assert!((1..=widths.len()).contains(&bin));
        prop_assert!(axis.bin_from(bin) <= x && x < axis.bin_to(bin));
    }

    // Property: an axis is always identical to itself
    #[test]
    fn prop_self_classification_is_identical(
        n_bins in 1usize..1000,
        low in -1e6f64..1e6,
        width in 1e-6f64..1e6,
    ) {
        let axis = equidistant(n_bins, low, low + width);
        prop_assert_eq!(classify(&axis, &axis), AxisCompatibility::Identical);
    }

    // Property: label lookups are idempotent and never exceed the bin count
    #[test]
    fn prop_label_allocation_idempotent(
        n_bins in 1usize..20,
        labels in prop::collection::vec("[a-f]{1,2}", 0..60),
    ) {
        let mut axis = LabeledAxis::new(n_bins, Vec::<String>::new()).unwrap();
        for label in &labels {
            let first = axis.bin_index(label);
            let second = axis.bin_index(label);
            prop_assert_eq!(first, second);
            if let Some(slot) = first {
                prop_assert!(slot < n_bins);
            }
            prop_assert!(axis.labels().len() <= n_bins);
        }
    }
}

#[test]
fn test_contains_scenario() {
    let target = equidistant(10, 0.0, 10.0);
    let source = equidistant(5, 0.0, 5.0);
    assert_eq!(classify(&target, &source), AxisCompatibility::Contains);
}

#[test]
fn test_sampling_scenario() {
    let target = equidistant(6, 0.0, 6.0);
    let source = equidistant(12, 0.0, 6.0);
    assert_eq!(classify(&target, &source), AxisCompatibility::Sampling);
}

#[test]
fn test_irregular_scenario() {
    let axis = irregular(&[0.0, 1.0, 3.0, 6.0]);
    assert_eq!(axis.find_bin(2.0), 2);
    assert_eq!(axis.bin_from(2), 1.0);
    assert_eq!(axis.bin_to(2), 3.0);
}

#[test]
fn test_equidistant_scenario() {
    let axis = equidistant(10, 0.0, 1.0);
    assert_eq!(axis.find_bin(0.05), 1);
    assert_eq!(axis.find_bin(-0.1), 0);
    assert_eq!(axis.find_bin(1.5), 11);
    assert_relative_eq!(axis.bin_center(1), 0.05);
}
