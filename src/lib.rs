//! Multidimensional histograms over composable axes
//!
//! This crate re-exports the ndhist workspace:
//!
//! - [`axis`]: equidistant, growable, irregular and labeled axes, their
//!   configurations and compatibility checks
//! - [`histogram`]: the N-dimensional [`Histogram`] with fills, growth and
//!   iteration ranges
//!
//! The shared [`Error`] type and the [`Weight`] content trait come from
//! `ndhist-core`.
//!
//! # Example
//!
//! ```rust
//! use ndhist::prelude::*;
//!
//! let mut hist: Hist2D = Histogram::from_configs(&[
//!     AxisConfig::equidistant(10, 0.0, 1.0).with_title("x"),
//!     AxisConfig::labels(["signal", "background"]),
//! ])
//! .unwrap();
//!
//! let signal = hist.label_coordinate(1, "signal").unwrap();
//! hist.fill(&[0.25, signal]);
//! hist.fill_weighted(&[0.25, signal], 2.0);
//! assert_eq!(hist.bin_content_at(&[0.25, signal]), 3.0);
//! ```

pub use ndhist_axis as axis;
pub use ndhist_histogram as histogram;

pub use ndhist_axis::{
    classify, Axis, AxisCompatibility, AxisConfig, AxisKind, AxisView, BinnedAxis,
    EquidistantAxis, GrowableAxis, IrregularAxis, LabeledAxis,
};
pub use ndhist_core::{Error, Result, Weight};
pub use ndhist_histogram::{
    FillStatistics, Hist1D, Hist2D, Hist3D, Histogram, IterationRange, NoStats, OverflowPolicy,
    SumW2,
};

/// Commonly used types and traits
pub mod prelude {
    pub use ndhist_axis::{
        classify, Axis, AxisCompatibility, AxisConfig, AxisView, BinnedAxis, EquidistantAxis,
        GrowableAxis, IrregularAxis, LabeledAxis,
    };
    pub use ndhist_core::{Error, Result, Weight};
    pub use ndhist_histogram::{
        FillStatistics, Hist1D, Hist2D, Hist3D, Histogram, NoStats, OverflowPolicy,
    };
}
