//! N-dimensional histograms over heterogeneous axes
//!
//! A [`Histogram`] owns one [`Axis`](ndhist_axis::Axis) per dimension and a
//! flat content array covering every combination of bins, under- and
//! overflow included. Dimensions may mix axis kinds freely. Growable axes
//! extend their range during fills and the content is merged into the wider
//! bins, so no entry is lost.
//!
//! # Features
//!
//! - `parallel`: compute bin indices of batched fills with rayon when no
//!   axis can grow. Content is accumulated in input order either way.
//!
//! # Example
//!
//! ```rust
//! use ndhist_axis::{AxisConfig, BinnedAxis};
//! use ndhist_histogram::{Hist2D, Histogram, OverflowPolicy};
//!
//! let mut hist: Hist2D = Histogram::from_configs(&[
//!     AxisConfig::growable(4, 0.0, 4.0),
//!     AxisConfig::irregular(vec![0.0, 1.0, 3.0, 6.0]),
//! ])
//! .unwrap();
//!
//! hist.fill(&[1.5, 2.0]);
//! hist.fill(&[6.5, 2.0]); // doubles the bin width of dimension 0
//! assert_eq!(hist.axes()[0].maximum(), 8.0);
//!
//! let range = hist.iteration_range(&[OverflowPolicy::NONE, OverflowPolicy::NONE]);
//! let total: f64 = range.iter().map(|(index, _)| hist.bin_content(index)).sum();
//! assert_eq!(total, 2.0);
//! ```

pub mod fill;
pub mod histogram;
pub mod ops;
pub mod range;
pub mod stats;

// Re-export main types
pub use histogram::{Hist1D, Hist2D, Hist3D, Histogram};
pub use range::{IterationRange, OverflowPolicy, RangeIter};
pub use stats::{FillStatistics, NoStats, SumW2};

pub use ndhist_core::{Error, Result, Weight};
