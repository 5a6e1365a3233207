//! Composable histogram axes
//!
//! Four kinds of binning share the [`BinnedAxis`] contract:
//!
//! - **[`EquidistantAxis`]**: `n` equal bins over `[low, high)`, O(1) lookup
//! - **[`GrowableAxis`]**: an equidistant axis that widens its bins to extend its range
//! - **[`IrregularAxis`]**: explicit bin borders, O(log n) lookup
//! - **[`LabeledAxis`]**: bins addressed by string labels assigned on first use
//!
//! Every axis reserves an underflow bin (`0`) and an overflow bin (`n + 1`)
//! around its regular bins `1..=n`. Histograms hold their dimensions as the
//! closed [`Axis`] enum; code that only reads axes can use the lighter
//! [`AxisView`]. [`AxisConfig`] describes axes for interchange, and
//! [`classify`] decides whether two equidistant binnings can be mapped onto
//! each other.
//!
//! # Example
//!
//! ```rust
//! use ndhist_axis::{classify, AxisCompatibility, BinnedAxis, EquidistantAxis};
//!
//! let axis = EquidistantAxis::new(10, 0.0, 1.0).unwrap();
//! assert_eq!(axis.find_bin(0.05), 1);
//! assert_eq!(axis.find_bin(-0.1), axis.underflow_bin());
//! assert_eq!(axis.find_bin(1.5), axis.overflow_bin());
//!
//! let coarse = EquidistantAxis::new(6, 0.0, 6.0).unwrap();
//! let fine = EquidistantAxis::new(12, 0.0, 6.0).unwrap();
//! assert_eq!(classify(&coarse, &fine), AxisCompatibility::Sampling);
//! ```

pub mod axis;
pub mod base;
pub mod compat;
pub mod config;
pub mod equidistant;
pub mod growable;
pub mod irregular;
pub mod labels;
pub mod view;

// Re-export main types and traits
pub use axis::{Axis, AxisKind};
pub use base::{BinIter, BinnedAxis};
pub use compat::{classify, classify_views, AxisCompatibility};
pub use config::AxisConfig;
pub use equidistant::EquidistantAxis;
pub use growable::{GrowDirection, GrowableAxis, Growth};
pub use irregular::IrregularAxis;
pub use labels::{LabeledAxis, LabelsCmp};
pub use view::AxisView;

pub use ndhist_core::{Error, Result};
