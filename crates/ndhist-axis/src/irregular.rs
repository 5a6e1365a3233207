//! Binning defined by an explicit list of bin borders

use crate::base::BinnedAxis;
use ndhist_core::{Error, Result};

/// Axis with bins of individual widths
///
/// `borders` holds `n + 1` strictly increasing edges; bin `i` spans
/// `[borders[i - 1], borders[i])`. Lookup is a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularAxis {
    title: String,
    borders: Vec<f64>,
}

impl IrregularAxis {
    /// Create an axis from its bin borders
    ///
    /// Fails unless there are at least two borders, all finite and strictly
    /// increasing.
    pub fn new(borders: Vec<f64>) -> Result<Self> {
        if borders.len() < 2 {
            return Err(Error::invalid_axis(format!(
                "irregular axis needs at least two borders, got {}",
                borders.len()
            )));
        }
        if let Some(pos) = borders.iter().position(|b| !b.is_finite()) {
            return Err(Error::invalid_axis(format!(
                "border {pos} is not finite: {}",
                borders[pos]
            )));
        }
        if let Some(pos) = borders.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::invalid_axis(format!(
                "borders are not strictly increasing at position {}: {} >= {}",
                pos + 1,
                borders[pos],
                borders[pos + 1]
            )));
        }

        Ok(Self {
            title: String::new(),
            borders,
        })
    }

    /// Set the axis title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// All bin borders, lowest first
    pub fn borders(&self) -> &[f64] {
        &self.borders
    }
}

impl BinnedAxis for IrregularAxis {
    fn n_bins_no_over(&self) -> usize {
        self.borders.len() - 1
    }

    fn find_bin(&self, x: f64) -> usize {
        // Counting borders <= x gives the 1-based bin directly: 0 below the
        // first border, n + 1 at or above the last one. NaN compares false
        // everywhere and therefore lands in underflow.
        self.borders.partition_point(|&border| border <= x)
    }

    fn bin_center(&self, bin: usize) -> f64 {
        if bin == 0 {
            f64::MIN
        } else if bin > self.n_bins_no_over() {
            f64::MAX
        } else {
            0.5 * (self.borders[bin - 1] + self.borders[bin])
        }
    }

    fn bin_from(&self, bin: usize) -> f64 {
        if bin == 0 {
            f64::MIN
        } else {
            self.borders[(bin - 1).min(self.borders.len() - 1)]
        }
    }

    fn bin_to(&self, bin: usize) -> f64 {
        if bin > self.n_bins_no_over() {
            f64::MAX
        } else {
            self.borders[bin]
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn minimum(&self) -> f64 {
        self.borders[0]
    }

    fn maximum(&self) -> f64 {
        self.borders[self.borders.len() - 1]
    }
}
