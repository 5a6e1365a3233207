//! Uniform-width binning over `[low, high)`

use crate::base::BinnedAxis;
use ndhist_core::math::{snap_to_border, REL_TOLERANCE};
use ndhist_core::{Error, Result};

/// Axis with `n` bins of equal width
///
/// Bin lookup is O(1): the fractional bin position is computed from the
/// inverse bin width and then checked against the bin edges, so that
/// `bin_from(find_bin(x)) <= x < bin_to(find_bin(x))` holds exactly for every
/// `x` in range.
#[derive(Debug, Clone, PartialEq)]
pub struct EquidistantAxis {
    title: String,
    n_bins: usize,
    low: f64,
    high: f64,
    inv_bin_width: f64,
}

impl EquidistantAxis {
    /// Create an axis with `n_bins` bins spanning `[low, high)`
    pub fn new(n_bins: usize, low: f64, high: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::invalid_axis("bin count must be positive"));
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::invalid_axis(format!(
                "axis bounds must be finite, got [{low}, {high})"
            )));
        }
        if low >= high {
            return Err(Error::invalid_axis(format!(
                "lower bound {low} must be below upper bound {high}"
            )));
        }
        let inv_bin_width = n_bins as f64 / (high - low);
        if !inv_bin_width.is_finite() || inv_bin_width <= 0.0 {
            return Err(Error::invalid_axis(format!(
                "bin width of [{low}, {high}) with {n_bins} bins is not representable"
            )));
        }

        Ok(Self {
            title: String::new(),
            n_bins,
            low,
            high,
            inv_bin_width,
        })
    }

    /// Set the axis title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn inverse_bin_width(&self) -> f64 {
        self.inv_bin_width
    }

    pub fn bin_width(&self) -> f64 {
        1.0 / self.inv_bin_width
    }

    /// Fractional position of `x` measured in bins from `low`
    pub fn find_bin_raw(&self, x: f64) -> f64 {
        (x - self.low) * self.inv_bin_width
    }

    /// The bin whose lower edge is `x`, if `x` is a bin border
    ///
    /// Accepts a deviation of `1e-6` bins per unit of `|x|` (at least one).
    /// The lower edge of the overflow bin counts as a border; the lower
    /// edge of the underflow bin does not.
    pub fn bin_index_for_low_edge(&self, x: f64) -> Option<usize> {
        let frac = self.find_bin_raw(x) + 1.0;
        let bin = snap_to_border(frac, x, REL_TOLERANCE)?;
        if bin < 1 || bin > self.n_bins as i64 + 1 {
            return None;
        }
        Some(bin as usize)
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

impl BinnedAxis for EquidistantAxis {
    fn n_bins_no_over(&self) -> usize {
        self.n_bins
    }

    fn find_bin(&self, x: f64) -> usize {
        if x.is_nan() || x < self.low {
            return 0;
        }
        if x >= self.high {
            return self.n_bins + 1;
        }

        let raw = self.find_bin_raw(x);
        let mut bin = (raw as usize).saturating_add(1).clamp(1, self.n_bins);
        // Rounding can put a border coordinate one bin off
        while bin > 1 && x < self.bin_from(bin) {
            bin -= 1;
        }
        while bin < self.n_bins && x >= self.bin_to(bin) {
            bin += 1;
        }
        bin
    }

    fn bin_center(&self, bin: usize) -> f64 {
        if bin == 0 {
            f64::MIN
        } else if bin > self.n_bins {
            f64::MAX
        } else {
            self.low + (bin as f64 - 0.5) / self.inv_bin_width
        }
    }

    fn bin_from(&self, bin: usize) -> f64 {
        if bin == 0 {
            f64::MIN
        } else if bin > self.n_bins {
            self.high
        } else {
            self.low + (bin - 1) as f64 / self.inv_bin_width
        }
    }

    fn bin_to(&self, bin: usize) -> f64 {
        if bin == 0 {
            self.low
        } else if bin == self.n_bins {
            self.high
        } else if bin > self.n_bins {
            f64::MAX
        } else {
            self.low + bin as f64 / self.inv_bin_width
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn minimum(&self) -> f64 {
        self.low
    }

    fn maximum(&self) -> f64 {
        self.high
    }
}
