//! Equidistant axis that extends its range by merging bins

use crate::base::BinnedAxis;
use crate::equidistant::EquidistantAxis;
use ndhist_core::Result;
use tracing::debug;

/// Largest virtual bin index considered reachable by growth
const MAX_VIRTUAL_BIN: f64 = (1u64 << 62) as f64;

/// Side of the axis that was extended by [`GrowableAxis::grow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowDirection {
    /// `low` moved down, `high` kept
    Low,
    /// `high` moved up, `low` kept
    High,
}

/// Outcome of a growth step, describing how old bins map onto new ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Number of old bins merged into one new bin (a power of two)
    pub factor: usize,
    pub direction: GrowDirection,
}

impl Growth {
    /// New regular bin holding the content of old regular bin `bin`
    ///
    /// Under- and overflow bins map onto themselves.
    pub fn map_bin(&self, bin: usize, n_bins: usize) -> usize {
        if bin == 0 || bin > n_bins {
            return bin;
        }
        let shift = match self.direction {
            GrowDirection::High => 0,
            GrowDirection::Low => n_bins * (self.factor - 1),
        };
        (bin - 1 + shift) / self.factor + 1
    }
}

/// Equidistant axis whose range can grow while the bin count stays fixed
///
/// When a coordinate falls outside the range, one bound is moved outwards
/// and groups of a power-of-two number of adjacent bins are merged, so bins
/// become wider but never more numerous.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableAxis {
    axis: EquidistantAxis,
}

impl GrowableAxis {
    /// Create a growable axis with an initial range of `[low, high)`
    pub fn new(n_bins: usize, low: f64, high: f64) -> Result<Self> {
        Ok(Self {
            axis: EquidistantAxis::new(n_bins, low, high)?,
        })
    }

    /// Set the axis title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.axis.set_title(title.into());
        self
    }

    /// The current binning as a plain equidistant axis
    pub fn as_equidistant(&self) -> &EquidistantAxis {
        &self.axis
    }

    /// Bin index of `x` on an axis with unlimited bins of the current width
    ///
    /// Regular bins keep their indices; positions below the range give
    /// indices `<= 0`, positions above give indices `> n`. Returns `None` for
    /// non-finite coordinates, which no amount of growth can include.
    pub fn virtual_bin(&self, x: f64) -> Option<i64> {
        if !x.is_finite() {
            return None;
        }
        let n = self.axis.n_bins_no_over() as i64;
        if x < self.axis.low() {
            let raw = self.axis.find_bin_raw(x).floor() + 1.0;
            if raw < -MAX_VIRTUAL_BIN {
                return None;
            }
            Some((raw as i64).min(0))
        } else if x >= self.axis.high() {
            let raw = self.axis.find_bin_raw(x).floor() + 1.0;
            if raw > MAX_VIRTUAL_BIN {
                return None;
            }
            Some((raw as i64).max(n + 1))
        } else {
            Some(self.axis.find_bin(x) as i64)
        }
    }

    /// Number of old bins merged per new bin to reach `target_virtual_bin`
    ///
    /// Returns `None` if the target is already in range.
    pub fn growth_for(&self, target_virtual_bin: i64) -> Option<Growth> {
        let n = self.axis.n_bins_no_over() as i64;
        let (needed, direction) = if target_virtual_bin > n {
            (target_virtual_bin as u128, GrowDirection::High)
        } else if target_virtual_bin < 1 {
            ((n - target_virtual_bin + 1) as u128, GrowDirection::Low)
        } else {
            return None;
        };

        let n = n as u128;
        let mut factor: u128 = 1;
        while n * factor < needed {
            factor *= 2;
        }
        Some(Growth {
            factor: usize::try_from(factor).ok()?,
            direction,
        })
    }

    /// Extend the range so that `target_virtual_bin` becomes a regular bin
    ///
    /// Only one bound moves per call. Returns the merge factor, which is `1`
    /// if no growth was needed or if the grown range would not be
    /// representable.
    pub fn grow(&mut self, target_virtual_bin: i64) -> usize {
        self.grow_with(target_virtual_bin)
            .map(|growth| growth.factor)
            .unwrap_or(1)
    }

    /// Like [`grow`](Self::grow) but reports how old bins map onto new ones
    pub fn grow_with(&mut self, target_virtual_bin: i64) -> Option<Growth> {
        let (grown, growth) = self.grown(target_virtual_bin)?;
        debug!(
            factor = growth.factor,
            direction = ?growth.direction,
            low = grown.minimum(),
            high = grown.maximum(),
            "grew axis"
        );
        *self = grown;
        Some(growth)
    }

    /// The axis [`grow_with`](Self::grow_with) would produce, leaving `self`
    /// untouched
    ///
    /// Returns `None` if no growth is needed or the grown range would not be
    /// representable.
    pub fn grown(&self, target_virtual_bin: i64) -> Option<(GrowableAxis, Growth)> {
        let growth = self.growth_for(target_virtual_bin)?;
        let low = self.axis.low();
        let high = self.axis.high();
        let span = (high - low) * growth.factor as f64;
        let (new_low, new_high) = match growth.direction {
            GrowDirection::High => (low, low + span),
            GrowDirection::Low => (high - span, high),
        };

        let mut grown =
            match EquidistantAxis::new(self.axis.n_bins_no_over(), new_low, new_high) {
                Ok(axis) => axis,
                Err(err) => {
                    debug!(target_virtual_bin, %err, "axis growth not representable");
                    return None;
                }
            };
        grown.set_title(self.axis.title().to_string());
        Some((GrowableAxis { axis: grown }, growth))
    }
}

impl BinnedAxis for GrowableAxis {
    fn n_bins_no_over(&self) -> usize {
        self.axis.n_bins_no_over()
    }

    fn find_bin(&self, x: f64) -> usize {
        self.axis.find_bin(x)
    }

    fn bin_center(&self, bin: usize) -> f64 {
        self.axis.bin_center(bin)
    }

    fn bin_from(&self, bin: usize) -> f64 {
        self.axis.bin_from(bin)
    }

    fn bin_to(&self, bin: usize) -> f64 {
        self.axis.bin_to(bin)
    }

    fn title(&self) -> &str {
        self.axis.title()
    }

    fn minimum(&self) -> f64 {
        self.axis.low()
    }

    fn maximum(&self) -> f64 {
        self.axis.high()
    }

    fn can_grow(&self) -> bool {
        true
    }
}
