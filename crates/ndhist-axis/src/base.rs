//! Bin-count bookkeeping shared by every axis kind
//!
//! All axes use the same numbering: bin `0` is the underflow bin, bins
//! `1..=n` are the regular bins in ascending coordinate order and bin `n + 1`
//! is the overflow bin. Axes always reserve both over/underflow slots, so an
//! axis with `n` regular bins occupies `n + 2` slots of histogram storage.

use std::iter::FusedIterator;

/// The contract every axis kind fulfils
///
/// Lookups are total: any coordinate maps to some bin, with coordinates
/// outside the regular range landing in the under/overflow bins. For bins
/// outside the regular range, `bin_from`/`bin_to`/`bin_center` return
/// `f64::MIN` or `f64::MAX` instead of a computed bound.
pub trait BinnedAxis {
    /// Number of regular bins
    fn n_bins_no_over(&self) -> usize;

    /// Find the bin containing `x`
    ///
    /// Bins are half-open, `[from, to)`: a coordinate on a border belongs to
    /// the bin whose lower edge it is. NaN maps to the underflow bin.
    fn find_bin(&self, x: f64) -> usize;

    /// Center of `bin`
    fn bin_center(&self, bin: usize) -> f64;

    /// Lower edge of `bin` (inclusive)
    fn bin_from(&self, bin: usize) -> f64;

    /// Upper edge of `bin` (exclusive)
    fn bin_to(&self, bin: usize) -> f64;

    /// Axis title
    fn title(&self) -> &str;

    /// Number of bins including the underflow and overflow bins
    fn n_bins(&self) -> usize {
        self.n_bins_no_over() + 2
    }

    fn underflow_bin(&self) -> usize {
        0
    }

    fn overflow_bin(&self) -> usize {
        self.n_bins_no_over() + 1
    }

    /// First regular bin
    fn first_bin(&self) -> usize {
        1
    }

    /// Last regular bin
    fn last_bin(&self) -> usize {
        self.n_bins_no_over()
    }

    fn is_underflow_bin(&self, bin: i64) -> bool {
        bin <= 0
    }

    fn is_overflow_bin(&self, bin: i64) -> bool {
        bin >= self.n_bins_no_over() as i64 + 1
    }

    /// Lower edge of the first regular bin
    fn minimum(&self) -> f64 {
        self.bin_from(self.first_bin())
    }

    /// Upper edge of the last regular bin
    fn maximum(&self) -> f64 {
        self.bin_to(self.last_bin())
    }

    /// Whether the axis extends its range when filled outside of it
    fn can_grow(&self) -> bool {
        false
    }

    /// Iterate over bin indices in ascending order
    ///
    /// With `include_overflow` the underflow and overflow bins are included.
    fn bins(&self, include_overflow: bool) -> BinIter {
        if include_overflow {
            BinIter::new(self.underflow_bin(), self.overflow_bin() + 1)
        } else {
            BinIter::new(self.first_bin(), self.last_bin() + 1)
        }
    }
}

/// Lazy iterator over a contiguous run of bin indices
///
/// Cloning restarts from the clone point; calling
/// [`BinnedAxis::bins`] again restarts from the beginning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinIter {
    next: usize,
    end: usize,
}

impl BinIter {
    /// Iterate over `begin..end`
    pub fn new(begin: usize, end: usize) -> Self {
        Self {
            next: begin,
            end: end.max(begin),
        }
    }
}

impl Iterator for BinIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next < self.end {
            let bin = self.next;
            self.next += 1;
            Some(bin)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for BinIter {
    fn next_back(&mut self) -> Option<usize> {
        if self.next < self.end {
            self.end -= 1;
            Some(self.end)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for BinIter {}

impl FusedIterator for BinIter {}
