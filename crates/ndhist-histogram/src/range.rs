//! Sub-rectangles of a histogram's bins

use bitflags::bitflags;
use ndhist_axis::BinnedAxis;

bitflags! {
    /// Which sentinel bins of one dimension an iteration includes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OverflowPolicy: u8 {
        /// Include the underflow bin
        const UNDERFLOW = 0b01;
        /// Include the overflow bin
        const OVERFLOW = 0b10;
    }
}

impl OverflowPolicy {
    /// Regular bins only
    pub const NONE: Self = Self::empty();
    /// Regular bins plus underflow and overflow
    pub const BOTH: Self = Self::all();

    /// Half-open range of bin indices selected on `axis`
    pub fn bin_range<A: BinnedAxis + ?Sized>(self, axis: &A) -> (usize, usize) {
        let begin = if self.contains(Self::UNDERFLOW) {
            axis.underflow_bin()
        } else {
            axis.first_bin()
        };
        let end = if self.contains(Self::OVERFLOW) {
            axis.overflow_bin() + 1
        } else {
            axis.last_bin() + 1
        };
        (begin, end)
    }
}

/// Per-dimension half-open bin ranges over a histogram's content
///
/// Produced by `Histogram::iteration_range`; iteration visits every
/// combination of bins with dimension 0 varying fastest, matching the order
/// of the content array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationRange<const D: usize> {
    begin: [usize; D],
    end: [usize; D],
    strides: [usize; D],
}

impl<const D: usize> IterationRange<D> {
    pub(crate) fn new(begin: [usize; D], end: [usize; D], strides: [usize; D]) -> Self {
        Self {
            begin,
            end,
            strides,
        }
    }

    /// First bin index per dimension
    pub fn begin(&self) -> [usize; D] {
        self.begin
    }

    /// One past the last bin index per dimension
    pub fn end(&self) -> [usize; D] {
        self.end
    }

    /// Number of bins covered
    pub fn len(&self) -> usize {
        self.begin
            .iter()
            .zip(&self.end)
            .map(|(b, e)| e.saturating_sub(*b))
            .product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether per-dimension bins `bins` lie inside the range
    pub fn contains(&self, bins: &[usize; D]) -> bool {
        (0..D).all(|d| self.begin[d] <= bins[d] && bins[d] < self.end[d])
    }

    /// Visit `(flat_index, bins)` for every bin in the range
    pub fn iter(&self) -> RangeIter<D> {
        RangeIter {
            range: *self,
            current: self.begin,
            remaining: self.len(),
        }
    }

    fn flat(&self, bins: &[usize; D]) -> usize {
        bins.iter().zip(&self.strides).map(|(b, s)| b * s).sum()
    }
}

impl<const D: usize> IntoIterator for &IterationRange<D> {
    type Item = (usize, [usize; D]);
    type IntoIter = RangeIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bins of an [`IterationRange`]
#[derive(Debug, Clone)]
pub struct RangeIter<const D: usize> {
    range: IterationRange<D>,
    current: [usize; D],
    remaining: usize,
}

impl<const D: usize> Iterator for RangeIter<D> {
    type Item = (usize, [usize; D]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bins = self.current;
        self.remaining -= 1;

        // Odometer step, dimension 0 fastest
        for d in 0..D {
            self.current[d] += 1;
            if self.current[d] < self.range.end[d] {
                break;
            }
            self.current[d] = self.range.begin[d];
        }
        Some((self.range.flat(&bins), bins))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> ExactSizeIterator for RangeIter<D> {}

impl<const D: usize> std::iter::FusedIterator for RangeIter<D> {}
