//! N-dimensional histogram storage and lookups

use crate::range::{IterationRange, OverflowPolicy};
use crate::stats::{FillStatistics, NoStats};
use ndhist_axis::{Axis, AxisConfig, AxisView, BinnedAxis};
use ndhist_core::{Error, Result, Weight};

/// Histogram over `D` axes of any kind, with content of type `T`
///
/// Content lives in one flat array of `∏ axes[i].n_bins()` entries, under-
/// and overflow bins included. The flat index of per-dimension bins
/// `b[0..D]` is `Σ b[i] * Π_{j<i} axes[j].n_bins()`, so dimension 0 varies
/// fastest. Each content change is paired with a call into the statistics
/// collaborator `S`.
///
/// # Example
///
/// ```rust
/// use ndhist_axis::EquidistantAxis;
/// use ndhist_histogram::Histogram;
///
/// let x = EquidistantAxis::new(2, 0.0, 2.0).unwrap();
/// let y = EquidistantAxis::new(2, 0.0, 2.0).unwrap();
/// let mut hist: Histogram<2> = Histogram::new([x.into(), y.into()]).unwrap();
///
/// hist.fill(&[0.5, 0.5]);
/// hist.fill(&[1.5, 0.5]);
/// assert_eq!(hist.bin_content_at(&[0.5, 0.5]), 1.0);
/// assert_eq!(hist.bin_content_at(&[1.5, 0.5]), 1.0);
/// assert_eq!(hist.bin_content_at(&[0.5, 1.5]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<const D: usize, T: Weight = f64, S: FillStatistics = NoStats> {
    pub(crate) axes: [Axis; D],
    pub(crate) strides: [usize; D],
    pub(crate) content: Vec<T>,
    pub(crate) stats: S,
}

/// One-dimensional histogram
pub type Hist1D<T = f64, S = NoStats> = Histogram<1, T, S>;
/// Two-dimensional histogram
pub type Hist2D<T = f64, S = NoStats> = Histogram<2, T, S>;
/// Three-dimensional histogram
pub type Hist3D<T = f64, S = NoStats> = Histogram<3, T, S>;

impl<const D: usize, T: Weight, S: FillStatistics> Histogram<D, T, S> {
    /// Create an empty histogram over `axes`
    ///
    /// Fails if the total number of bins does not fit in `usize`.
    pub fn new(axes: [Axis; D]) -> Result<Self> {
        let mut strides = [0usize; D];
        let mut total: usize = 1;
        for (d, axis) in axes.iter().enumerate() {
            strides[d] = total;
            total = total.checked_mul(axis.n_bins()).ok_or_else(|| {
                Error::invalid_axis(format!("total bin count overflows at dimension {d}"))
            })?;
        }

        let mut stats = S::default();
        stats.init(total);
        Ok(Self {
            axes,
            strides,
            content: vec![T::zero(); total],
            stats,
        })
    }

    /// Create an empty histogram from axis configurations
    pub fn from_configs(configs: &[AxisConfig; D]) -> Result<Self> {
        let axes = configs
            .iter()
            .map(AxisConfig::build)
            .collect::<Result<Vec<_>>>()?;
        let axes: [Axis; D] = axes
            .try_into()
            .map_err(|_| Error::InvalidParameter("axis count mismatch".to_string()))?;
        Self::new(axes)
    }

    /// Configurations that rebuild the current axes
    pub fn axis_configs(&self) -> [AxisConfig; D] {
        std::array::from_fn(|d| self.axes[d].config())
    }

    /// Number of dimensions
    pub fn n_dim(&self) -> usize {
        D
    }

    /// Total number of bins, under- and overflow included
    pub fn n_bins(&self) -> usize {
        self.content.len()
    }

    pub fn axes(&self) -> &[Axis; D] {
        &self.axes
    }

    pub fn axis(&self, dim: usize) -> Option<&Axis> {
        self.axes.get(dim)
    }

    /// Kind-independent view of the axis for dimension `dim`
    pub fn axis_view(&self, dim: usize) -> Option<AxisView<'_>> {
        self.axes.get(dim).map(Axis::view)
    }

    /// Whether any axis can extend its range during fills
    pub fn can_grow(&self) -> bool {
        self.axes.iter().any(BinnedAxis::can_grow)
    }

    /// The statistics collaborator paired with the content
    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// Flat content array in mixed-radix order
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Flat index of the bin containing `coord`, without growing any axis
    ///
    /// Returns `None` if a coordinate is NaN, or lies outside the current
    /// range of a growable or labeled axis. Other out-of-range coordinates
    /// land in the under- or overflow bins.
    pub fn bin_index(&self, coord: &[f64; D]) -> Option<usize> {
        let mut index = 0;
        for (d, axis) in self.axes.iter().enumerate() {
            index += axis_bin(axis, coord[d])? * self.strides[d];
        }
        Some(index)
    }

    /// Fold per-dimension bins into a flat index
    ///
    /// Returns `None` if any bin is beyond its axis.
    pub fn flat_index(&self, bins: &[usize; D]) -> Option<usize> {
        let mut index = 0;
        for (d, axis) in self.axes.iter().enumerate() {
            if bins[d] >= axis.n_bins() {
                return None;
            }
            index += bins[d] * self.strides[d];
        }
        Some(index)
    }

    /// Unfold a flat index into per-dimension bins
    ///
    /// `index` must be below [`n_bins`](Self::n_bins).
    pub fn bin_indices(&self, index: usize) -> [usize; D] {
        let mut bins = [0usize; D];
        let mut rest = index;
        for d in (0..D).rev() {
            bins[d] = rest / self.strides[d];
            rest %= self.strides[d];
        }
        bins
    }

    /// Content of bin `index`, zero for indices past the end
    pub fn bin_content(&self, index: usize) -> T {
        self.content.get(index).copied().unwrap_or_else(T::zero)
    }

    /// Content of the bin containing `coord`, zero if there is none
    pub fn bin_content_at(&self, coord: &[f64; D]) -> T {
        self.bin_index(coord)
            .map_or_else(T::zero, |index| self.bin_content(index))
    }

    /// Content of bin `index` converted to `f64`
    pub fn bin_content_f64(&self, index: usize) -> f64 {
        self.bin_content(index).to_f64()
    }

    /// Lower/upper uncertainty pairs of bin `index`
    pub fn bin_uncertainties(&self, index: usize) -> Vec<f64> {
        self.stats.uncertainties(index, self.bin_content_f64(index))
    }

    pub fn bin_center(&self, index: usize) -> [f64; D] {
        let bins = self.bin_indices(index);
        std::array::from_fn(|d| self.axes[d].bin_center(bins[d]))
    }

    pub fn bin_from(&self, index: usize) -> [f64; D] {
        let bins = self.bin_indices(index);
        std::array::from_fn(|d| self.axes[d].bin_from(bins[d]))
    }

    pub fn bin_to(&self, index: usize) -> [f64; D] {
        let bins = self.bin_indices(index);
        std::array::from_fn(|d| self.axes[d].bin_to(bins[d]))
    }

    /// Bins selected by a per-dimension overflow policy
    pub fn iteration_range(&self, policies: &[OverflowPolicy; D]) -> IterationRange<D> {
        let mut begin = [0usize; D];
        let mut end = [0usize; D];
        for (d, axis) in self.axes.iter().enumerate() {
            (begin[d], end[d]) = policies[d].bin_range(axis);
        }
        IterationRange::new(begin, end, self.strides)
    }

    /// Sum of all bin contents, under- and overflow included
    pub fn sum(&self) -> T {
        self.content.iter().fold(T::zero(), |acc, &c| acc + c)
    }

    /// Zero all content and statistics, keeping the axes
    pub fn reset(&mut self) {
        self.content.iter_mut().for_each(|c| *c = T::zero());
        self.stats.init(self.content.len());
    }

    /// Coordinate addressing `label` on labeled dimension `dim`
    ///
    /// Assigns the next free slot to a new label. Returns `None` if `dim` is
    /// not a labeled axis or no slot is left.
    pub fn label_coordinate(&mut self, dim: usize, label: &str) -> Option<f64> {
        let axis = self.axes.get_mut(dim)?.as_labels_mut()?;
        let slot = axis.bin_index(label)?;
        Some(axis.slot_center(slot))
    }
}

/// Bin of `x` on `axis`, `None` where no bin exists without growth
pub(crate) fn axis_bin(axis: &Axis, x: f64) -> Option<usize> {
    if x.is_nan() {
        return None;
    }
    match axis {
        Axis::Growable(_) | Axis::Labels(_) if !(axis.minimum() <= x && x < axis.maximum()) => {
            None
        }
        _ => Some(axis.find_bin(x)),
    }
}
