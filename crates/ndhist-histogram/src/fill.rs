//! Filling, including on-demand axis growth

use crate::histogram::{axis_bin, Histogram};
use crate::stats::FillStatistics;
use ndhist_axis::{Axis, BinnedAxis, Growth};
use ndhist_core::{Error, Result, Weight};
use tracing::{debug, instrument, trace};

impl<const D: usize, T: Weight, S: FillStatistics> Histogram<D, T, S> {
    /// Flat index of the bin containing `coord`, growing axes as needed
    ///
    /// Every growable dimension whose coordinate lies outside its range is
    /// grown until it covers the coordinate, and the content is
    /// redistributed into the merged bins. Returns `None`, without growing
    /// anything, if a coordinate is NaN or outside a labeled axis, if a
    /// growable coordinate is infinite, or if a grown range would not be
    /// representable.
    pub fn bin_index_and_grow(&mut self, coord: &[f64; D]) -> Option<usize> {
        for (d, axis) in self.axes.iter().enumerate() {
            if !axis.can_grow() || coord[d].is_nan() {
                axis_bin(axis, coord[d])?;
            }
        }

        // Plan every dimension before touching any of them
        let mut plans = Vec::new();
        for (d, axis) in self.axes.iter().enumerate() {
            let Axis::Growable(axis) = axis else {
                continue;
            };
            let x = coord[d];
            let mut planned = axis.clone();
            let mut steps = Vec::new();
            while !(planned.minimum() <= x && x < planned.maximum()) {
                let (grown, growth) = planned.grown(planned.virtual_bin(x)?)?;
                planned = grown;
                steps.push(growth);
            }
            if !steps.is_empty() {
                plans.push((d, planned, steps));
            }
        }

        for (d, planned, steps) in plans {
            self.axes[d] = Axis::Growable(planned);
            for growth in steps {
                self.redistribute(d, growth);
            }
        }
        self.bin_index(coord)
    }

    /// Fill the bin containing `coord` with unit weight
    ///
    /// Returns the flat index that was filled, or `None` if the fill was
    /// dropped because no bin exists for `coord`.
    pub fn fill(&mut self, coord: &[f64; D]) -> Option<usize> {
        self.fill_weighted(coord, T::one())
    }

    /// Add `weight` to the bin containing `coord`
    pub fn fill_weighted(&mut self, coord: &[f64; D], weight: T) -> Option<usize> {
        let Some(index) = self.bin_index_and_grow(coord) else {
            trace!(?coord, "dropped fill without a bin");
            return None;
        };
        self.accumulate(index, weight);
        Some(index)
    }

    /// Fill every coordinate with unit weight
    pub fn fill_n(&mut self, coords: &[[f64; D]]) {
        for coord in coords {
            self.fill(coord);
        }
    }

    /// Fill `coords[i]` with `weights[i]` for every `i`
    ///
    /// Fails with [`Error::MismatchedBatchSizes`] before touching any
    /// content if the slices differ in length.
    #[instrument(skip(self, coords, weights), fields(n = coords.len()))]
    pub fn fill_many(&mut self, coords: &[[f64; D]], weights: &[T]) -> Result<()> {
        if coords.len() != weights.len() {
            return Err(Error::batch_mismatch(coords.len(), weights.len()));
        }

        if self.can_grow() {
            for (coord, &weight) in coords.iter().zip(weights) {
                self.fill_weighted(coord, weight);
            }
            return Ok(());
        }

        let indices = self.batch_indices(coords);
        let mut dropped = 0usize;
        for (index, &weight) in indices.into_iter().zip(weights) {
            match index {
                Some(index) => self.accumulate(index, weight),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            trace!(dropped, "dropped fills without a bin");
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn batch_indices(&self, coords: &[[f64; D]]) -> Vec<Option<usize>> {
        use rayon::prelude::*;
        coords.par_iter().map(|coord| self.bin_index(coord)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn batch_indices(&self, coords: &[[f64; D]]) -> Vec<Option<usize>> {
        coords.iter().map(|coord| self.bin_index(coord)).collect()
    }

    fn accumulate(&mut self, index: usize, weight: T) {
        self.content[index] += weight;
        self.stats.fill(index, weight.to_f64());
    }

    /// Move content along dimension `dim` into the bins merged by `growth`
    fn redistribute(&mut self, dim: usize, growth: Growth) {
        let n_regular = self.axes[dim].n_bins_no_over();
        let radix = n_regular + 2;
        let stride = self.strides[dim];

        let mapping: Vec<usize> = (0..self.content.len())
            .map(|index| {
                let bin = (index / stride) % radix;
                index - bin * stride + growth.map_bin(bin, n_regular) * stride
            })
            .collect();

        let mut merged = vec![T::zero(); self.content.len()];
        for (old, &new) in mapping.iter().enumerate() {
            merged[new] += self.content[old];
        }
        self.content = merged;
        self.stats.rebin(&mapping);

        debug!(
            dim,
            factor = growth.factor,
            direction = ?growth.direction,
            low = self.axes[dim].minimum(),
            high = self.axes[dim].maximum(),
            "redistributed content after axis growth"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::histogram::{Hist1D, Hist2D, Histogram};
    use crate::stats::SumW2;
    use ndhist_axis::{Axis, BinnedAxis, EquidistantAxis, GrowableAxis, LabeledAxis};
    use ndhist_core::Error;

    fn growable(n: usize, low: f64, high: f64) -> Axis {
        GrowableAxis::new(n, low, high).unwrap().into()
    }

    fn eq(n: usize, low: f64, high: f64) -> Axis {
        EquidistantAxis::new(n, low, high).unwrap().into()
    }

    #[test]
    fn test_growth_high_side() {
        let mut hist: Hist1D = Histogram::new([growable(4, 0.0, 4.0)]).unwrap();
        for x in [0.5, 1.5, 2.5, 3.5] {
            hist.fill(&[x]);
        }
        let index = hist.fill(&[6.0]).unwrap();

        let axis = &hist.axes()[0];
        assert_eq!(axis.minimum(), 0.0);
        assert_eq!(axis.maximum(), 8.0);
        assert_eq!(index, 4);
        let regular: Vec<f64> = (1..=4).map(|b| hist.bin_content(b)).collect();
        assert_eq!(regular, vec![2.0, 2.0, 0.0, 1.0]);
        assert_eq!(hist.sum(), 5.0);
    }

    #[test]
    fn test_growth_low_side() {
        let mut hist: Hist1D = Histogram::new([growable(4, 0.0, 4.0)]).unwrap();
        for x in [0.5, 1.5, 2.5, 3.5] {
            hist.fill(&[x]);
        }
        hist.fill(&[-3.0]);

        let axis = &hist.axes()[0];
        assert_eq!(axis.minimum(), -4.0);
        assert_eq!(axis.maximum(), 4.0);
        let regular: Vec<f64> = (1..=4).map(|b| hist.bin_content(b)).collect();
        assert_eq!(regular, vec![1.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_growth_keeps_other_dimensions() {
        let mut hist: Hist2D<f64, SumW2> =
            Histogram::new([eq(2, 0.0, 2.0), growable(2, 0.0, 2.0)]).unwrap();
        hist.fill_weighted(&[0.5, 0.5], 2.0);
        hist.fill_weighted(&[1.5, 1.5], 3.0);
        hist.fill(&[5.0, 0.5]);
        hist.fill(&[0.5, 7.0]);

        assert_eq!(hist.axes()[1].maximum(), 8.0);
        assert_eq!(hist.bin_content_at(&[0.5, 0.5]), 2.0);
        assert_eq!(hist.bin_content_at(&[1.5, 1.5]), 3.0);
        assert_eq!(hist.bin_content_at(&[5.0, 0.5]), 1.0);
        assert_eq!(hist.bin_content_at(&[0.5, 7.0]), 1.0);
        assert_eq!(hist.sum(), 7.0);

        // 2.0 and 3.0 now share a y bin but sit in different x bins
        let index = hist.bin_index(&[1.5, 1.5]).unwrap();
        assert_eq!(hist.stats().sum_w2(index), 9.0);
    }

    #[test]
    fn test_growth_impossible() {
        let mut hist: Hist1D = Histogram::new([growable(4, 0.0, 4.0)]).unwrap();
        assert_eq!(hist.fill(&[f64::INFINITY]), None);
        assert_eq!(hist.fill(&[f64::NAN]), None);
        assert_eq!(hist.fill(&[1e300]), None);
        assert_eq!(hist.axes()[0].maximum(), 4.0);
    }

    #[test]
    fn test_no_growth_when_fill_is_dropped() {
        let labels: Axis = LabeledAxis::from_labels(["a"]).unwrap().into();
        let mut hist: Hist2D = Histogram::new([growable(4, 0.0, 4.0), labels]).unwrap();
        assert_eq!(hist.fill(&[100.0, 5.0]), None);
        assert_eq!(hist.axes()[0].maximum(), 4.0);
        assert!(hist.fill(&[100.0, 0.5]).is_some());
        assert_eq!(hist.axes()[0].maximum(), 128.0);
    }

    #[test]
    fn test_impossible_growth_leaves_every_axis() {
        let mut hist: Hist2D =
            Histogram::new([growable(4, 0.0, 4.0), growable(4, 0.0, 4.0)]).unwrap();
        hist.fill(&[1.0, 1.0]);
        let before = hist.clone();

        assert_eq!(hist.fill(&[100.0, f64::INFINITY]), None);
        assert_eq!(hist.fill(&[-100.0, 1e300]), None);
        assert_eq!(hist.axes()[0].maximum(), 4.0);
        assert_eq!(hist.axes()[0].minimum(), 0.0);
        assert_eq!(hist, before);

        assert!(hist.fill(&[100.0, 1.0]).is_some());
        assert_eq!(hist.axes()[0].maximum(), 128.0);
        assert_eq!(hist.sum(), 2.0);
    }

    #[test]
    fn test_fill_many() {
        let mut hist: Hist1D<i64> = Histogram::new([eq(4, 0.0, 4.0)]).unwrap();
        let coords = [[0.5], [0.7], [3.5], [f64::NAN], [9.0]];
        hist.fill_many(&coords, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(hist.content(), &[0, 3, 0, 0, 3, 5]);

        hist.fill_n(&[[1.5], [1.5]]);
        assert_eq!(hist.bin_content(2), 2);
    }

    #[test]
    fn test_fill_many_mismatch_leaves_content() {
        let mut hist: Hist1D = Histogram::new([growable(4, 0.0, 4.0)]).unwrap();
        let err = hist.fill_many(&[[1.0], [100.0]], &[1.0]).unwrap_err();
        assert_eq!(err, Error::MismatchedBatchSizes { coords: 2, weights: 1 });
        assert_eq!(hist.sum(), 0.0);
        assert_eq!(hist.axes()[0].maximum(), 4.0);
    }

    #[test]
    fn test_fill_many_grows() {
        let mut hist: Hist1D = Histogram::new([growable(2, 0.0, 1.0)]).unwrap();
        hist.fill_many(&[[0.25], [3.0], [-0.5]], &[1.0, 1.0, 1.0]).unwrap();
        let axis = &hist.axes()[0];
        assert!(axis.minimum() <= -0.5);
        assert!(axis.maximum() > 3.0);
        assert_eq!(hist.sum(), 3.0);
        assert_eq!(hist.bin_content(0) + hist.bin_content(3), 0.0);
    }
}
