//! Statistics collaborators paired with content accumulation
//!
//! Every change to a histogram's content is mirrored by a call into its
//! [`FillStatistics`] implementation, so per-bin statistics stay aligned
//! with the content array through fills, growth and addition.

/// Per-bin statistics kept in lock-step with histogram content
pub trait FillStatistics: Clone + std::fmt::Debug + Default + Send + Sync {
    /// Allocate storage for `n_bins` bins, discarding previous state
    fn init(&mut self, n_bins: usize);

    /// Record `weight` added to bin `index`
    fn fill(&mut self, index: usize, weight: f64);

    /// Move per-bin state after axis growth
    ///
    /// Old bin `i` is accumulated into new bin `mapping[i]`; the number of
    /// bins is unchanged.
    fn rebin(&mut self, mapping: &[usize]);

    /// Accumulate the statistics of a histogram with the same binning
    fn merge(&mut self, other: &Self);

    /// Lower/upper uncertainty pairs for bin `index` holding `content`
    fn uncertainties(&self, _index: usize, content: f64) -> Vec<f64> {
        let err = content.abs().sqrt();
        vec![err, err]
    }
}

/// No per-bin statistics; uncertainties are Poisson `sqrt(|content|)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStats;

impl FillStatistics for NoStats {
    fn init(&mut self, _n_bins: usize) {}

    fn fill(&mut self, _index: usize, _weight: f64) {}

    fn rebin(&mut self, _mapping: &[usize]) {}

    fn merge(&mut self, _other: &Self) {}
}

/// Sum of squared weights per bin
///
/// Uncertainties become `sqrt(sum w^2)`, which reduces to the Poisson
/// estimate for unit weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SumW2 {
    sum_w2: Vec<f64>,
}

impl SumW2 {
    pub fn sum_w2(&self, index: usize) -> f64 {
        self.sum_w2.get(index).copied().unwrap_or(0.0)
    }
}

impl FillStatistics for SumW2 {
    fn init(&mut self, n_bins: usize) {
        self.sum_w2 = vec![0.0; n_bins];
    }

    fn fill(&mut self, index: usize, weight: f64) {
        self.sum_w2[index] += weight * weight;
    }

    fn rebin(&mut self, mapping: &[usize]) {
        let mut rebinned = vec![0.0; self.sum_w2.len()];
        for (old, &new) in mapping.iter().enumerate() {
            rebinned[new] += self.sum_w2[old];
        }
        self.sum_w2 = rebinned;
    }

    fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.sum_w2.iter_mut().zip(&other.sum_w2) {
            *mine += theirs;
        }
    }

    fn uncertainties(&self, index: usize, _content: f64) -> Vec<f64> {
        let err = self.sum_w2(index).sqrt();
        vec![err, err]
    }
}
