//! Combining histograms

use crate::histogram::Histogram;
use crate::stats::FillStatistics;
use ndhist_core::{Error, Result, Weight};
use tracing::debug;

impl<const D: usize, T: Weight, S: FillStatistics> Histogram<D, T, S> {
    /// Add the content of `other` bin by bin
    ///
    /// Both histograms must bin every dimension identically (axis titles
    /// may differ). Statistics are merged alongside the content.
    pub fn add(&mut self, other: &Self) -> Result<()> {
        if let Some(dim) = (0..D).find(|&d| !self.axes[d].has_same_binning_as(&other.axes[d])) {
            debug!(dim, "refusing to add histograms with different binning");
            return Err(Error::incompatible_dimension(dim));
        }

        for (mine, &theirs) in self.content.iter_mut().zip(&other.content) {
            *mine += theirs;
        }
        self.stats.merge(&other.stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::histogram::{Hist1D, Hist2D, Histogram};
    use crate::stats::SumW2;
    use ndhist_axis::{Axis, EquidistantAxis, GrowableAxis, LabeledAxis};
    use ndhist_core::Error;

    fn eq(n: usize, low: f64, high: f64) -> Axis {
        EquidistantAxis::new(n, low, high).unwrap().into()
    }

    #[test]
    fn test_add() {
        let mut a: Histogram<1, f64, SumW2> = Histogram::new([eq(4, 0.0, 4.0)]).unwrap();
        let mut b = a.clone();
        a.fill_weighted(&[0.5], 2.0);
        b.fill_weighted(&[0.5], 3.0);
        b.fill(&[9.0]);

        a.add(&b).unwrap();
        assert_eq!(a.bin_content(1), 5.0);
        assert_eq!(a.bin_content(5), 1.0);
        assert_eq!(a.stats().sum_w2(1), 13.0);
    }

    #[test]
    fn test_add_ignores_titles() {
        let titled: Axis = EquidistantAxis::new(4, 0.0, 4.0).unwrap().with_title("x").into();
        let mut a: Hist1D = Histogram::new([titled]).unwrap();
        let b: Hist1D = Histogram::new([eq(4, 0.0, 4.0)]).unwrap();
        assert!(a.add(&b).is_ok());
    }

    #[test]
    fn test_add_incompatible() {
        let mut a: Hist2D = Histogram::new([eq(4, 0.0, 4.0), eq(2, 0.0, 1.0)]).unwrap();
        let b: Hist2D = Histogram::new([eq(4, 0.0, 4.0), eq(2, 0.0, 2.0)]).unwrap();
        assert_eq!(a.add(&b), Err(Error::incompatible_dimension(1)));

        // Same numbers of bins, but a growable axis against a fixed one
        let c: Hist2D = Histogram::new([
            GrowableAxis::new(4, 0.0, 4.0).unwrap().into(),
            eq(2, 0.0, 1.0),
        ])
        .unwrap();
        assert!(matches!(a.add(&c), Err(Error::IncompatibleAxes(_))));
    }

    #[test]
    fn test_add_after_growth() {
        let axis = || -> Axis { GrowableAxis::new(2, 0.0, 2.0).unwrap().into() };
        let mut a: Hist1D = Histogram::new([axis()]).unwrap();
        let mut b: Hist1D = Histogram::new([axis()]).unwrap();
        b.fill(&[3.0]);
        assert!(a.add(&b).is_err());

        a.fill(&[3.0]);
        a.add(&b).unwrap();
        assert_eq!(a.sum(), 2.0);
    }

    #[test]
    fn test_add_labels_must_match() {
        let labeled = |labels: &[&str]| -> Hist1D {
            Histogram::new([LabeledAxis::new(3, labels.iter().copied()).unwrap().into()]).unwrap()
        };
        let mut a = labeled(&["a", "b"]);
        assert!(a.add(&labeled(&["a", "b"])).is_ok());
        assert!(a.add(&labeled(&["b", "a"])).is_err());
    }
}
