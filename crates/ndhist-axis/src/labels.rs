//! Axis whose bins are addressed by string labels

use crate::base::BinnedAxis;
use crate::growable::GrowableAxis;
use bitflags::bitflags;
use ndhist_core::{Error, Result};
use std::collections::HashMap;

bitflags! {
    /// Differences found by [`LabeledAxis::compare_labels`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LabelsCmp: u8 {
        /// Some labels of the other axis are missing on this one
        const SUBSET = 0b001;
        /// Some labels of this axis are missing on the other one
        const SUPERSET = 0b010;
        /// Labels present on both axes sit in different bins
        const DISORDERED = 0b100;
    }
}

impl LabelsCmp {
    /// Both axes hold the same labels in the same bins
    pub const SAME: Self = Self::empty();
}

/// Growable-family axis mapping labels to bins in order of first use
///
/// The axis has a fixed number of bins; label slot `k` (0-based) is regular
/// bin `k + 1` and covers the coordinate range `[k, k + 1)`. New labels take
/// the next free slot until all bins are assigned. The numeric range never
/// grows, since that would merge bins with different labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledAxis {
    axis: GrowableAxis,
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabeledAxis {
    /// Create an axis with room for `n_bins` labels, pre-assigning `labels`
    pub fn new<I, S>(n_bins: usize, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let axis = GrowableAxis::new(n_bins, 0.0, n_bins as f64)?;
        let mut labeled = Self {
            axis,
            labels: Vec::new(),
            index: HashMap::new(),
        };
        for label in labels {
            let label = label.into();
            if labeled.index.contains_key(&label) {
                return Err(Error::invalid_axis(format!("duplicate label {label:?}")));
            }
            if labeled.labels.len() == n_bins {
                return Err(Error::invalid_axis(format!(
                    "more labels than the {n_bins} available bins"
                )));
            }
            labeled.push_label(label);
        }
        Ok(labeled)
    }

    /// Create an axis with exactly one bin per label
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self::new(labels.len(), labels)
    }

    /// Set the axis title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.axis = self.axis.with_title(title);
        self
    }

    /// Label slot of `label`, assigning the next free slot on first use
    ///
    /// Returns `None` if the label is new and every bin already has a label.
    pub fn bin_index(&mut self, label: &str) -> Option<usize> {
        if let Some(&slot) = self.index.get(label) {
            return Some(slot);
        }
        if self.labels.len() == self.n_bins_no_over() {
            return None;
        }
        Some(self.push_label(label.to_string()))
    }

    /// Label slot of `label` without assigning one
    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Labels in slot order
    pub fn bin_labels(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of regular bin `bin`, if one has been assigned
    pub fn label_of_bin(&self, bin: usize) -> Option<&str> {
        bin.checked_sub(1)
            .and_then(|slot| self.labels.get(slot))
            .map(String::as_str)
    }

    /// Coordinate at the center of the bin for label slot `slot`
    pub fn slot_center(&self, slot: usize) -> f64 {
        self.axis.bin_center(slot + 1)
    }

    /// Compare the labels of `other` against those of this axis
    pub fn compare_labels(&self, other: &LabeledAxis) -> LabelsCmp {
        let mut result = LabelsCmp::SAME;
        for (slot, label) in other.labels.iter().enumerate() {
            match self.index.get(label) {
                None => result |= LabelsCmp::SUBSET,
                Some(&own) if own != slot => result |= LabelsCmp::DISORDERED,
                Some(_) => {}
            }
        }
        if self.labels.iter().any(|label| !other.index.contains_key(label)) {
            result |= LabelsCmp::SUPERSET;
        }
        result
    }

    /// The underlying numeric binning
    pub fn as_growable(&self) -> &GrowableAxis {
        &self.axis
    }

    fn push_label(&mut self, label: String) -> usize {
        let slot = self.labels.len();
        self.index.insert(label.clone(), slot);
        self.labels.push(label);
        slot
    }
}

impl BinnedAxis for LabeledAxis {
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
        self.axis.minimum()
    }

    fn maximum(&self) -> f64 {
        self.axis.maximum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_allocation() {
        let mut axis = LabeledAxis::new(3, ["a"]).unwrap();
        assert_eq!(axis.bin_index("a"), Some(0));
        assert_eq!(axis.bin_index("b"), Some(1));
        assert_eq!(axis.bin_index("a"), Some(0));
        assert_eq!(axis.bin_index("c"), Some(2));
        assert_eq!(axis.bin_index("d"), None);
        assert_eq!(axis.bin_labels(), vec!["a", "b", "c"]);
        assert_eq!(axis.find_label("d"), None);
    }

    #[test]
    fn test_label_bins_and_coordinates() {
        let axis = LabeledAxis::from_labels(["x", "y"]).unwrap();
        assert_eq!(axis.n_bins_no_over(), 2);
        assert_eq!(axis.slot_center(1), 1.5);
        assert_eq!(axis.find_bin(axis.slot_center(1)), 2);
        assert_eq!(axis.label_of_bin(2), Some("y"));
        assert_eq!(axis.label_of_bin(0), None);
        assert_eq!(axis.label_of_bin(3), None);
        assert!(!axis.can_grow());
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(matches!(
            LabeledAxis::from_labels(["a", "b", "a"]),
            Err(Error::InvalidAxisConfiguration(_))
        ));
        assert!(LabeledAxis::new(1, ["a", "b"]).is_err());
        assert!(LabeledAxis::new(0, Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_compare_labels() {
        let abc = LabeledAxis::from_labels(["a", "b", "c"]).unwrap();
        let same = LabeledAxis::from_labels(["a", "b", "c"]).unwrap();
        let ab = LabeledAxis::from_labels(["a", "b"]).unwrap();
        let abd = LabeledAxis::from_labels(["a", "b", "d"]).unwrap();
        let cba = LabeledAxis::from_labels(["c", "b", "a"]).unwrap();

        assert_eq!(abc.compare_labels(&same), LabelsCmp::SAME);
        assert_eq!(abc.compare_labels(&ab), LabelsCmp::SUPERSET);
        assert_eq!(ab.compare_labels(&abc), LabelsCmp::SUBSET);
        assert_eq!(
            abc.compare_labels(&abd),
            LabelsCmp::SUBSET | LabelsCmp::SUPERSET
        );
        assert_eq!(abc.compare_labels(&cba), LabelsCmp::DISORDERED);
    }
}
