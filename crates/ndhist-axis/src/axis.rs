//! Closed set of axis kinds used by histograms

use crate::base::BinnedAxis;
use crate::config::AxisConfig;
use crate::equidistant::EquidistantAxis;
use crate::growable::GrowableAxis;
use crate::irregular::IrregularAxis;
use crate::labels::{LabeledAxis, LabelsCmp};
use crate::view::AxisView;
use std::fmt;

/// Which kind of binning an axis or configuration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Equidistant,
    Growable,
    Irregular,
    Labels,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equidistant => "equidistant",
            Self::Growable => "growable",
            Self::Irregular => "irregular",
            Self::Labels => "labels",
        };
        f.write_str(name)
    }
}

/// One histogram dimension: any of the four axis kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Equidistant(EquidistantAxis),
    Growable(GrowableAxis),
    Irregular(IrregularAxis),
    Labels(LabeledAxis),
}

macro_rules! dispatch {
    ($self:ident, $axis:ident => $call:expr) => {
        match $self {
            Axis::Equidistant($axis) => $call,
            Axis::Growable($axis) => $call,
            Axis::Irregular($axis) => $call,
            Axis::Labels($axis) => $call,
        }
    };
}

impl Axis {
    pub fn kind(&self) -> AxisKind {
        match self {
            Axis::Equidistant(_) => AxisKind::Equidistant,
            Axis::Growable(_) => AxisKind::Growable,
            Axis::Irregular(_) => AxisKind::Irregular,
            Axis::Labels(_) => AxisKind::Labels,
        }
    }

    /// Kind-independent read-only view
    pub fn view(&self) -> AxisView<'_> {
        match self {
            Axis::Equidistant(axis) => AxisView::Equidistant(axis),
            Axis::Growable(axis) => AxisView::Equidistant(axis.as_equidistant()),
            Axis::Irregular(axis) => AxisView::Irregular(axis),
            Axis::Labels(axis) => AxisView::Equidistant(axis.as_growable().as_equidistant()),
        }
    }

    /// Configuration that rebuilds this axis
    pub fn config(&self) -> AxisConfig {
        AxisConfig::from(self)
    }

    pub fn as_growable_mut(&mut self) -> Option<&mut GrowableAxis> {
        match self {
            Axis::Growable(axis) => Some(axis),
            _ => None,
        }
    }

    pub fn as_labels(&self) -> Option<&LabeledAxis> {
        match self {
            Axis::Labels(axis) => Some(axis),
            _ => None,
        }
    }

    pub fn as_labels_mut(&mut self) -> Option<&mut LabeledAxis> {
        match self {
            Axis::Labels(axis) => Some(axis),
            _ => None,
        }
    }

    /// Whether both axes are of the same kind and bin identically
    ///
    /// Titles are ignored. Labeled axes must carry the same labels in the
    /// same bins.
    pub fn has_same_binning_as(&self, other: &Axis) -> bool {
        match (self, other) {
            (Axis::Equidistant(a), Axis::Equidistant(b)) => same_equidistant(a, b),
            (Axis::Growable(a), Axis::Growable(b)) => {
                same_equidistant(a.as_equidistant(), b.as_equidistant())
            }
            (Axis::Irregular(a), Axis::Irregular(b)) => a.borders() == b.borders(),
            (Axis::Labels(a), Axis::Labels(b)) => {
                a.n_bins_no_over() == b.n_bins_no_over()
                    && a.compare_labels(b) == LabelsCmp::SAME
            }
            _ => false,
        }
    }
}

fn same_equidistant(a: &EquidistantAxis, b: &EquidistantAxis) -> bool {
    a.n_bins_no_over() == b.n_bins_no_over()
        && a.low() == b.low()
        && a.inverse_bin_width() == b.inverse_bin_width()
}

impl BinnedAxis for Axis {
    fn n_bins_no_over(&self) -> usize {
        dispatch!(self, axis => axis.n_bins_no_over())
    }

    fn find_bin(&self, x: f64) -> usize {
        dispatch!(self, axis => axis.find_bin(x))
    }

    fn bin_center(&self, bin: usize) -> f64 {
        dispatch!(self, axis => axis.bin_center(bin))
    }

    fn bin_from(&self, bin: usize) -> f64 {
        dispatch!(self, axis => axis.bin_from(bin))
    }

    fn bin_to(&self, bin: usize) -> f64 {
        dispatch!(self, axis => axis.bin_to(bin))
    }

    fn title(&self) -> &str {
        dispatch!(self, axis => axis.title())
    }

    fn minimum(&self) -> f64 {
        dispatch!(self, axis => axis.minimum())
    }

    fn maximum(&self) -> f64 {
        dispatch!(self, axis => axis.maximum())
    }

    fn can_grow(&self) -> bool {
        dispatch!(self, axis => axis.can_grow())
    }
}

impl From<EquidistantAxis> for Axis {
    fn from(axis: EquidistantAxis) -> Self {
        Axis::Equidistant(axis)
    }
}

impl From<GrowableAxis> for Axis {
    fn from(axis: GrowableAxis) -> Self {
        Axis::Growable(axis)
    }
}

impl From<IrregularAxis> for Axis {
    fn from(axis: IrregularAxis) -> Self {
        Axis::Irregular(axis)
    }
}

impl From<LabeledAxis> for Axis {
    fn from(axis: LabeledAxis) -> Self {
        Axis::Labels(axis)
    }
}
