//! Read-only facade over any axis kind

use crate::base::BinnedAxis;
use crate::equidistant::EquidistantAxis;
use crate::irregular::IrregularAxis;

/// Borrowed view of an axis that hides which kind it is
///
/// Growable and labeled axes are viewed through their equidistant binning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisView<'a> {
    Equidistant(&'a EquidistantAxis),
    Irregular(&'a IrregularAxis),
}

impl<'a> AxisView<'a> {
    /// The equidistant axis behind the view, if any
    pub fn as_equidistant(&self) -> Option<&'a EquidistantAxis> {
        match *self {
            AxisView::Equidistant(axis) => Some(axis),
            AxisView::Irregular(_) => None,
        }
    }

    /// The irregular axis behind the view, if any
    pub fn as_irregular(&self) -> Option<&'a IrregularAxis> {
        match *self {
            AxisView::Equidistant(_) => None,
            AxisView::Irregular(axis) => Some(axis),
        }
    }
}

impl<'a> From<&'a EquidistantAxis> for AxisView<'a> {
    fn from(axis: &'a EquidistantAxis) -> Self {
        AxisView::Equidistant(axis)
    }
}

impl<'a> From<&'a IrregularAxis> for AxisView<'a> {
    fn from(axis: &'a IrregularAxis) -> Self {
        AxisView::Irregular(axis)
    }
}

macro_rules! forward {
    ($self:ident, $axis:ident => $call:expr) => {
        match *$self {
            AxisView::Equidistant($axis) => $call,
            AxisView::Irregular($axis) => $call,
        }
    };
}

impl BinnedAxis for AxisView<'_> {
    fn n_bins_no_over(&self) -> usize {
        forward!(self, axis => axis.n_bins_no_over())
    }

    fn find_bin(&self, x: f64) -> usize {
        forward!(self, axis => axis.find_bin(x))
    }

    fn bin_center(&self, bin: usize) -> f64 {
        forward!(self, axis => axis.bin_center(bin))
    }

    fn bin_from(&self, bin: usize) -> f64 {
        forward!(self, axis => axis.bin_from(bin))
    }

    fn bin_to(&self, bin: usize) -> f64 {
        forward!(self, axis => axis.bin_to(bin))
    }

    fn title(&self) -> &str {
        forward!(self, axis => axis.title())
    }

    fn minimum(&self) -> f64 {
        forward!(self, axis => axis.minimum())
    }

    fn maximum(&self) -> f64 {
        forward!(self, axis => axis.maximum())
    }
}
