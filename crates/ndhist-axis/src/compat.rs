//! Whether two equidistant binnings can be mapped onto each other

use crate::base::BinnedAxis;
use crate::equidistant::EquidistantAxis;
use crate::view::AxisView;
use ndhist_core::math::{approx_equal_rel, REL_TOLERANCE};
use std::fmt;

/// How a source axis relates to a target axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisCompatibility {
    /// Same bin count, minimum and bin width
    Identical,
    /// Source bins coincide with a contiguous run of target bins
    Contains,
    /// Source range starts and ends on target borders with a different bin width
    Sampling,
    /// No mapping between the binnings
    Incompatible,
}

impl fmt::Display for AxisCompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identical => "identical",
            Self::Contains => "contains",
            Self::Sampling => "sampling",
            Self::Incompatible => "incompatible",
        };
        f.write_str(name)
    }
}

/// Classify `source` relative to `target`
///
/// The checks run in a fixed order: exact identity, then whether both ends
/// of `source` lie on borders of `target`, then whether the bin widths are
/// equal (contains) or the target bin width is an integer multiple of at
/// least two source bin widths (sampling).
pub fn classify(target: &EquidistantAxis, source: &EquidistantAxis) -> AxisCompatibility {
    if target.n_bins_no_over() == source.n_bins_no_over()
        && target.low() == source.low()
        && target.inverse_bin_width() == source.inverse_bin_width()
    {
        return AxisCompatibility::Identical;
    }

    if target.bin_index_for_low_edge(source.minimum()).is_none()
        || target.bin_index_for_low_edge(source.maximum()).is_none()
    {
        return AxisCompatibility::Incompatible;
    }

    if approx_equal_rel(
        target.inverse_bin_width(),
        source.inverse_bin_width(),
        REL_TOLERANCE,
    ) {
        return AxisCompatibility::Contains;
    }

    // Source bins per target bin
    let subdivision = source.inverse_bin_width() / target.inverse_bin_width();
    let whole = subdivision.round();
    if whole >= 2.0 && approx_equal_rel(subdivision, whole, REL_TOLERANCE) {
        AxisCompatibility::Sampling
    } else {
        AxisCompatibility::Incompatible
    }
}

/// Classify two axes of any kind
///
/// Equidistant-family axes go through [`classify`]; irregular axes are
/// identical when their borders match and incompatible otherwise.
pub fn classify_views(target: AxisView<'_>, source: AxisView<'_>) -> AxisCompatibility {
    match (target, source) {
        (AxisView::Equidistant(t), AxisView::Equidistant(s)) => classify(t, s),
        (AxisView::Irregular(t), AxisView::Irregular(s)) if t.borders() == s.borders() => {
            AxisCompatibility::Identical
        }
        _ => AxisCompatibility::Incompatible,
    }
}
