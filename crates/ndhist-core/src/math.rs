//! Floating-point comparison helpers shared by the axis code

/// Relative tolerance used when matching bin borders and width ratios
pub const REL_TOLERANCE: f64 = 1e-6;

/// Whether `a` and `b` agree within `rel_tol` of the larger magnitude
pub fn approx_equal_rel(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Whether the fractional bin index `frac` sits on a border
///
/// Returns the rounded border index when the deviation is within `rel_tol`
/// scaled by the magnitude of the coordinate `x` (floored at one so that
/// borders near zero are still found).
pub fn snap_to_border(frac: f64, x: f64, rel_tol: f64) -> Option<i64> {
    if !frac.is_finite() {
        return None;
    }
    let rounded = frac.round();
    if (frac - rounded).abs() > rel_tol * x.abs().max(1.0) {
        return None;
    }
    if rounded.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}
