//! Bin content precision
//!
//! Histogram content is generic over its storage type so that callers can
//! trade precision for memory (`f32`) or keep exact integer counts (`i64`).
//! Coordinates are always `f64`; only the accumulated weights vary.

use num_traits::{Num, NumAssign};
use std::fmt::Debug;

/// Numeric type that can be stored as bin content
pub trait Weight: Num + NumAssign + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to f64 for painting and statistics
    fn to_f64(&self) -> f64;

    /// Convert from f64 (truncating for integer types)
    fn from_f64(val: f64) -> Self;
}

// `as` saturates at the integer bounds and maps NaN to zero
macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn from_f64(val: f64) -> Self {
                    val as $t
                }
            }
        )*
    };
}

impl_weight!(f64, f32, i64, i32);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn accumulate<T: Weight>(values: &[f64]) -> T {
        let mut acc = T::zero();
        for &v in values {
            acc += T::from_f64(v);
        }
        acc
    }

    #[test]
    fn test_float_weights() {
        assert_relative_eq!(accumulate::<f64>(&[0.5, 1.5, 2.0]).to_f64(), 4.0);
        assert_relative_eq!(accumulate::<f32>(&[0.25, 0.25]).to_f64(), 0.5);
    }

    #[test]
    fn test_integer_weights_truncate() {
        assert_eq!(accumulate::<i64>(&[1.0, 2.9, 3.1]), 6);
        assert_eq!(i32::from_f64(f64::NAN), 0);
        assert_eq!(i32::from_f64(1e300), i32::MAX);
    }
}
