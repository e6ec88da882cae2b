//! Shared utility functions for band-ta.
//!
//! Floating-point results of rolling computations should be compared with
//! a tolerance; these helpers treat a pair of NaN sentinels as equal so
//! expected-output tables can include undefined positions.

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or
/// if both are NaN.
///
/// # Example
///
/// ```
/// use band_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Count the number of NaN values at the beginning of a slice.
///
/// Useful for verifying the undefined-history prefix of kernel outputs.
///
/// # Example
///
/// ```
/// use band_ta::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
