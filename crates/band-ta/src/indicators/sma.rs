//! Rolling arithmetic mean (the basis line).
//!
//! # Algorithm
//!
//! O(n) running-sum: the initial sum covers the first window, then each
//! step adds the newest value and subtracts the oldest. Any algorithm
//! producing the same values per window is equivalent; this one trades a
//! bounded amount of floating-point reassociation for linear time.
//!
//! # Example
//!
//! ```
//! use band_ta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // First 2 values are NaN (not enough preceding samples)
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10); // (1+2+3)/3
//! assert!((result[3] - 3.0).abs() < 1e-10); // (2+3+4)/3
//! assert!((result[4] - 4.0).abs() < 1e-10); // (3+4+5)/3
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement, ValidatedInput};

/// Returns the number of NaN values at the start of the SMA output.
///
/// # Example
///
/// ```
/// use band_ta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(length: usize) -> usize {
    if length == 0 {
        0
    } else {
        length - 1
    }
}

/// Computes the rolling arithmetic mean of a data series.
///
/// Returns a vector of the same length as the input. The value at index
/// `i` is NaN when `i < length - 1` (insufficient history), and otherwise
/// the mean of the `length` contiguous values ending at `i`.
///
/// A series shorter than the window is not an error: every position lacks
/// sufficient history, so the output is all-NaN. This keeps the
/// "NaN exactly when `i < length - 1`" contract uniform over input length.
///
/// # Errors
///
/// Returns an error if:
/// - The length is zero (`Error::InvalidPeriod`)
/// - The input data is empty (`Error::EmptyInput`)
///
/// # Performance
///
/// O(n) time, O(n) space for the output vector.
pub fn sma<T: SeriesElement>(data: &[T], length: usize) -> Result<Vec<T>> {
    validate_period(length)?;
    data.validate_not_empty()?;

    // A window of one is the series itself; skipping the running sum keeps
    // the identity bit-exact, which in turn pins the paired dispersion to
    // exactly zero.
    if length == 1 {
        return Ok(data.to_vec());
    }

    let mut result = vec![T::nan(); data.len()];
    if data.len() < length {
        return Ok(result);
    }

    let length_t = T::from_usize(length)?;

    // Initial sum over the first window
    let mut sum = T::zero();
    for &value in data.iter().take(length) {
        sum = sum + value;
    }
    result[length - 1] = sum / length_t;

    // Rolling update: add the newest value, drop the oldest
    for i in length..data.len() {
        sum = sum + data[i] - data[i - length];
        result[i] = sum / length_t;
    }

    Ok(result)
}
