//! Rolling population standard deviation, keyed to a paired mean series.
//!
//! Unlike a free-standing dispersion kernel, this one takes the mean series
//! already computed over the same data and window. The pairing carries two
//! guarantees:
//!
//! - NaN propagation: wherever the mean is NaN, the dispersion is NaN.
//!   Dispersion never computes independently of its mean.
//! - The variance at `i` is the mean over the window of squared deviations
//!   from `mean[i]` itself, divided by the window length (population form,
//!   never `length - 1`).
//!
//! # Example
//!
//! ```
//! use band_ta::indicators::{sma, stddev::rolling_stddev_about};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let mean = sma(&data, 3).unwrap();
//! let result = rolling_stddev_about(&data, 3, &mean).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // Population stddev of [1,2,3] about mean 2 is sqrt(2/3)
//! assert!((result[2] - (2.0_f64 / 3.0).sqrt()).abs() < 1e-10);
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_period, SeriesElement, ValidatedInput};

/// Computes the rolling population standard deviation about a paired mean.
///
/// `mean` must be index-aligned with `data` (same length), as produced by
/// [`sma`](crate::indicators::sma::sma) over the same data and window
/// length. The output at `i` is NaN exactly where `mean[i]` is NaN; at
/// every other index it is
/// `sqrt(sum((data[j] - mean[i])^2 for j in window) / length)`.
///
/// A window of length 1 always yields exactly zero: the single point is
/// its own mean.
///
/// # Errors
///
/// Returns an error if:
/// - The length is zero (`Error::InvalidPeriod`)
/// - The input data is empty (`Error::EmptyInput`)
/// - `mean` is not the same length as `data` (`Error::LengthMismatch`)
///
/// # Performance
///
/// O(n·length) time: each defined position re-reads its window. The window
/// re-read keeps every deviation anchored to the exact mean value paired
/// with that position.
pub fn rolling_stddev_about<T: SeriesElement>(
    data: &[T],
    length: usize,
    mean: &[T],
) -> Result<Vec<T>> {
    validate_period(length)?;
    data.validate_not_empty()?;

    if mean.len() != data.len() {
        return Err(Error::LengthMismatch {
            expected: data.len(),
            actual: mean.len(),
        });
    }

    let length_t = T::from_usize(length)?;
    let mut result = vec![T::nan(); data.len()];

    for i in 0..data.len() {
        let m = mean[i];
        if m.is_nan() || i + 1 < length {
            continue;
        }

        let mut acc = T::zero();
        for &value in &data[i + 1 - length..=i] {
            let deviation = value - m;
            acc = acc + deviation * deviation;
        }
        result[i] = (acc / length_t).sqrt();
    }

    Ok(result)
}
