//! Band composition, offset shifting, and the full candle pipeline.
//!
//! The composer derives the upper and lower bands from a mean series and
//! its paired dispersion series (`mean ± mult · stddev`), then an integer
//! offset shifts each of the three series independently along the index
//! axis. Output timestamps are never shifted: every output point carries
//! the timestamp of its input candle, while its value fields may come from
//! a different index. This value/timestamp asymmetry is how "plot the
//! indicator N periods earlier/later against the current bar" works, and
//! it is preserved exactly.
//!
//! # Example
//!
//! ```
//! use band_ta::candle::Candle;
//! use band_ta::settings::BandSettings;
//! use band_ta::indicators::bands::bollinger_bands;
//!
//! let candles: Vec<Candle> = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &close)| Candle::new(i as i64, close, close, close, close, 0.0))
//!     .collect();
//!
//! let settings = BandSettings::default().length(3).std_dev_mult(2.0);
//! let points = bollinger_bands(&candles, &settings).unwrap();
//!
//! let dev = (2.0_f64 / 3.0).sqrt();
//! assert!((points[2].basis - 2.0).abs() < 1e-10);
//! assert!((points[2].upper - (2.0 + 2.0 * dev)).abs() < 1e-10);
//! assert!((points[2].lower - (2.0 - 2.0 * dev)).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::candle::{extract_source, Candle};
use crate::error::{Error, Result};
use crate::settings::{BandSettings, MaType};
use crate::traits::SeriesElement;

use super::sma::sma;
use super::stddev::rolling_stddev_about;

/// One output record of the band pipeline, index-aligned with its input
/// candle.
///
/// Value fields are either finite or NaN ("no defined value at this
/// position": insufficient history, or shifted out of range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    /// Timestamp of the input candle at the same index. Never shifted.
    pub timestamp: i64,
    /// The basis (moving-average) line value.
    pub basis: f64,
    /// The upper band value.
    pub upper: f64,
    /// The lower band value.
    pub lower: f64,
}

/// Derives the upper and lower bands from a mean series and its paired
/// dispersion series.
///
/// `upper[i] = mean[i] + mult · stddev[i]` and
/// `lower[i] = mean[i] - mult · stddev[i]` wherever both inputs are
/// finite; every other position is NaN.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the two series differ in length.
pub fn compose_bands<T: SeriesElement>(
    mean: &[T],
    stddev: &[T],
    mult: T,
) -> Result<(Vec<T>, Vec<T>)> {
    if mean.len() != stddev.len() {
        return Err(Error::LengthMismatch {
            expected: mean.len(),
            actual: stddev.len(),
        });
    }

    let mut upper = Vec::with_capacity(mean.len());
    let mut lower = Vec::with_capacity(mean.len());

    for (&m, &s) in mean.iter().zip(stddev) {
        if m.is_finite() && s.is_finite() {
            upper.push(m + mult * s);
            lower.push(m - mult * s);
        } else {
            upper.push(T::nan());
            lower.push(T::nan());
        }
    }

    Ok((upper, lower))
}

/// Shifts a series along the index axis by a whole number of samples.
///
/// `shifted[i] = series[i - offset]` when `i - offset` is in bounds, NaN
/// otherwise. An offset of 0 is the identity. Positive offsets lag the
/// displayed value (each position shows an earlier sample); negative
/// offsets look ahead. The formula is uniform for both signs.
///
/// # Example
///
/// ```
/// use band_ta::indicators::bands::shift_series;
///
/// let series = vec![f64::NAN, f64::NAN, 2.0, 3.0, 4.0];
/// let shifted = shift_series(&series, 1);
///
/// assert!(shifted[0].is_nan());
/// assert!(shifted[1].is_nan());
/// assert!(shifted[2].is_nan());
/// assert!((shifted[3] - 2.0).abs() < 1e-10);
/// assert!((shifted[4] - 3.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn shift_series<T: SeriesElement>(series: &[T], offset: isize) -> Vec<T> {
    if offset == 0 {
        return series.to_vec();
    }

    let n = series.len() as isize;
    (0..n)
        .map(|i| {
            let src = i - offset;
            if src >= 0 && src < n {
                series[src as usize]
            } else {
                T::nan()
            }
        })
        .collect()
}

/// Computes the full band for a candle sequence.
///
/// Pipeline: extract the selected source field, compute the rolling mean
/// (the basis), compute the rolling population standard deviation keyed to
/// that mean, derive upper/lower as `mean ± mult · stddev`, then shift the
/// three value series independently by `settings.offset`. Returns one
/// [`BandPoint`] per input candle, each carrying the timestamp of its own
/// candle.
///
/// The computation is a pure function of `(candles, settings)`: no state
/// is held across calls, and every settings change is a full recompute.
///
/// # Errors
///
/// Returns an error if:
/// - `settings.length` is zero (`Error::InvalidPeriod`)
/// - `candles` is empty (`Error::EmptyInput`)
pub fn bollinger_bands(candles: &[Candle], settings: &BandSettings) -> Result<Vec<BandPoint>> {
    let source = extract_source(candles, settings.source);

    let mean = match settings.ma_type {
        MaType::Sma => sma(&source, settings.length)?,
    };
    let stddev = rolling_stddev_about(&source, settings.length, &mean)?;
    let (upper, lower) = compose_bands(&mean, &stddev, settings.std_dev_mult)?;

    let basis = shift_series(&mean, settings.offset);
    let upper = shift_series(&upper, settings.offset);
    let lower = shift_series(&lower, settings.offset);

    Ok(candles
        .iter()
        .enumerate()
        .map(|(i, candle)| BandPoint {
            timestamp: candle.timestamp,
            basis: basis[i],
            upper: upper[i],
            lower: lower[i],
        })
        .collect())
}
