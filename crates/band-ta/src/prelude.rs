//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let candles: Vec<Candle> = (0..10)
//!     .map(|i| Candle::new(i as i64, 1.0, 2.0, 0.5, 1.5, 100.0))
//!     .collect();
//!
//! let points = bollinger_bands(&candles, &BandSettings::default().length(5)).unwrap();
//! assert_eq!(points.len(), candles.len());
//! ```
//!
//! # Contents
//!
//! - Data contracts: [`Candle`], [`Source`], [`BandSettings`], [`MaType`],
//!   [`BandPoint`], [`BandStyle`]
//! - The pipeline entry point [`bollinger_bands`] and its kernels
//!   ([`sma`], [`rolling_stddev_about`], [`compose_bands`], [`shift_series`])
//! - Error handling: [`Error`], [`Result`]
//! - Traits: [`SeriesElement`], [`ValidatedInput`]

pub use crate::candle::{extract_source, Candle, Source};
pub use crate::error::{Error, Result};
pub use crate::indicators::{
    bollinger_bands, compose_bands, shift_series, sma, sma_lookback, BandPoint,
};
pub use crate::indicators::stddev::rolling_stddev_about;
pub use crate::settings::{BandSettings, BandStyle, LineDash, LineStyle, MaType};
pub use crate::traits::{SeriesElement, ValidatedInput};
pub use crate::utils::{approx_eq, count_nan_prefix, EPSILON};
