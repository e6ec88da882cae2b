//! Candle data model and source-field selection.
//!
//! A [`Candle`] is one OHLCV sample in the time series. The engine never
//! reads more than one price field per computation; [`Source`] selects
//! which one, and [`extract_source`] projects a candle slice down to the
//! scalar series the rolling kernels consume.
//!
//! The candle sequence is expected to be strictly ordered by increasing
//! timestamp with no duplicates. The engine does not re-sort or
//! de-duplicate; that is the caller's responsibility.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One OHLCV sample in the time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Sample timestamp in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Candle {
    /// Creates a candle from its six components.
    #[must_use]
    pub const fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Selector for the price field the engine reads from each candle.
///
/// A closed enum dispatched through an explicit match; there is no
/// reflective field access by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Opening price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Closing price (the conventional default).
    #[default]
    Close,
}

impl Source {
    /// Reads the selected field from a candle.
    #[inline]
    #[must_use]
    pub fn of(self, candle: &Candle) -> f64 {
        match self {
            Self::Open => candle.open,
            Self::High => candle.high,
            Self::Low => candle.low,
            Self::Close => candle.close,
        }
    }

    /// The lowercase field name, as it appears in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            _ => Err(Error::UnknownSource {
                name: s.to_string(),
            }),
        }
    }
}

/// Projects a candle sequence to the scalar series of one price field.
///
/// Total function: the output always has exactly one element per input
/// candle, in input order.
///
/// # Example
///
/// ```
/// use band_ta::candle::{extract_source, Candle, Source};
///
/// let candles = vec![
///     Candle::new(0, 1.0, 3.0, 0.5, 2.0, 10.0),
///     Candle::new(1, 2.0, 4.0, 1.5, 3.0, 12.0),
/// ];
///
/// assert_eq!(extract_source(&candles, Source::Close), vec![2.0, 3.0]);
/// assert_eq!(extract_source(&candles, Source::High), vec![3.0, 4.0]);
/// ```
#[must_use]
pub fn extract_source(candles: &[Candle], source: Source) -> Vec<f64> {
    candles.iter().map(|c| source.of(c)).collect()
}
