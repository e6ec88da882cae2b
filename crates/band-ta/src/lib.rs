//! band-ta: rolling-window Bollinger band engine
//!
//! This crate turns a candle (OHLCV) time series into a three-line band:
//! a basis line (simple moving average of a selected price field), plus an
//! upper and lower band each `k` rolling standard deviations away from the
//! basis. An integer offset can shift the output values forward or backward
//! against their timestamps.
//!
//! # Features
//!
//! - **Pure**: every computation is a function of (candles, settings) with
//!   no state held across calls
//! - **Aligned**: output has one record per input candle, index-aligned,
//!   with NaN marking positions that have no defined value
//! - **Generics**: the rolling kernels work with both `f32` and `f64`
//! - **Safety**: typed errors for invalid parameters, never panics on
//!   well-formed input
//!
//! # Quick Start
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let candles: Vec<Candle> = (0..5)
//!     .map(|i| Candle::new(i as i64, 1.0, 2.0, 0.5, (i + 1) as f64, 10.0))
//!     .collect();
//!
//! let settings = BandSettings::default().length(3).std_dev_mult(2.0);
//! let points = bollinger_bands(&candles, &settings).unwrap();
//!
//! // First 2 points are undefined (not enough history)
//! assert!(points[0].basis.is_nan());
//! assert!(points[1].basis.is_nan());
//! // Basis of the window [1, 2, 3] is 2
//! assert!((points[2].basis - 2.0).abs() < 1e-10);
//! ```
//!
//! # NaN Sentinel
//!
//! Positions lacking sufficient history, and positions addressed outside
//! the series bounds by an offset shift, carry `NaN` rather than raising an
//! error. Renderers are expected to treat NaN as "no value to draw".
//!
//! # Error Handling
//!
//! Parameter validation returns [`Result<T, Error>`]:
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let candles = vec![Candle::new(0, 1.0, 1.0, 1.0, 1.0, 0.0)];
//!
//! // Window length 0 is rejected
//! let settings = BandSettings::default().length(0);
//! assert!(bollinger_bands(&candles, &settings).is_err());
//!
//! // Empty input is rejected
//! let settings = BandSettings::default();
//! assert!(bollinger_bands(&[], &settings).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod candle;
pub mod error;
pub mod indicators;
pub mod prelude;
pub mod settings;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use candle::{extract_source, Candle, Source};
pub use error::{Error, Result};
pub use indicators::{bollinger_bands, BandPoint};
pub use settings::{BandSettings, BandStyle, MaType};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, count_nan_prefix, EPSILON};
