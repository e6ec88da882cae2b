//! Rolling-window indicator kernels and the band pipeline.
//!
//! The kernels share the following properties:
//!
//! - **Generic**: work with both `f32` and `f64` via
//!   [`SeriesElement`](crate::traits::SeriesElement)
//! - **Aligned**: output length always equals input length
//! - **NaN-sentinel**: positions with no defined value carry NaN instead of
//!   raising an error
//!
//! # Modules
//!
//! - [`sma`] - rolling arithmetic mean (the basis line)
//! - [`stddev`] - rolling population standard deviation, keyed to an
//!   already-computed mean series
//! - [`bands`] - band composition, offset shifting, and the
//!   candles-to-[`BandPoint`] pipeline

pub mod bands;
pub mod sma;
pub mod stddev;

pub use bands::{bollinger_bands, compose_bands, shift_series, BandPoint};
pub use sma::{sma, sma_lookback};
pub use stddev::rolling_stddev_about;
