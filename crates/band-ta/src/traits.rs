//! Core traits for band-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], a common interface for numeric
//! operations on time series data that abstracts over `f32` and `f64`. The
//! module also provides input validation through [`ValidatedInput`] and the
//! standalone [`validate_period`] function.

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Extends `num_traits::Float` with the fallible conversions the rolling
/// kernels need (window length to element type, settings values to element
/// type).
///
/// # Type Bounds
///
/// - `Float`: standard floating-point operations (NaN handling, arithmetic)
/// - `NumCast`: safe conversion between numeric types
/// - `Copy` + `Default`: cheap iteration and zero-initialization
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Commonly used for converting the window length for division.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before indicator computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a window length is usable for rolling computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the length is zero.
#[inline]
pub const fn validate_period(length: usize) -> Result<()> {
    if length == 0 {
        Err(Error::InvalidPeriod {
            length,
            reason: "length must be at least 1",
        })
    } else {
        Ok(())
    }
}
