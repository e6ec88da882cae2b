//! Error types for band-ta.
//!
//! This module defines the error types used throughout the band-ta library
//! for handling various failure conditions.

use thiserror::Error;

/// The main error type for band-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    ///
    /// The engine requires a non-empty candle sequence; positions with
    /// insufficient history within a non-empty sequence are represented by
    /// NaN values, not by this error.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The window length parameter is invalid.
    ///
    /// Returned when the length is zero or otherwise unusable for the
    /// requested operation.
    #[error("invalid window length {length}: {reason}")]
    InvalidPeriod {
        /// The invalid length value that was provided.
        length: usize,
        /// Description of why the length is invalid.
        reason: &'static str,
    },

    /// Two series that must be index-aligned have different lengths.
    ///
    /// The dispersion engine is keyed to the mean series computed over the
    /// same data; the two must be the same length.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The expected series length.
        expected: usize,
        /// The actual series length provided.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// Occurs when converting values (e.g. a `usize` window length to a
    /// generic float type) via `NumCast::from()` and the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// A source-field name did not match any of the four price fields.
    #[error("unknown source field '{name}': expected open, high, low, or close")]
    UnknownSource {
        /// The unrecognized name that was provided.
        name: String,
    },
}

/// Convenience type alias for Results using the band-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
