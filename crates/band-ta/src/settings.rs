//! Band computation settings and the visual style contract.
//!
//! [`BandSettings`] is the full configuration of one band computation:
//! window length, moving-average type, standard-deviation multiplier,
//! output offset, and source field. It is immutable and supplied per call.
//!
//! [`BandStyle`] carries the purely visual options a rendering collaborator
//! consumes (per-line visibility, color, width, dash style, fill). The
//! engine itself never reads it; it is defined here so producers and
//! renderers share one contract.

use serde::{Deserialize, Serialize};

use crate::candle::Source;

/// The moving-average algorithm used for the basis line.
///
/// Only the simple moving average is currently supported; the enum exists
/// so the settings contract can grow without changing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaType {
    /// Simple moving average.
    #[default]
    Sma,
}

/// Configuration for one band computation.
///
/// Provides the conventional defaults (length 20, SMA, multiplier 2.0,
/// offset 0, close prices) and fluent setters for customization.
///
/// # Example
///
/// ```
/// use band_ta::settings::BandSettings;
/// use band_ta::candle::Source;
///
/// // Use the defaults
/// let settings = BandSettings::default();
/// assert_eq!(settings.length, 20);
///
/// // Or customize with the fluent API
/// let settings = BandSettings::default()
///     .length(10)
///     .std_dev_mult(2.5)
///     .offset(-1)
///     .source(Source::High);
/// assert_eq!(settings.offset, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSettings {
    /// Rolling window length in samples. Must be at least 1.
    pub length: usize,
    /// Moving-average algorithm for the basis line.
    pub ma_type: MaType,
    /// Multiplier applied to the rolling standard deviation when deriving
    /// the upper and lower bands. A negative value swaps the band sides;
    /// it is accepted as-is.
    pub std_dev_mult: f64,
    /// Output shift in whole samples. Positive values lag the displayed
    /// value (each position shows an earlier sample); negative values look
    /// ahead. Timestamps are never shifted.
    pub offset: isize,
    /// The price field read from each candle.
    pub source: Source,
}

impl Default for BandSettings {
    fn default() -> Self {
        Self {
            length: 20,
            ma_type: MaType::Sma,
            std_dev_mult: 2.0,
            offset: 0,
            source: Source::Close,
        }
    }
}

impl BandSettings {
    /// Sets the rolling window length.
    ///
    /// Default: 20
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the standard-deviation multiplier.
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn std_dev_mult(mut self, mult: f64) -> Self {
        self.std_dev_mult = mult;
        self
    }

    /// Sets the output offset in samples.
    ///
    /// Default: 0
    #[must_use]
    pub const fn offset(mut self, offset: isize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the source price field.
    ///
    /// Default: [`Source::Close`]
    #[must_use]
    pub const fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }
}

/// Dash style of one band line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Dashed stroke.
    Dashed,
}

/// Visual options for one of the three band lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Whether the line is drawn at all.
    pub visible: bool,
    /// Stroke color as a CSS-style hex string.
    pub color: String,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke dash style.
    pub dash: LineDash,
}

impl LineStyle {
    fn solid(color: &str) -> Self {
        Self {
            visible: true,
            color: color.to_string(),
            width: 1.0,
            dash: LineDash::Solid,
        }
    }
}

/// Visual options for the whole band, consumed by a rendering collaborator.
///
/// The engine never reads these values; renderers must skip NaN output
/// points rather than treat them as failures, and must not reinterpret
/// engine output values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    /// Style of the basis (middle) line.
    pub basis: LineStyle,
    /// Style of the upper band line.
    pub upper: LineStyle,
    /// Style of the lower band line.
    pub lower: LineStyle,
    /// Whether the area between the bands is filled.
    pub fill_visible: bool,
    /// Fill color as a CSS-style hex string.
    pub fill_color: String,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            basis: LineStyle::solid("#FF6D00"),
            upper: LineStyle::solid("#2196F3"),
            lower: LineStyle::solid("#2196F3"),
            fill_visible: true,
            fill_color: "#2196F3".to_string(),
            fill_opacity: 0.1,
        }
    }
}
