//! CSV output module for band results and generated candles.
//!
//! Band output keeps one row per input candle, index-aligned with the
//! input; undefined (NaN) values are written as empty cells, the textual
//! equivalent of "no value to draw".

use std::fs::File;
use std::io::{self, BufWriter, Write};

use band_ta::{BandPoint, Candle};

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Builds a destination from an optional path argument.
    #[must_use]
    pub fn from_arg(output: Option<String>) -> Self {
        match output {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Formats one value cell, mapping NaN to an empty cell.
fn cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write band points as `timestamp,basis,upper,lower` CSV.
///
/// Every point produces a row, including fully undefined ones; renderers
/// and spreadsheets then see the same index alignment the engine produced.
///
/// # Errors
///
/// Returns `CliError::IoError` on write failure.
pub fn write_band_points(points: &[BandPoint], dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;

    writeln!(writer, "timestamp,basis,upper,lower")?;
    for point in points {
        writeln!(
            writer,
            "{},{},{},{}",
            point.timestamp,
            cell(point.basis),
            cell(point.upper),
            cell(point.lower)
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write candles as `timestamp,open,high,low,close,volume` CSV.
///
/// # Errors
///
/// Returns `CliError::IoError` on write failure.
pub fn write_candles(candles: &[Candle], dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;

    writeln!(writer, "timestamp,open,high,low,close,volume")?;
    for c in candles {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            c.timestamp, c.open, c.high, c.low, c.close, c.volume
        )?;
    }

    writer.flush()?;
    Ok(())
}
