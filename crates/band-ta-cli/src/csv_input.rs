//! CSV input module for reading candle data.
//!
//! Parses CSV files into [`Candle`] sequences for the engine.
//!
//! # Column Detection
//!
//! Columns are detected by header name, case-insensitively:
//! - `timestamp`, `time`, `date`, `datetime`, `dt` → timestamp (integer,
//!   e.g. milliseconds since the epoch); synthesized from the row index
//!   when absent
//! - `open`, `high`, `low`, `close` → the four price fields (required)
//! - `volume`, `vol` → volume (0 when absent)

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use band_ta::Candle;
use csv::ReaderBuilder;

use crate::error::{CliError, Result};

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents the timestamp column.
fn is_timestamp_column(header: &str) -> bool {
    matches!(
        normalize_header(header).as_str(),
        "timestamp" | "time" | "date" | "datetime" | "dt"
    )
}

/// Parse a string value to f64.
fn parse_price(value: &str, line: usize) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{}' as number", value.trim()),
            line: Some(line),
        })
}

/// Parse a string value to an integer timestamp.
fn parse_timestamp(value: &str, line: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::CsvParseError {
            message: format!(
                "cannot parse timestamp '{}' as integer (epoch milliseconds expected)",
                value.trim()
            ),
            line: Some(line),
        })
}

/// Parse a CSV file into a candle sequence.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed or missing one of the
/// four required price columns.
pub fn read_candles<P: AsRef<Path>>(path: P) -> Result<Vec<Candle>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    read_candles_from_reader(BufReader::new(file))
}

/// Parse candle CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
pub fn read_candles_from_reader<R: Read>(reader: R) -> Result<Vec<Candle>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map: HashMap<String, usize> = HashMap::new();
    let mut timestamp_idx: Option<usize> = None;
    for (idx, header) in headers.iter().enumerate() {
        if is_timestamp_column(header) {
            timestamp_idx = Some(idx);
        } else {
            column_map.insert(normalize_header(header), idx);
        }
    }

    let price_idx = |name: &str| -> Result<usize> {
        column_map
            .get(name)
            .copied()
            .ok_or_else(|| CliError::CsvParseError {
                message: format!("no '{name}' column found"),
                line: None,
            })
    };

    let open_idx = price_idx("open")?;
    let high_idx = price_idx("high")?;
    let low_idx = price_idx("low")?;
    let close_idx = price_idx("close")?;
    let volume_idx = column_map
        .get("volume")
        .or_else(|| column_map.get("vol"))
        .copied();

    let mut candles = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let line = row_idx + 2; // header is line 1
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        let field = |idx: usize| record.get(idx).unwrap_or("");

        let timestamp = match timestamp_idx {
            Some(idx) => parse_timestamp(field(idx), line)?,
            None => row_idx as i64,
        };
        let volume = match volume_idx {
            Some(idx) => parse_price(field(idx), line)?,
            None => 0.0,
        };

        candles.push(Candle::new(
            timestamp,
            parse_price(field(open_idx), line)?,
            parse_price(field(high_idx), line)?,
            parse_price(field(low_idx), line)?,
            parse_price(field(close_idx), line)?,
            volume,
        ));
    }

    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_full_ohlcv() {
        let csv_data = "timestamp,open,high,low,close,volume\n\
                        1000,44.0,45.0,43.5,44.5,1000000\n\
                        2000,44.5,45.5,44.0,45.0,1100000\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp, 1000);
        assert!((candles[0].open - 44.0).abs() < 1e-10);
        assert!((candles[0].high - 45.0).abs() < 1e-10);
        assert!((candles[0].low - 43.5).abs() < 1e-10);
        assert!((candles[0].close - 44.5).abs() < 1e-10);
        assert!((candles[0].volume - 1_000_000.0).abs() < 1e-10);
        assert_eq!(candles[1].timestamp, 2000);
    }

    #[test]
    fn test_headers_case_insensitive() {
        let csv_data = "Timestamp,OPEN,High,low,CLOSE\n1,44.0,45.0,43.0,44.5\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();
        assert_eq!(candles.len(), 1);
        assert!((candles[0].close - 44.5).abs() < 1e-10);
    }

    #[test]
    fn test_missing_timestamp_uses_row_index() {
        let csv_data = "open,high,low,close\n1.0,2.0,0.5,1.5\n2.0,3.0,1.5,2.5\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();
        assert_eq!(candles[0].timestamp, 0);
        assert_eq!(candles[1].timestamp, 1);
    }

    #[test]
    fn test_missing_volume_defaults_to_zero() {
        let csv_data = "timestamp,open,high,low,close\n1,1.0,2.0,0.5,1.5\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();
        assert!((candles[0].volume - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_vol_alias() {
        let csv_data = "timestamp,open,high,low,close,vol\n1,1.0,2.0,0.5,1.5,99.0\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();
        assert!((candles[0].volume - 99.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_price_column_error() {
        let csv_data = "timestamp,open,high,low\n1,1.0,2.0,0.5\n";
        let result = read_candles_from_reader(Cursor::new(csv_data));
        match result {
            Err(CliError::CsvParseError { message, .. }) => {
                assert!(message.contains("close"));
            }
            _ => panic!("Expected CsvParseError"),
        }
    }

    #[test]
    fn test_malformed_number_reports_line() {
        let csv_data = "timestamp,open,high,low,close\n1,1.0,2.0,0.5,1.5\n2,1.0,2.0,0.5,abc\n";
        let result = read_candles_from_reader(Cursor::new(csv_data));
        match result {
            Err(CliError::CsvParseError { message, line }) => {
                assert!(message.contains("abc"));
                assert_eq!(line, Some(3));
            }
            _ => panic!("Expected CsvParseError"),
        }
    }

    #[test]
    fn test_malformed_timestamp_error() {
        let csv_data = "date,open,high,low,close\n2024-01-01,1.0,2.0,0.5,1.5\n";
        let result = read_candles_from_reader(Cursor::new(csv_data));
        match result {
            Err(CliError::CsvParseError { message, .. }) => {
                assert!(message.contains("timestamp"));
            }
            _ => panic!("Expected CsvParseError"),
        }
    }

    #[test]
    fn test_file_not_found() {
        let result = read_candles("/nonexistent/path/to/file.csv");
        match result {
            Err(CliError::IoError { path, .. }) => {
                assert!(path.unwrap().contains("nonexistent"));
            }
            _ => panic!("Expected IoError"),
        }
    }

    #[test]
    fn test_empty_data_rows() {
        let csv_data = "timestamp,open,high,low,close\n";
        let candles = read_candles_from_reader(Cursor::new(csv_data)).unwrap();
        assert!(candles.is_empty());
    }
}
