//! CLI argument parsing module.
//!
//! Defines the command-line interface for band-ta using clap.
//!
//! # Examples
//!
//! ```bash
//! # Band with defaults (length 20, multiplier 2.0, close prices)
//! band-ta bands input.csv
//!
//! # Custom window, multiplier, and a lagging offset of 3 bars
//! band-ta bands input.csv --length 10 --std-dev 1.5 --offset 3
//!
//! # Read the high price instead of the close, write to a file
//! band-ta bands input.csv --source high -o bands.csv
//!
//! # Generate 500 bars of deterministic sample data
//! band-ta sample --bars 500 --seed 42 -o sample.csv
//! ```

use clap::{Parser, Subcommand};

/// band-ta: rolling-window band computation over OHLCV CSV data
#[derive(Parser, Debug)]
#[command(name = "band-ta")]
#[command(author, version, about = "Bollinger band computation for CSV candle data")]
#[command(long_about = "band-ta reads candle (OHLCV) data from CSV files, computes a \
    basis/upper/lower band with configurable window length, standard-deviation \
    multiplier, source field, and output offset, and writes the result as CSV \
    to a file or stdout.")]
pub struct Args {
    /// The operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the band over a candle CSV file
    #[command(about = "Compute basis/upper/lower band columns from candle data")]
    Bands {
        /// Input CSV file with timestamp/open/high/low/close columns
        input: String,

        /// Rolling window length in bars
        #[arg(long, default_value_t = 20)]
        length: usize,

        /// Standard-deviation multiplier for the upper and lower bands
        #[arg(long = "std-dev", default_value_t = 2.0)]
        std_dev: f64,

        /// Output offset in bars (positive lags, negative looks ahead)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: isize,

        /// Price field to read: open, high, low, or close
        #[arg(long, default_value = "close")]
        source: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate deterministic synthetic candle data
    #[command(about = "Generate a seeded random-walk OHLCV series as CSV")]
    Sample {
        /// Number of bars to generate
        #[arg(long, default_value_t = 250)]
        bars: usize,

        /// Seed for the random number generator (same seed, same series)
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}
