//! band-ta command-line interface
//!
//! Reads candle (OHLCV) data from CSV, computes the basis/upper/lower band
//! with the band-ta engine, and writes CSV output. Also generates seeded
//! synthetic candle data for demos.

use clap::Parser;
use log::{debug, info};

use band_ta::{bollinger_bands, BandSettings, Source};
use band_ta_cli::args::{Args, Command};
use band_ta_cli::csv_input::read_candles;
use band_ta_cli::csv_output::{write_band_points, write_candles, OutputDest};
use band_ta_cli::error::{CliError, Result};
use band_ta_cli::sample::generate_candles;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Bands {
            input,
            length,
            std_dev,
            offset,
            source,
            output,
        } => {
            let source: Source = source.parse().map_err(|_| CliError::InvalidArgument {
                argument: "source".to_string(),
                reason: format!("unknown source field '{source}'"),
                suggestion: Some("Valid values are open, high, low, close".to_string()),
            })?;

            let candles = read_candles(&input)?;
            info!("read {} candles from {input}", candles.len());

            let settings = BandSettings::default()
                .length(length)
                .std_dev_mult(std_dev)
                .offset(offset)
                .source(source);
            debug!("settings: {settings:?}");

            let points = bollinger_bands(&candles, &settings)?;
            write_band_points(&points, &OutputDest::from_arg(output))?;
            Ok(())
        }
        Command::Sample { bars, seed, output } => {
            let candles = generate_candles(bars, seed);
            info!("generated {bars} candles with seed {seed}");
            write_candles(&candles, &OutputDest::from_arg(output))?;
            Ok(())
        }
    }
}
