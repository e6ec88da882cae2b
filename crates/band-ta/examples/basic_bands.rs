//! Basic band computation example.
//!
//! Computes a 5-period band over a short close-price series and shows how
//! an offset moves values against their timestamps.
//!
//! Run with: `cargo run --example basic_bands`

use band_ta::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let closes: Vec<f64> = vec![
        48.16, 48.61, 48.75, 48.63, 48.74, 49.03, 49.07, 49.32, 49.91, 50.13, 49.53, 49.50, 49.75,
        50.03, 50.31, 50.52, 50.41, 49.34, 49.37, 50.23,
    ];

    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::new(i as i64 * 60_000, close, close + 0.2, close - 0.2, close, 1_000.0))
        .collect();

    let settings = BandSettings::default().length(5).std_dev_mult(2.0);
    let points = bollinger_bands(&candles, &settings)?;

    println!("=== Band (5, 2.0) over close prices ===");
    println!();
    println!(
        "  {:>5} {:>8} {:>10} {:>10} {:>10}",
        "Index", "Close", "Upper", "Basis", "Lower"
    );

    for (i, point) in points.iter().enumerate() {
        if point.basis.is_nan() {
            println!("  {:>5} {:>8.2} {:>10} {:>10} {:>10}", i, closes[i], "-", "-", "-");
        } else {
            println!(
                "  {:>5} {:>8.2} {:>10.4} {:>10.4} {:>10.4}",
                i, closes[i], point.upper, point.basis, point.lower
            );
        }
    }

    println!();
    println!("=== Same band, offset +2 (values lag, timestamps stay) ===");
    println!();

    let shifted = bollinger_bands(&candles, &settings.offset(2))?;
    for (i, (plain, moved)) in points.iter().zip(&shifted).enumerate() {
        assert_eq!(plain.timestamp, moved.timestamp);
        if !moved.basis.is_nan() {
            println!(
                "  index {i:>2}: basis {:.4} (was at index {})",
                moved.basis,
                i as isize - 2
            );
        }
    }

    Ok(())
}
