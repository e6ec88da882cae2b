//! Deterministic synthetic candle generation.
//!
//! Generates a seeded random-walk OHLCV series for demos and testing. The
//! same seed always produces the same series, and the generated candles
//! uphold the OHLC invariants (`high >= max(open, close)`,
//! `low <= min(open, close)`) with strictly increasing timestamps.

use band_ta::Candle;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Milliseconds per generated bar (one minute).
const BAR_INTERVAL_MS: i64 = 60_000;

/// Epoch-millisecond timestamp of the first generated bar.
const START_TIMESTAMP_MS: i64 = 1_700_000_000_000;

/// Generates `bars` candles of seeded random-walk price data.
///
/// The close follows a random walk with mild drift; open is the previous
/// close; high and low wrap both with a random wick on each side.
///
/// # Example
///
/// ```
/// use band_ta_cli::sample::generate_candles;
///
/// let a = generate_candles(100, 42);
/// let b = generate_candles(100, 42);
/// assert_eq!(a.len(), 100);
/// assert_eq!(a[0], b[0]); // same seed, same series
/// ```
#[must_use]
pub fn generate_candles(bars: usize, seed: u64) -> Vec<Candle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut candles = Vec::with_capacity(bars);

    let mut close = 100.0_f64;
    for i in 0..bars {
        let open = close;

        // Random step with slight upward drift, bounded away from zero
        let step: f64 = rng.gen_range(-0.02..0.0205);
        close = (open * (1.0 + step)).max(1.0);

        let body_high = open.max(close);
        let body_low = open.min(close);
        let upper_wick: f64 = rng.gen_range(0.0..0.01);
        let lower_wick: f64 = rng.gen_range(0.0..0.01);
        let high = body_high * (1.0 + upper_wick);
        let low = body_low * (1.0 - lower_wick);

        let volume: f64 = rng.gen_range(100_000.0..2_000_000.0);

        candles.push(Candle::new(
            START_TIMESTAMP_MS + i as i64 * BAR_INTERVAL_MS,
            open,
            high,
            low,
            close,
            volume,
        ));
    }

    candles
}
