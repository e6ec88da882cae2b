//! Property-based tests for the band engine using proptest.
//!
//! These verify invariants that must hold for all valid inputs, using
//! randomly generated series to find edge cases.

use proptest::prelude::*;

use band_ta::prelude::*;

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values).
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate a random candle sequence with strictly increasing timestamps
/// and valid OHLC relationships.
fn arb_candles(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Candle>> {
    prop::collection::vec(
        (1.0..1000.0_f64, 0.0..0.1_f64, 0.0..0.1_f64),
        min_len..=max_len,
    )
    .prop_map(|rows| {
        rows.iter()
            .enumerate()
            .map(|(i, &(base, high_pct, low_pct))| {
                let high = base * (1.0 + high_pct);
                let low = base * (1.0 - low_pct);
                Candle::new(i as i64 * 60_000, base, high, low, base, 1_000.0)
            })
            .collect::<Vec<Candle>>()
    })
}

// ==================== Mean Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The mean is NaN exactly when the index lacks a full window.
    #[test]
    fn prop_mean_nan_iff_insufficient_history(
        data in arb_price_series(1, 60),
        length in 1usize..=30,
    ) {
        let mean = sma(&data, length).unwrap();
        prop_assert_eq!(mean.len(), data.len());
        for (i, v) in mean.iter().enumerate() {
            prop_assert_eq!(v.is_nan(), i + 1 < length, "index {}", i);
        }
    }

    /// A constant series yields the constant mean and zero dispersion.
    #[test]
    fn prop_constant_series(
        constant in 1.0..1000.0_f64,
        len in 1usize..50,
        length in 1usize..=10,
    ) {
        let data = vec![constant; len];
        let mean = sma(&data, length).unwrap();
        let stddev = rolling_stddev_about(&data, length, &mean).unwrap();

        for i in 0..len {
            if i + 1 >= length {
                prop_assert!((mean[i] - constant).abs() < 1e-9);
                prop_assert!(stddev[i].abs() < 1e-9);
            } else {
                prop_assert!(mean[i].is_nan());
                prop_assert!(stddev[i].is_nan());
            }
        }
    }

    /// Window length 1: mean is the series itself and dispersion is
    /// exactly zero (the single point is its own mean).
    #[test]
    fn prop_length_one_degenerate(data in arb_price_series(1, 40)) {
        let mean = sma(&data, 1).unwrap();
        let stddev = rolling_stddev_about(&data, 1, &mean).unwrap();
        for i in 0..data.len() {
            prop_assert_eq!(mean[i], data[i]);
            prop_assert_eq!(stddev[i], 0.0);
        }
    }
}

// ==================== Dispersion Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Dispersion is NaN exactly where its paired mean is NaN, and
    /// non-negative everywhere else.
    #[test]
    fn prop_dispersion_tracks_mean(
        data in arb_price_series(1, 60),
        length in 1usize..=20,
    ) {
        let mean = sma(&data, length).unwrap();
        let stddev = rolling_stddev_about(&data, length, &mean).unwrap();
        for i in 0..data.len() {
            prop_assert_eq!(stddev[i].is_nan(), mean[i].is_nan(), "index {}", i);
            if !stddev[i].is_nan() {
                prop_assert!(stddev[i] >= 0.0);
            }
        }
    }
}

// ==================== Offset Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Offset 0 is the identity transform.
    #[test]
    fn prop_shift_zero_identity(data in arb_price_series(1, 60)) {
        let shifted = shift_series(&data, 0);
        for (a, b) in shifted.iter().zip(&data) {
            prop_assert!(approx_eq(*a, *b, EPSILON));
        }
    }

    /// Each in-bounds output position reads exactly `series[i - offset]`;
    /// out-of-bounds positions are NaN.
    #[test]
    fn prop_shift_reads_source_index(
        data in arb_price_series(1, 60),
        offset in -70isize..=70,
    ) {
        let shifted = shift_series(&data, offset);
        prop_assert_eq!(shifted.len(), data.len());
        for i in 0..data.len() {
            let src = i as isize - offset;
            if src >= 0 && (src as usize) < data.len() {
                prop_assert!(approx_eq(shifted[i], data[src as usize], EPSILON));
            } else {
                prop_assert!(shifted[i].is_nan());
            }
        }
    }

    /// Shifting forward then backward restores every doubly-in-bounds value.
    #[test]
    fn prop_shift_round_trip(
        data in arb_price_series(1, 60),
        offset in -20isize..=20,
    ) {
        let there = shift_series(&data, offset);
        let back = shift_series(&there, -offset);
        for i in 0..data.len() {
            if !back[i].is_nan() {
                prop_assert!(approx_eq(back[i], data[i], EPSILON));
            }
        }
    }
}

// ==================== Pipeline Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(250))]

    /// One output point per input candle, timestamps untouched.
    #[test]
    fn prop_pipeline_alignment(
        candles in arb_candles(1, 60),
        length in 1usize..=25,
        offset in -10isize..=10,
    ) {
        let settings = BandSettings::default().length(length).offset(offset);
        let points = bollinger_bands(&candles, &settings).unwrap();

        prop_assert_eq!(points.len(), candles.len());
        for (point, candle) in points.iter().zip(&candles) {
            prop_assert_eq!(point.timestamp, candle.timestamp);
        }
    }

    /// Wherever all three lines are defined, the band is symmetric about
    /// the basis with half-width `mult * stddev`.
    #[test]
    fn prop_pipeline_band_symmetry(
        candles in arb_candles(2, 60),
        length in 1usize..=15,
        mult in 0.0..4.0_f64,
    ) {
        let settings = BandSettings::default().length(length).std_dev_mult(mult);
        let points = bollinger_bands(&candles, &settings).unwrap();

        let source = extract_source(&candles, settings.source);
        let mean = sma(&source, length).unwrap();
        let stddev = rolling_stddev_about(&source, length, &mean).unwrap();

        for (i, point) in points.iter().enumerate() {
            if point.basis.is_nan() {
                prop_assert!(point.upper.is_nan());
                prop_assert!(point.lower.is_nan());
                continue;
            }
            let up = point.upper - point.basis;
            let down = point.basis - point.lower;
            prop_assert!((up - down).abs() < 1e-8, "asymmetric at {}", i);
            prop_assert!((up - mult * stddev[i]).abs() < 1e-8, "width off at {}", i);
        }
    }

    /// The three series are shifted independently but identically: the NaN
    /// pattern of upper and lower always matches the basis.
    #[test]
    fn prop_pipeline_uniform_nan_pattern(
        candles in arb_candles(1, 60),
        length in 1usize..=25,
        offset in -70isize..=70,
    ) {
        let settings = BandSettings::default().length(length).offset(offset);
        let points = bollinger_bands(&candles, &settings).unwrap();
        for point in &points {
            prop_assert_eq!(point.upper.is_nan(), point.basis.is_nan());
            prop_assert_eq!(point.lower.is_nan(), point.basis.is_nan());
        }
    }
}
