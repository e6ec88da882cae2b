//! Serialization-contract tests.
//!
//! External collaborators (settings editors, renderers) exchange these
//! types as data; field names and enum spellings are part of the contract
//! and must not drift.

use band_ta::prelude::*;
use serde_json::json;

#[test]
fn settings_serialize_with_stable_field_names() {
    let settings = BandSettings::default();
    let value = serde_json::to_value(settings).unwrap();

    assert_eq!(
        value,
        json!({
            "length": 20,
            "ma_type": "SMA",
            "std_dev_mult": 2.0,
            "offset": 0,
            "source": "close"
        })
    );
}

#[test]
fn settings_deserialize_from_collaborator_json() {
    let json = r#"{
        "length": 14,
        "ma_type": "SMA",
        "std_dev_mult": 1.5,
        "offset": -3,
        "source": "high"
    }"#;

    let settings: BandSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.length, 14);
    assert_eq!(settings.ma_type, MaType::Sma);
    assert!((settings.std_dev_mult - 1.5).abs() < 1e-10);
    assert_eq!(settings.offset, -3);
    assert_eq!(settings.source, Source::High);
}

#[test]
fn candle_round_trips_through_json() {
    let candle = Candle::new(1_700_000_000_000, 10.0, 12.0, 9.5, 11.0, 123_456.0);
    let json = serde_json::to_string(&candle).unwrap();
    let back: Candle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, candle);
}

#[test]
fn band_style_defaults_serialize_completely() {
    let style = BandStyle::default();
    let value = serde_json::to_value(&style).unwrap();

    for line in ["basis", "upper", "lower"] {
        let line_value = value.get(line).unwrap();
        for field in ["visible", "color", "width", "dash"] {
            assert!(line_value.get(field).is_some(), "{line}.{field} missing");
        }
    }
    assert_eq!(value["fill_color"], "#2196F3");
    assert_eq!(value["basis"]["dash"], "solid");
}

#[test]
fn band_points_serialize_for_renderers() {
    let candles: Vec<Candle> = (0..4)
        .map(|i| Candle::new(i, 1.0, 1.0, 1.0, 1.0, 0.0))
        .collect();
    let points = bollinger_bands(&candles, &BandSettings::default().length(2)).unwrap();

    // NaN has no JSON number representation; serde_json maps it to null,
    // which renderers already treat as "no value to draw".
    let value = serde_json::to_value(&points).unwrap();
    assert!(value[0]["basis"].is_null());
    assert!(value[1]["basis"].is_number());
}
