//! Tests for derived fields and dataset accessors

use super::super::MagnetometerDataset;
use super::super::parser::MagnetometerParser;
use super::{create_linear_v6, create_temp_file, create_two_station_v2};
use crate::Error;
use crate::app::models::DerivedKind;
use crate::config::{DerivedFields, ReaderConfig};

fn read(content: &str) -> MagnetometerDataset {
    MagnetometerParser::default().parse_str(content, "test.txt").unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
    }
}

#[test]
fn test_horizontal_magnitude() {
    let content = "Revision: 6\nSelected Stations: ALE\n=====\n2001 01 01 00 00 00\nALE 3 4 12 0 0 0";
    let mut data = read(content);

    data.compute_horizontal_magnitude().unwrap();

    let field = data.derived("ALE_H").unwrap();
    assert_eq!(field.values, vec![5.0]);
    assert_eq!(field.kind, DerivedKind::HorizontalMagnitude);
    assert_eq!(field.key(), "ALE_H");
}

#[test]
fn test_total_magnitude() {
    let content = "Revision: 6\nSelected Stations: ALE\n=====\n2001 01 01 00 00 00\nALE 2 3 6 0 0 0";
    let mut data = read(content);

    data.compute_total_magnitude().unwrap();

    assert_eq!(data.derived("ALE_B").unwrap().values, vec![7.0]);
}

#[test]
fn test_horizontal_rate_on_irregular_grid() {
    let mut data = read(&create_linear_v6());
    assert_eq!(data.time_gaps(), vec![60.0, 60.0, 180.0]);

    data.compute_horizontal_rate().unwrap();

    let rate = data.derived_for("ALE", DerivedKind::HorizontalRate).unwrap();
    assert_close(&rate.values, &[1.0, 1.0, 1.0, 2.0]);
}

#[test]
fn test_derived_fields_leave_series_untouched() {
    let mut data = read(&create_linear_v6());
    let before = data.get("ALE").unwrap().clone();

    data.compute_derived(DerivedFields::all()).unwrap();

    assert_eq!(data.get("ALE").unwrap(), &before);
    let keys: Vec<String> = data.derived_fields().map(|f| f.key()).collect();
    assert_eq!(keys, ["ALE_B", "ALE_H", "ALE_dH"]);
}

#[test]
fn test_repeated_derivation_keeps_first_result() {
    let mut data = read(&create_linear_v6());
    data.compute_horizontal_magnitude().unwrap();
    let first = data.derived("ALE_H").unwrap().clone();

    data.compute_horizontal_magnitude().unwrap();
    data.compute_derived(DerivedFields::all()).unwrap();

    assert_eq!(data.derived("ALE_H").unwrap(), &first);
    assert_eq!(data.derived_fields().count(), 3);
}

#[test]
fn test_missing_values_propagate_to_derived_fields() {
    let mut data = read(&create_two_station_v2());
    data.compute_horizontal_magnitude().unwrap();

    let bor = data.derived("BOR_H").unwrap();
    assert!((bor.values[0] - (2.3f64).hypot(0.6)).abs() < 1e-12);
    assert!(bor.values[1].is_nan());
}

#[test]
fn test_short_series_skips_rate_but_keeps_magnitudes() {
    let mut data = read(&create_two_station_v2());

    data.compute_derived(DerivedFields::all()).unwrap();

    assert!(data.derived("ALE_H").is_some());
    assert!(data.derived("ALE_B").is_some());
    assert!(data.derived("ALE_dH").is_none());
}

#[test]
fn test_direct_rate_on_short_series_is_error() {
    let mut data = read(&create_two_station_v2());
    let err = data.compute_horizontal_rate().unwrap_err();
    assert!(matches!(err, Error::InsufficientSamples { needed: 3, found: 2 }));
}

#[test]
fn test_derived_fields_from_config() {
    let config = ReaderConfig::default().with_derived(DerivedFields {
        horizontal_rate: true,
        ..Default::default()
    });
    let data = MagnetometerParser::new(config)
        .parse_str(&create_linear_v6(), "t")
        .unwrap();

    assert!(data.derived("ALE_dH").is_some());
    assert!(data.derived("ALE_H").is_none());
}

#[test]
fn test_read_stats() {
    let data = read(&create_two_station_v2());
    let stats = data.stats();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.stations, 2);
    assert_eq!(stats.value_lines, 3);
    assert_eq!(stats.missing_values, 6);
    assert_eq!(stats.coverage(), 75.0);
    assert!(stats.silent_stations.is_empty());
}

#[test]
fn test_from_file_uses_default_config() {
    let file = create_temp_file(&create_two_station_v2());
    let data = MagnetometerDataset::from_file(file.path()).unwrap();

    assert_eq!(data.n_time(), 2);
    assert!(data.derived_fields().next().is_none());
    assert!(data.get("XXX").is_none());
}
