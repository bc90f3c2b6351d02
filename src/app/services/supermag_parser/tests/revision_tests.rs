//! Tests for revision detection and header resolution

use super::super::revision::*;
use super::{create_two_station_v2, create_two_station_v5};
use crate::Error;

fn lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

#[test]
fn test_revision_table() {
    assert_eq!(FormatRevision::from_number(2), Some(FormatRevision::V2));
    assert_eq!(FormatRevision::from_number(5), Some(FormatRevision::V5));
    assert_eq!(FormatRevision::from_number(6), Some(FormatRevision::V6));
    assert_eq!(FormatRevision::from_number(3), None);

    assert_eq!(FormatRevision::V2.scheme().first_value, ColumnOffset::FromStart(1));
    assert_eq!(FormatRevision::V2.scheme().extra_header_lines, 1);
    assert_eq!(FormatRevision::V5.scheme().first_value, ColumnOffset::FromEnd(6));
    assert_eq!(FormatRevision::V5.scheme(), FormatRevision::V6.scheme());
}

#[test]
fn test_unrecognized_falls_back_to_latest_scheme() {
    let latest = FormatRevision::KNOWN
        .iter()
        .max_by_key(|r| r.number())
        .copied()
        .unwrap();
    assert_eq!(latest, FormatRevision::LATEST);
    assert_eq!(FormatRevision::Unrecognized.scheme(), latest.scheme());
    assert!(!FormatRevision::Unrecognized.is_recognized());
    assert_eq!(FormatRevision::Unrecognized.to_string(), "unrecognized");
    assert_eq!(FormatRevision::V5.to_string(), "5");
}

#[test]
fn test_value_range() {
    let v2 = FormatRevision::V2.scheme();
    assert_eq!(v2.value_range(7), Some(1..7));
    assert_eq!(v2.value_range(6), None);

    let v5 = FormatRevision::V5.scheme();
    assert_eq!(v5.value_range(10), Some(4..10));
    assert_eq!(v5.value_range(6), Some(0..6));
    assert_eq!(v5.value_range(5), None);
}

#[test]
fn test_resolve_v2_header() {
    let content = create_two_station_v2();
    let info = resolve_header(&lines(&content), "v2.txt").unwrap();

    assert_eq!(info.revision, FormatRevision::V2);
    assert_eq!(info.stations, vec!["ALE", "BOR"]);
    // header ends on the "Selected Parameters" line; the station line is the extra skip
    assert_eq!(info.header_lines, 3);
    assert_eq!(info.data_start(), 4);
}

#[test]
fn test_resolve_v5_header() {
    let content = create_two_station_v5();
    let info = resolve_header(&lines(&content), "v5.txt").unwrap();

    assert_eq!(info.revision, FormatRevision::V5);
    assert_eq!(info.stations, vec!["ALE", "BOR"]);
    assert_eq!(info.header_lines, 5);
    assert_eq!(info.data_start(), 5);
}

#[test]
fn test_missing_declaration_is_unrecognized() {
    let content = "Header\nSelected Stations: ALE,BOR\n=====\n2001 01 01 00 00 00 0";
    let info = resolve_header(&lines(content), "x.txt").unwrap();

    assert_eq!(info.revision, FormatRevision::Unrecognized);
    assert_eq!(info.scheme, FormatRevision::LATEST.scheme());
    assert_eq!(info.data_start(), 3);
}

#[test]
fn test_revision_after_station_list_is_ignored() {
    let content = "Header\nSelected Stations: ALE\nRevision: 2\n=====";
    let info = resolve_header(&lines(content), "x.txt").unwrap();
    assert_eq!(info.revision, FormatRevision::Unrecognized);
}

#[test]
fn test_unsupported_revision_is_format_error() {
    let content = "Revision: 3\nSelected Stations: ALE\n=====";
    let err = resolve_header(&lines(content), "x.txt").unwrap_err();
    assert!(matches!(err, Error::Format { line: Some(1), .. }));
}

#[test]
fn test_malformed_revision_is_format_error() {
    let content = "Revision: five\nSelected Stations: ALE\n=====";
    assert!(resolve_header(&lines(content), "x.txt").unwrap_err().is_format_error());
}

#[test]
fn test_missing_station_list_is_format_error() {
    let content = "Revision: 5\n=====\n2001 01 01 00 00 00";
    assert!(resolve_header(&lines(content), "x.txt").unwrap_err().is_format_error());
}

#[test]
fn test_missing_separator_is_format_error() {
    let content = "Revision: 5\nSelected Stations: ALE\n2001 01 01 00 00 00";
    assert!(resolve_header(&lines(content), "x.txt").unwrap_err().is_format_error());
}

#[test]
fn test_parse_station_list() {
    assert_eq!(
        parse_station_list("Selected Stations: ALE,AND,BOR"),
        vec!["ALE", "AND", "BOR"]
    );
    assert_eq!(parse_station_list("Stations: ALE,BOR,"), vec!["ALE", "BOR"]);
    assert_eq!(parse_station_list("Stations: ALE,BOR,ALE"), vec!["ALE", "BOR"]);
    assert!(parse_station_list("").is_empty());
}
