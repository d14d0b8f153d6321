//! Tests for date record parsing

use super::*;
use crate::Error;
use crate::app::services::nem12_parser::field_parsers::split_fields;
use crate::app::services::nem12_parser::record_parser::{
    parse_decimal, parse_date, parse_date_record, parse_volume,
};

#[test]
fn test_parse_valid_record() {
    let record = split_fields("300,20200101,12.5,A");
    let parsed = parse_date_record(&record);

    assert!(parsed.is_valid());
    let (d, v) = parsed.into_entry().unwrap();
    assert_eq!(d, date(2020, 1, 1));
    assert_eq!(v, volume("12.5", Quality::A));
}

#[test]
fn test_parse_date_formats() {
    assert_eq!(parse_date(&["300", "20161231"]).unwrap(), date(2016, 12, 31));
    assert_eq!(parse_date(&["300", "20200229"]).unwrap(), date(2020, 2, 29));

    for bad in ["2020-01-01", "2020011", "202001011", "20201301", "20190229", "abcdefgh", ""] {
        let result = parse_date(&["300", bad]);
        assert!(
            matches!(result, Err(Error::InvalidDate { .. })),
            "expected '{}' to be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_date_missing_field() {
    assert!(matches!(parse_date(&["300"]), Err(Error::InvalidDate { .. })));
}

#[test]
fn test_parse_volume_decimal_forms() {
    let v = parse_volume(&["300", "20200101", "-50.8", "E"]).unwrap();
    assert_eq!(v, volume("-50.8", Quality::E));

    let v = parse_volume(&["300", "20200101", "0", "A"]).unwrap();
    assert_eq!(v, volume("0", Quality::A));

    let v = parse_volume(&["300", "20200101", "1.5E2", "A"]).unwrap();
    assert_eq!(v, volume("150", Quality::A));
}

#[test]
fn test_parse_volume_keeps_precision() {
    let v = parse_volume(&["300", "20200101", "0.123456789012345678901234567890", "A"]).unwrap();
    assert_eq!(v, volume("0.123456789012345678901234567890", Quality::A));
    assert_ne!(v, volume("0.1234567890123456789", Quality::A));
}

#[test]
fn test_parse_volume_rejects_bad_number() {
    for bad in ["bad", "", "1.2.3", "12,5", "1_000", "1__0", "_1", "NaN", " 1", "1e", "."] {
        let result = parse_volume(&["300", "20200101", bad, "A"]);
        assert!(
            matches!(result, Err(Error::InvalidVolume { .. })),
            "expected '{}' to be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_decimal_plain_forms() {
    assert_eq!(parse_decimal("1.").unwrap(), BigDecimal::from(1));
    assert_eq!(parse_decimal("+2").unwrap(), BigDecimal::from(2));
    assert_eq!(parse_decimal(".5").unwrap(), BigDecimal::from_str("0.5").unwrap());
    assert_eq!(parse_decimal("-1e3").unwrap(), BigDecimal::from(-1000));
}

#[test]
fn test_parse_decimal_scale_range() {
    assert!(parse_decimal("1e1000").is_ok());
    assert!(parse_decimal("1e-1000").is_ok());

    for bad in [
        "1e1001",
        "1e-1001",
        "1e100000000",
        "1e9223372036854775807",
        "1e-9223372036854775808",
        "1e99999999999999999999",
    ] {
        let result = parse_decimal(bad);
        assert!(
            matches!(result, Err(Error::InvalidVolume { .. })),
            "expected '{}' to be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_volume_rejects_bad_quality() {
    // A valid number does not rescue an unknown quality code.
    let result = parse_volume(&["300", "20200101", "12.5", "X"]);
    assert!(matches!(result, Err(Error::InvalidQuality { .. })));

    let result = parse_volume(&["300", "20200101", "12.5", "a"]);
    assert!(matches!(result, Err(Error::InvalidQuality { .. })));

    let result = parse_volume(&["300", "20200101", "12.5"]);
    assert!(matches!(result, Err(Error::InvalidQuality { .. })));
}

#[test]
fn test_sub_parses_are_independent() {
    let parsed = parse_date_record(&split_fields("300,2020-01-01,12.5,A"));
    assert!(parsed.date.is_err());
    assert!(parsed.volume.is_ok());
    assert!(!parsed.is_valid());
    assert!(parsed.into_entry().is_none());

    let parsed = parse_date_record(&split_fields("300,20200101,bad,A"));
    assert!(parsed.date.is_ok());
    assert!(parsed.volume.is_err());
    assert!(parsed.into_entry().is_none());
}

#[test]
fn test_bare_tag_fails_both_sub_parses() {
    let parsed = parse_date_record(&split_fields("300"));
    assert!(parsed.date.is_err());
    assert!(parsed.volume.is_err());
}
