//! Date record (`300`) parsing
//!
//! A date record is split into two independent sub-parses: the date, and the
//! volume together with its quality code. Each returns its own `Result` so
//! the caller can report both failures and keep going.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use super::field_parsers::get_field;
use crate::app::models::{MeterVolume, Quality};
use crate::constants::{DATE_FIELD_LENGTH, DATE_FORMAT, MAX_VOLUME_SCALE, VOLUME_PATTERN, fields};
use crate::{Error, Result};

/// Outcome of parsing one date record
#[derive(Debug)]
pub struct DateRecord {
    pub date: Result<NaiveDate>,
    pub volume: Result<MeterVolume>,
}

impl DateRecord {
    /// The map entry for this record, when both sub-parses succeeded
    pub fn into_entry(self) -> Option<(NaiveDate, MeterVolume)> {
        match (self.date, self.volume) {
            (Ok(date), Ok(volume)) => Some((date, volume)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.date.is_ok() && self.volume.is_ok()
    }
}

/// Parse both halves of a split `300` record
pub fn parse_date_record(record: &[&str]) -> DateRecord {
    DateRecord {
        date: parse_date(record),
        volume: parse_volume(record),
    }
}

/// Parse the date field as `yyyyMMdd`
pub fn parse_date(record: &[&str]) -> Result<NaiveDate> {
    let value = get_field(record, fields::DATE)
        .ok_or_else(|| Error::invalid_date("missing date field"))?;

    // chrono accepts shorter numbers for each component; require the full width.
    if value.len() != DATE_FIELD_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_date(format!(
            "'{}' is not in yyyyMMdd format",
            value
        )));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| Error::invalid_date(format!("'{}' is not a calendar date ({})", value, e)))
}

/// Parse the volume and quality fields together
///
/// A valid number with an unknown quality code is still a failure.
pub fn parse_volume(record: &[&str]) -> Result<MeterVolume> {
    let volume_str = get_field(record, fields::VOLUME)
        .ok_or_else(|| Error::invalid_volume("missing volume field"))?;

    let volume = parse_decimal(volume_str)?;

    let quality_str =
        get_field(record, fields::QUALITY).ok_or_else(|| Error::invalid_quality(""))?;
    let quality = Quality::from_str(quality_str)?;

    Ok(MeterVolume::new(volume, quality))
}

fn volume_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(VOLUME_PATTERN).unwrap_or_else(|e| panic!("{}", e)))
}

/// Parse a plain decimal, bounding its scale before any arithmetic is done
///
/// `BigDecimal::from_str` alone accepts digit separators such as `1_000`.
pub fn parse_decimal(value: &str) -> Result<BigDecimal> {
    let captures = volume_regex()
        .captures(value)
        .ok_or_else(|| Error::invalid_volume(format!("'{}' is not a decimal", value)))?;

    let out_of_range =
        || Error::invalid_volume(format!("'{}' is outside the supported range", value));

    let exponent = match captures.get(1) {
        Some(m) => m.as_str().parse::<i64>().map_err(|_| out_of_range())?,
        None => 0,
    };
    let mantissa = value.split(['e', 'E']).next().unwrap_or_default();
    let fraction_digits = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len()) as i64;

    let scale = fraction_digits
        .checked_sub(exponent)
        .ok_or_else(out_of_range)?;
    if scale.abs() > MAX_VOLUME_SCALE {
        return Err(out_of_range());
    }

    BigDecimal::from_str(value)
        .map_err(|e| Error::invalid_volume(format!("'{}' is not a decimal ({})", value, e)))
}
