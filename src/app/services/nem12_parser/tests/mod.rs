//! Test utilities for NEM12 parser testing
//!
//! This module provides fixtures and helper functions used across the
//! parser test modules.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::app::models::{MeterVolume, Quality};

// Test modules
mod envelope_tests;
mod record_parser_tests;
mod stats_tests;

/// Helper to create a well-formed file with a single meter block
pub fn create_single_block_lines() -> Vec<&'static str> {
    vec![
        "100",
        "200,1234567890",
        "300,20200101,12.5,A",
        "300,20200102,9.0,A",
        "900",
    ]
}

/// Helper to create a well-formed file with two meter blocks
pub fn create_two_block_lines() -> Vec<&'static str> {
    vec![
        "100",
        "200,1234567890",
        "300,20200101,1.5,A",
        "300,20200102,2.5,E",
        "200,0987654321",
        "300,20200101,3.0,A",
        "900",
    ]
}

/// Helper to create file content with blank lines and CRLF endings
pub fn create_test_nem12() -> String {
    "100\r\n\r\n200,1234567890\r\n300,20161113,-50.8,A\r\n   \r\n300,20161114,-64.8,E\r\n900\r\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn volume(value: &str, quality: Quality) -> MeterVolume {
    MeterVolume::new(BigDecimal::from_str(value).unwrap(), quality)
}
