//! Data models for simple NEM12 processing
//!
//! This module contains the data structures produced by the parser: one
//! `MeterRead` per meter block, holding a date-ordered map of daily
//! `MeterVolume` values.

use crate::{Error, Result};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Meter Read
// =============================================================================

/// Consumption readings for a single meter
///
/// Volumes are keyed by calendar date, so iteration is always in ascending
/// date order and each date appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterRead {
    /// National Meter Identifier (10 characters for every parsed read)
    pub nmi: String,

    /// Unit of every volume in this read
    pub energy_unit: EnergyUnit,

    /// Daily volumes in ascending date order
    pub volumes: BTreeMap<NaiveDate, MeterVolume>,
}

impl MeterRead {
    /// Create a read with no volumes
    pub fn new(nmi: impl Into<String>, energy_unit: EnergyUnit) -> Self {
        Self {
            nmi: nmi.into(),
            energy_unit,
            volumes: BTreeMap::new(),
        }
    }

    /// Insert a volume for a date, replacing any earlier value for that date
    pub fn append_volume(&mut self, date: NaiveDate, volume: MeterVolume) {
        self.volumes.insert(date, volume);
    }

    /// Sum of all volumes (zero when there are none)
    pub fn total_volume(&self) -> BigDecimal {
        self.volumes
            .values()
            .fold(BigDecimal::from(0), |total, v| total + &v.volume)
    }

    /// Earliest date with a volume
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.volumes.keys().next().copied()
    }

    /// Latest date with a volume
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.volumes.keys().next_back().copied()
    }

    /// Volume recorded for a date
    pub fn volume_on(&self, date: NaiveDate) -> Option<&MeterVolume> {
        self.volumes.get(&date)
    }
}

// =============================================================================
// Meter Volume
// =============================================================================

/// One day's reading: an exact decimal quantity and its quality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeterVolume {
    pub volume: BigDecimal,
    pub quality: Quality,
}

impl MeterVolume {
    pub fn new(volume: BigDecimal, quality: Quality) -> Self {
        Self { volume, quality }
    }
}

// =============================================================================
// Quality Enumeration
// =============================================================================

/// Reliability of a reading
///
/// Codes are matched exactly and case-sensitively; anything other than `A`
/// or `E` makes the record unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// Actual reading
    A,

    /// Estimated reading
    E,
}

impl Quality {
    /// Get human-readable description of this quality code
    pub fn description(self) -> &'static str {
        match self {
            Quality::A => "actual",
            Quality::E => "estimated",
        }
    }

    /// Get all recognised quality codes
    pub fn all_values() -> [Quality; 2] {
        [Quality::A, Quality::E]
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(Quality::A),
            "E" => Ok(Quality::E),
            _ => Err(Error::invalid_quality(s)),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::A => write!(f, "A"),
            Quality::E => write!(f, "E"),
        }
    }
}

// =============================================================================
// Energy Unit
// =============================================================================

/// Unit attached to every meter read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[default]
    #[serde(rename = "KWH")]
    Kwh,
}

impl FromStr for EnergyUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "KWH" => Ok(EnergyUnit::Kwh),
            _ => Err(Error::configuration(format!("Unknown energy unit '{}'", s))),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyUnit::Kwh => write!(f, "KWH"),
        }
    }
}
