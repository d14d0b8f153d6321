//! Simple NEM12 Library
//!
//! A Rust library for reading the simplified NEM12 interval meter data format
//! into per-meter, date-ordered consumption reads.
//!
//! This library provides tools for:
//! - Validating the `100`/`900` file envelope
//! - Segmenting the line stream into `200` meter blocks
//! - Parsing `300` date records with a skip-and-continue error policy
//! - Collecting parse statistics and structured diagnostics
//! - A command-line front end for inspecting files

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod nem12_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use std::path::Path;

// Re-export commonly used types
pub use app::models::{EnergyUnit, MeterRead, MeterVolume, Quality};
pub use app::services::nem12_parser::{
    Diagnostic, DiagnosticKind, Nem12Parser, ParseResult, ParseStats,
};
pub use config::ParserConfig;

/// Result type alias for the NEM12 parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NEM12 parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File does not start with `100` or does not end with `900`
    #[error("Missing envelope in '{file}': {message}")]
    MissingEnvelope { file: String, message: String },

    /// Meter identifier is not exactly the required length
    #[error("Invalid NMI '{nmi}': expected {expected} characters, found {found}")]
    InvalidIdentifier {
        nmi: String,
        expected: usize,
        found: usize,
    },

    /// Date field could not be parsed
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    /// Volume field could not be parsed as a decimal
    #[error("Invalid volume: {message}")]
    InvalidVolume { message: String },

    /// Quality field is not a recognised code
    #[error("Invalid quality '{code}'")]
    InvalidQuality { code: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON output could not be produced
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing envelope error
    pub fn missing_envelope(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingEnvelope {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(nmi: impl Into<String>, expected: usize) -> Self {
        let nmi = nmi.into();
        let found = nmi.chars().count();
        Self::InvalidIdentifier {
            nmi,
            expected,
            found,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Create an invalid volume error
    pub fn invalid_volume(message: impl Into<String>) -> Self {
        Self::InvalidVolume {
            message: message.into(),
        }
    }

    /// Create an invalid quality error
    pub fn invalid_quality(code: impl Into<String>) -> Self {
        Self::InvalidQuality { code: code.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

/// Parse a simple NEM12 file with default settings and return its meter reads.
///
/// Never fails: unreadable files and files without a valid envelope yield an
/// empty collection, and malformed records are skipped.
pub fn parse_simple_nem12(path: &Path) -> Vec<MeterRead> {
    Nem12Parser::new().parse_file(path).meter_reads
}
