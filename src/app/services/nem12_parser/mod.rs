//! Simple NEM12 parser
//!
//! This module parses the simplified NEM12 interval meter data format into
//! one [`MeterRead`](crate::MeterRead) per meter block.
//!
//! ## Format
//!
//! ```text
//! 100
//! 200,1234567890
//! 300,20200101,12.5,A
//! 300,20200102,9.0,E
//! 900
//! ```
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File handling, envelope gating and block segmentation
//! - [`envelope`] - `100`/`900` envelope validation
//! - [`record_parser`] - `300` date record parsing
//! - [`field_parsers`] - Line tokenizing helpers
//! - [`stats`] - Parsing statistics, diagnostics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use simple_nem12::Nem12Parser;
//!
//! let lines = ["100", "200,1234567890", "300,20200101,12.5,A", "900"];
//! let result = Nem12Parser::new().parse_lines(&lines);
//!
//! assert_eq!(result.meter_reads.len(), 1);
//! assert_eq!(result.stats.records_parsed, 1);
//! ```

pub mod envelope;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::Nem12Parser;
pub use stats::{Diagnostic, DiagnosticKind, ParseResult, ParseStats};
