//! Format constants for the simple NEM12 parser
//!
//! Record tags, field layout and fixed lengths used throughout the parser.

// =============================================================================
// Record Tags
// =============================================================================

/// Record tags as the first comma-separated field of each line
pub mod record_tags {
    /// File begin marker, must be the entire first line
    pub const BEGIN: &str = "100";

    /// Meter block header: `200,<NMI>`
    pub const BLOCK_START: &str = "200";

    /// Date record: `300,<yyyyMMdd>,<volume>,<quality>`
    pub const DATE_RECORD: &str = "300";

    /// File end marker, must be the entire last line
    pub const END: &str = "900";
}

// =============================================================================
// Field Layout
// =============================================================================

/// Separator between fields on a line
pub const FIELD_SEPARATOR: char = ',';

/// Field positions (zero-based) within a record
pub mod fields {
    pub const TAG: usize = 0;

    /// NMI on a `200` line
    pub const NMI: usize = 1;

    /// Date on a `300` line
    pub const DATE: usize = 1;

    /// Volume on a `300` line
    pub const VOLUME: usize = 2;

    /// Quality code on a `300` line
    pub const QUALITY: usize = 3;
}

// =============================================================================
// Validation
// =============================================================================

/// Required length of a National Meter Identifier
pub const NMI_LENGTH: usize = 10;

/// chrono format for the date field (yyyyMMdd)
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Number of characters in a date field
pub const DATE_FIELD_LENGTH: usize = 8;

/// Plain decimal volume: optional sign, digits with an optional fraction,
/// optional exponent
pub const VOLUME_PATTERN: &str = r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE]([+-]?[0-9]+))?$";

/// Largest accepted volume scale magnitude (fraction digits minus exponent)
pub const MAX_VOLUME_SCALE: i64 = 1_000;

// =============================================================================
// Defaults
// =============================================================================

/// Default cap on stored diagnostics (0 = unlimited)
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 0;

/// Environment variable naming a default configuration file
pub const CONFIG_ENV_VAR: &str = "SIMPLE_NEM12_CONFIG";
