//! File envelope validation
//!
//! A file is only processed when its first line is exactly `100` and its last
//! line is exactly `900`. Anything else is fatal for the whole file.

use crate::constants::record_tags;
use crate::{Error, Result};

/// Check the envelope and describe what is missing
pub fn validate_envelope<S: AsRef<str>>(lines: &[S], source: &str) -> Result<()> {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return Err(Error::missing_envelope(source, "file contains no records"));
    };

    let has_begin = first.as_ref() == record_tags::BEGIN;
    let has_end = last.as_ref() == record_tags::END;

    match (has_begin, has_end) {
        (true, true) => Ok(()),
        (false, true) => Err(Error::missing_envelope(
            source,
            format!("first line must be '{}'", record_tags::BEGIN),
        )),
        (true, false) => Err(Error::missing_envelope(
            source,
            format!("last line must be '{}'", record_tags::END),
        )),
        (false, false) => Err(Error::missing_envelope(
            source,
            format!(
                "first line must be '{}' and last line must be '{}'",
                record_tags::BEGIN,
                record_tags::END
            ),
        )),
    }
}

/// Whether the lines are framed by the `100`/`900` markers
pub fn has_valid_envelope<S: AsRef<str>>(lines: &[S]) -> bool {
    validate_envelope(lines, "").is_ok()
}
