//! Event timestamp generator.

use crate::generator::GeneratorError;
use crate::hash::{tagged_seed, SeedTag};
use chrono::{DateTime, Utc};
use idemgen_core::{ConfigError, DateSpread};

/// Timestamp for the record at `index`, in `[spread.start, spread.end)`.
///
/// No generator is involved: the offset is the `time` seed itself modulo
/// the span in milliseconds.
pub fn timestamp_for_index(
    index: u64,
    spread: &DateSpread,
) -> Result<DateTime<Utc>, GeneratorError> {
    let invalid = || ConfigError::InvalidDateRange {
        start: spread.start,
        end: spread.end,
    };

    let span = spread.span_millis().ok_or_else(invalid)?;
    let offset = tagged_seed(SeedTag::Time, index) % span;
    // offset < span, and span came from an i64 difference
    let millis = spread.start.timestamp_millis() + offset as i64;

    DateTime::from_timestamp_millis(millis).ok_or_else(|| invalid().into())
}
