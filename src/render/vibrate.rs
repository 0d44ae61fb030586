//! Vibration pattern: comma-separated millisecond durations

use serde::Serialize;
use std::str::FromStr;

use super::strip_whitespace;
use crate::error::FieldParseError;

/// Alternating off/on durations in milliseconds; negative values are rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VibratePattern(pub Vec<u64>);

impl FromStr for VibratePattern {
    type Err = FieldParseError;

    /// All-or-nothing: one bad element rejects the whole pattern
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strip_whitespace(s)
            .split(',')
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| FieldParseError::InvalidNumber(v.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(VibratePattern)
    }
}
