//! Duration strings
//!
//! Parses operator-authored durations (`"15s"`, `"1m 30s"`, `"200ms"`, `"2d"`) and renders
//! durations back into the canonical text form that `parse_duration` accepts.

use crate::error::ParseError;
use std::time::Duration;

const DAY_SECS: u64 = 24 * 60 * 60;

/// Parse a duration string. A unit is mandatory; bare numbers and empty input are rejected.
/// Fractional values (`"1.5s"`) are accepted, negative ones are not.
///
/// Single calendar units are fixed-length: `d` = 24h, `w` = 7d, `M` = 30d, `y` = 365d.
/// Everything else goes through humantime, which also accepts the output of
/// [`format_duration`].
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::MissingUnit(input.to_string()));
    }

    if let Some(duration) = parse_calendar_unit(trimmed)? {
        return Ok(duration);
    }

    humantime::parse_duration(trimmed).map_err(|e| match e {
        humantime::DurationError::Empty => ParseError::Empty,
        other => ParseError::Invalid {
            input: input.to_string(),
            reason: other.to_string(),
        },
    })
}

/// Canonical text form of a duration.
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// `<digits><d|w|M|y>`; `None` when the input has any other shape.
fn parse_calendar_unit(input: &str) -> Result<Option<Duration>, ParseError> {
    let Some(unit) = input.chars().last() else {
        return Ok(None);
    };
    let days = match unit {
        'd' => 1,
        'w' => 7,
        'M' => 30,
        'y' => 365,
        _ => return Ok(None),
    };
    let digits = &input[..input.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }

    let overflow = || ParseError::Invalid {
        input: input.to_string(),
        reason: "number is too large".to_string(),
    };
    let count: u64 = digits.parse().map_err(|_| overflow())?;
    let secs = count
        .checked_mul(days)
        .and_then(|d| d.checked_mul(DAY_SECS))
        .ok_or_else(overflow)?;
    Ok(Some(Duration::from_secs(secs)))
}
