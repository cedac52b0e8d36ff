//! Sold-date normalization.
//!
//! Cards caption their sale date as `Sold Sep 23, 2025`. Output is always
//! midnight UTC of that calendar day in ISO-8601 with milliseconds.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use super::has_encoding_artifact;
use crate::error::{FieldError, FieldResult};

/// Render a timestamp in the canonical output form
/// (`2025-09-23T00:00:00.000Z`).
pub fn canonical_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve a month token (`Sep`, `September`, `sep.`) to 1-12.
///
/// The token is parsed on its own against a fixed reference day; anything
/// chrono does not recognize is an error rather than a guess.
fn resolve_month(token: &str) -> FieldResult<u32> {
    let cleaned = token.trim_end_matches('.');
    NaiveDate::parse_from_str(&format!("{cleaned} 1 2020"), "%B %d %Y")
        .map(|d| chrono::Datelike::month(&d))
        .map_err(|_| FieldError::UnknownMonth(token.to_string()))
}

/// Normalize `Sold <Month> <Day>, <Year>`. The `Sold` prefix is optional.
pub fn normalize_sold_date(text: &str) -> FieldResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }
    if has_encoding_artifact(trimmed) {
        return Err(FieldError::EncodingArtifact(trimmed.to_string()));
    }

    let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens
        .first()
        .is_some_and(|t| t.eq_ignore_ascii_case("sold"))
    {
        tokens.remove(0);
    }

    if tokens.iter().any(|t| !t.is_ascii()) {
        return Err(FieldError::EncodingArtifact(trimmed.to_string()));
    }

    let invalid = |reason: &str| FieldError::InvalidDate {
        input: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let [month, day, year] = tokens.as_slice() else {
        return Err(invalid("expected <Month> <Day>, <Year>"));
    };

    let month = resolve_month(month)?;
    let day: u32 = day
        .trim_end_matches(',')
        .parse()
        .map_err(|_| invalid("day is not a number"))?;
    let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar day"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| invalid("no such calendar day"))?
        .and_utc();

    Ok(canonical_timestamp(midnight))
}

/// Normalize a date supplied by the fallback API.
///
/// Accepts RFC 3339 timestamps (converted to UTC) as well as the caption
/// form handled by [`normalize_sold_date`].
pub fn normalize_upstream_date(text: &str) -> FieldResult<String> {
    let trimmed = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(canonical_timestamp(at.with_timezone(&Utc)));
    }
    normalize_sold_date(trimmed)
}
