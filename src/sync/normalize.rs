//! Conversions from raw FPL values to what gets stored locally.
//!
//! None of these fail: anything unexpected degrades to `None` so a single odd
//! value never aborts a whole sync batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::matches::MatchStatus;

/// Parse an FPL timestamp such as `2024-08-16T19:00:00Z`.
///
/// A trailing `Z` is rewritten to an explicit `+00:00` offset. Naive timestamps
/// and bare dates are taken to be UTC.
pub fn parse_fpl_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(without_zulu) => format!("{}+00:00", without_zulu),
        None => raw.to_string(),
    };

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(with_offset.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The `form` field arrives either as a string or as a list of result tokens.
pub fn normalize_form(raw: &Value) -> Option<String> {
    match raw {
        Value::String(form) => Some(form.clone()),
        Value::Array(tokens) if !tokens.is_empty() => Some(
            tokens
                .iter()
                .map(|token| match token {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

/// Status precedence: live, then finished, then upcoming (kickoff known), then scheduled.
pub fn derive_match_status(
    started: bool,
    finished_provisional: bool,
    finished: bool,
    has_kickoff_time: bool,
) -> MatchStatus {
    if started && !finished_provisional && !finished {
        MatchStatus::Live
    } else if finished_provisional || finished {
        MatchStatus::Finished
    } else if has_kickoff_time {
        MatchStatus::Upcoming
    } else {
        MatchStatus::Scheduled
    }
}
