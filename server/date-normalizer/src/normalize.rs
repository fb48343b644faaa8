//! The normalize operation: date values and raw strings to canonical `YYYY-MM-DD`.

use chrono::{Datelike, Local};

use crate::error::NormalizeError;
use crate::patterns::{self, Shape};
use crate::types::DateInput;

/// Normalize a date value into the canonical `YYYY-MM-DD` form.
///
/// Calendar dates format directly and always succeed. Raw strings are tried
/// against the accepted shapes in priority order; the first match wins, and
/// a bare `MM-DD` gets the current local year. Matching is lexical only, so
/// out-of-range values like `"13-45"` still normalize.
pub fn normalize<'a>(date: impl Into<DateInput<'a>>) -> Result<String, NormalizeError> {
  match date.into() {
    DateInput::Date(d) => Ok(d.format("%Y-%m-%d").to_string()),
    DateInput::Text(raw) => normalize_text(raw, Local::now().year()),
  }
}

/// Shape-match `raw` and reassemble it, with `current_year` standing in when
/// the shape omits the year.
fn normalize_text(raw: &str, current_year: i32) -> Result<String, NormalizeError> {
  for rule in patterns::shape_rules() {
    let caps = match rule.pattern.captures(raw) {
      Some(c) => c,
      None => continue,
    };
    // Group positions are fixed by the table's anchored patterns; digits are
    // carried over verbatim, never re-padded.
    let normalized = match rule.shape {
      Shape::YearMonthDay => raw.to_string(),
      Shape::YearMonthDaySlash => raw.replace('/', "-"),
      Shape::MonthDayYear => format!("{}-{}-{}", &caps[3], &caps[1], &caps[2]),
      Shape::MonthDay => format!("{}-{}-{}", current_year, &caps[1], &caps[2]),
    };
    return Ok(normalized);
  }
  Err(NormalizeError::InvalidDateFormat)
}
