//! Core types: the input union for the library plus the JSON contract for the binary.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input union (library API)
// ---------------------------------------------------------------------------

/// A date value to normalize: either a real calendar date or a raw string.
///
/// Calendar dates render directly to the canonical form; raw strings go
/// through shape matching. The `From` impls cover chrono's date types so
/// callers can pass a `NaiveDate`, `NaiveDateTime`, or `DateTime` without
/// wrapping it themselves.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
  /// A calendar date; formats as `YYYY-MM-DD` without shape matching.
  Date(NaiveDate),
  /// A raw string; must match one of the accepted shapes.
  Text(&'a str),
}

impl<'a> From<&'a str> for DateInput<'a> {
  fn from(s: &'a str) -> Self {
    Self::Text(s)
  }
}

impl From<NaiveDate> for DateInput<'_> {
  fn from(d: NaiveDate) -> Self {
    Self::Date(d)
  }
}

impl From<NaiveDateTime> for DateInput<'_> {
  fn from(dt: NaiveDateTime) -> Self {
    Self::Date(dt.date())
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
  fn from(dt: DateTime<Tz>) -> Self {
    Self::Date(dt.date_naive())
  }
}

// ---------------------------------------------------------------------------
// JSON contract (stdin/stdout binary)
// ---------------------------------------------------------------------------

/// Input: one JSON object per stdin line. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
  pub date: String,
}

/// Output: one JSON object per stdout line on success.
#[derive(Debug, Clone, Serialize)]
pub struct Output {
  pub date: String,
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      input: None,
    }
  }

  pub fn with_input(mut self, input: impl Into<String>) -> Self {
    self.input = Some(input.into());
    self
  }
}
