//! Structured error type for date normalization.

use thiserror::Error;

/// The single failure mode: a raw string matched none of the accepted shapes.
///
/// The message is fixed and lists the accepted formats, rendered from the
/// rule table so the two can never drift apart.
#[derive(Debug, Error)]
pub enum NormalizeError {
  #[error("date must match one of the accepted formats: {}", crate::patterns::accepted_formats())]
  InvalidDateFormat,
}
