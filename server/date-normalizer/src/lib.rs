//! Date normalizer — canonical `YYYY-MM-DD` strings for upstream API calls.
//!
//! Accepts either a chrono date value or a raw string in one of the accepted
//! shapes and produces the canonical form. Matching is shape-only: no
//! calendar validation, no month names, no timezone handling.
//!
//! No DB, no network; pure computation over a rule table compiled once, so
//! `normalize` is safe to call from any number of threads.

mod error;
mod normalize;
mod patterns;
mod types;

pub use error::NormalizeError;
pub use normalize::normalize;
pub use types::{DateInput, ErrorOutput, Input, Output};
