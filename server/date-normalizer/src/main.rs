//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an Input { date }. Output lines are either:
//! - An Output { date } carrying the canonical form
//! - An ErrorOutput (when the line is invalid JSON or the date matches no shape)

use date_normalizer::{normalize, ErrorOutput, Input, Output};
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "date-normalizer: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    // Parse the inbound line.
    let input: Input = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    match normalize(input.date.as_str()) {
      Ok(date) => {
        let _ = serde_json::to_writer(&mut out, &Output { date });
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = ErrorOutput::new(e.to_string()).with_input(input.date);
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}
