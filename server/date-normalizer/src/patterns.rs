//! The accepted date shapes: an ordered table of (label, pattern) rules.
//!
//! Order is normative — rules are tried top to bottom and the first match
//! wins. Patterns are anchored and purely lexical: they check structure,
//! not calendar validity.

use std::sync::LazyLock;

use regex::Regex;

/// How to reassemble a matched string into the canonical form.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Shape {
  /// `YYYY-MM-DD` — already canonical, returned unchanged.
  YearMonthDay,
  /// `YYYY/MM/DD` — slashes become hyphens.
  YearMonthDaySlash,
  /// `MM-DD-YYYY` or `MM/DD/YYYY` — groups reordered to year-month-day.
  MonthDayYear,
  /// `MM-DD` or `MM/DD` — the current year is assumed.
  MonthDay,
}

/// One shape rule: a human-readable label plus its anchored pattern.
///
/// The labels double as the documented list of accepted formats shown in
/// error messages.
pub(crate) struct ShapeRule {
  pub label: &'static str,
  pub shape: Shape,
  pub pattern: Regex,
}

/// The fixed rule table, compiled once and immutable for the process lifetime.
static SHAPE_RULES: LazyLock<[ShapeRule; 4]> = LazyLock::new(|| {
  [
    ShapeRule {
      label: "YYYY-MM-DD",
      shape: Shape::YearMonthDay,
      pattern: Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid YYYY-MM-DD pattern"),
    },
    ShapeRule {
      label: "YYYY/MM/DD",
      shape: Shape::YearMonthDaySlash,
      pattern: Regex::new(r"^\d{4}/\d{2}/\d{2}$").expect("invalid YYYY/MM/DD pattern"),
    },
    ShapeRule {
      label: "MM-DD-YYYY or MM/DD/YYYY",
      shape: Shape::MonthDayYear,
      pattern: Regex::new(r"^(\d{2})[-/](\d{2})[-/](\d{4})$")
        .expect("invalid MM-DD-YYYY pattern"),
    },
    ShapeRule {
      label: "MM-DD or MM/DD",
      shape: Shape::MonthDay,
      pattern: Regex::new(r"^(\d{2})[-/](\d{2})$").expect("invalid MM-DD pattern"),
    },
  ]
});

/// The rules in priority order.
pub(crate) fn shape_rules() -> &'static [ShapeRule] {
  &*SHAPE_RULES
}

/// Comma-separated labels of every accepted shape, for error messages.
pub(crate) fn accepted_formats() -> String {
  shape_rules()
    .iter()
    .map(|rule| rule.label)
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rules_are_in_priority_order() {
    let labels: Vec<&str> = shape_rules().iter().map(|r| r.label).collect();
    assert_eq!(
      labels,
      vec![
        "YYYY-MM-DD",
        "YYYY/MM/DD",
        "MM-DD-YYYY or MM/DD/YYYY",
        "MM-DD or MM/DD"
      ]
    );
  }

  #[test]
  fn patterns_are_anchored() {
    // Embedded dates must not match; only whole-string shapes count.
    for rule in shape_rules() {
      assert!(!rule.pattern.is_match("x2015-12-25"), "{}", rule.label);
      assert!(!rule.pattern.is_match("2015-12-25 "), "{}", rule.label);
      assert!(!rule.pattern.is_match("on 12/25/2015"), "{}", rule.label);
    }
  }

  #[test]
  fn accepted_formats_lists_every_label() {
    let formats = accepted_formats();
    for rule in shape_rules() {
      assert!(formats.contains(rule.label), "missing {}", rule.label);
    }
  }
}
