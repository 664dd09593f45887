//! Public HTTP request/response structs (serde ready).
//! The quiz payload itself is `domain::QuizResult`.

use serde::{Deserialize, Serialize};

/// Query string of the quiz endpoint. Both values stay raw strings so that a
/// malformed `count` degrades to "whole pool" instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct QuizQuery {
  pub count: Option<String>,
  pub seed: Option<String>,
}

impl QuizQuery {
  /// Requested count before clamping. Missing, unparsable or zero means the whole pool.
  pub fn requested_count(&self, pool_len: usize) -> i64 {
    let full = i64::try_from(pool_len).unwrap_or(i64::MAX);
    match self.count.as_deref().and_then(parse_saturating) {
      Some(0) | None => full,
      Some(n) => n,
    }
  }

  /// Explicit seed, if one was given and is non-empty.
  pub fn explicit_seed(&self) -> Option<&str> {
    self.seed.as_deref().filter(|s| !s.is_empty())
  }
}

/// Integer parse that saturates out-of-range values instead of failing, so a
/// huge negative still clamps to 1 and a huge positive to the whole pool.
fn parse_saturating(raw: &str) -> Option<i64> {
  let raw = raw.trim();
  if let Ok(n) = raw.parse::<i64>() {
    return Some(n);
  }
  let (negative, digits) = match raw.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, raw.strip_prefix('+').unwrap_or(raw)),
  };
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  Some(if negative { i64::MIN } else { i64::MAX })
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub error: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn query(count: Option<&str>, seed: Option<&str>) -> QuizQuery {
    QuizQuery { count: count.map(Into::into), seed: seed.map(Into::into) }
  }

  #[test]
  fn count_defaults_to_whole_pool() {
    assert_eq!(query(None, None).requested_count(12), 12);
    assert_eq!(query(Some("0"), None).requested_count(12), 12);
    assert_eq!(query(Some("ten"), None).requested_count(12), 12);
    assert_eq!(query(Some(""), None).requested_count(12), 12);
  }

  #[test]
  fn count_passes_through_for_clamping() {
    assert_eq!(query(Some("5"), None).requested_count(12), 5);
    assert_eq!(query(Some("-2"), None).requested_count(12), -2);
    assert_eq!(query(Some("99"), None).requested_count(12), 99);
    assert_eq!(query(Some(" 7 "), None).requested_count(12), 7);
  }

  #[test]
  fn out_of_range_counts_saturate() {
    assert_eq!(query(Some("-99999999999999999999"), None).requested_count(4), i64::MIN);
    assert_eq!(query(Some("99999999999999999999"), None).requested_count(4), i64::MAX);
    assert_eq!(query(Some("+99999999999999999999"), None).requested_count(4), i64::MAX);
    assert_eq!(query(Some("-"), None).requested_count(4), 4);
    assert_eq!(query(Some("-12x"), None).requested_count(4), 4);
  }

  #[test]
  fn empty_seed_is_treated_as_missing() {
    assert_eq!(query(None, Some("")).explicit_seed(), None);
    assert_eq!(query(None, None).explicit_seed(), None);
    assert_eq!(query(None, Some("abc")).explicit_seed(), Some("abc"));
  }
}
