//! Domain models: questions as stored in the pool file and as served after shuffling.
//!
//! Field names on the wire (`q`, `answer`) are the ones the quiz page reads.

use serde::{Deserialize, Deserializer, Serialize};

/// One multiple-choice question as stored in the pool file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  #[serde(rename = "q")]
  pub text: String,
  pub options: Vec<String>,
  /// 0-based index into `options`.
  #[serde(rename = "answer")]
  pub correct_index: usize,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub explanation: String,
}

/// A question after its options were permuted. `correct_index` points at the
/// same option text as the source question's `correct_index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledQuestion {
  #[serde(rename = "q")]
  pub text: String,
  pub options: Vec<String>,
  #[serde(rename = "answer")]
  pub correct_index: usize,
  pub explanation: String,
}

/// What the quiz endpoint returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
  pub seed: String,
  pub count: usize,
  pub questions: Vec<ShuffledQuestion>,
}

/// Top-level shape of the pool file: `{ "questions": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PoolFile {
  #[serde(default)]
  pub questions: Vec<Question>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explanation_defaults_to_empty_when_missing_or_null() {
    let raw = r#"{"questions":[
      {"q":"Q1","options":["A","B"],"answer":1},
      {"q":"Q2","options":["A","B"],"answer":0,"explanation":null}
    ]}"#;
    let pool: PoolFile = serde_json::from_str(raw).expect("parse");
    assert_eq!(pool.questions.len(), 2);
    assert!(pool.questions.iter().all(|q| q.explanation.is_empty()));
    assert_eq!(pool.questions[0].correct_index, 1);
  }

  #[test]
  fn missing_questions_key_is_an_empty_pool() {
    let pool: PoolFile = serde_json::from_str("{}").expect("parse");
    assert!(pool.questions.is_empty());
  }

  #[test]
  fn shuffled_question_uses_frontend_field_names() {
    let q = ShuffledQuestion {
      text: "Q".into(),
      options: vec!["A".into(), "B".into()],
      correct_index: 1,
      explanation: "because".into(),
    };
    let v = serde_json::to_value(&q).expect("serialize");
    assert_eq!(v["q"], "Q");
    assert_eq!(v["answer"], 1);
    assert_eq!(v["explanation"], "because");
  }
}
