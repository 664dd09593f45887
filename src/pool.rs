//! Question pool loading. The file is read on every call; nothing is cached.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, instrument};

use crate::domain::{PoolFile, Question};

#[derive(Debug)]
pub enum PoolError {
  Io { path: PathBuf, source: std::io::Error },
  Parse { path: PathBuf, source: serde_json::Error },
  Empty { path: PathBuf },
  Invalid { path: PathBuf, index: usize, reason: String },
}

impl fmt::Display for PoolError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PoolError::Io { path, source } => write!(f, "failed to read question pool {}: {}", path.display(), source),
      PoolError::Parse { path, source } => write!(f, "failed to parse question pool {}: {}", path.display(), source),
      PoolError::Empty { path } => write!(f, "question pool {} contains no questions", path.display()),
      PoolError::Invalid { path, index, reason } => {
        write!(f, "question #{} in {} is invalid: {}", index, path.display(), reason)
      }
    }
  }
}

impl std::error::Error for PoolError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PoolError::Io { source, .. } => Some(source),
      PoolError::Parse { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Read, parse and validate the pool file.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_pool(path: impl AsRef<Path>) -> Result<Vec<Question>, PoolError> {
  let path = path.as_ref();
  let raw = tokio::fs::read_to_string(path).await.map_err(|source| {
    let e = PoolError::Io { path: path.to_path_buf(), source };
    error!(target: "quiz", error = %e, "Pool read failed");
    e
  })?;
  let pool = parse_pool(path, &raw).map_err(|e| {
    error!(target: "quiz", error = %e, "Pool rejected");
    e
  })?;
  debug!(target: "quiz", size = pool.len(), "Pool loaded");
  Ok(pool)
}

/// Parse pool JSON and check every question's invariants.
pub fn parse_pool(path: &Path, raw: &str) -> Result<Vec<Question>, PoolError> {
  let file: PoolFile =
    serde_json::from_str(raw).map_err(|source| PoolError::Parse { path: path.to_path_buf(), source })?;

  if file.questions.is_empty() {
    return Err(PoolError::Empty { path: path.to_path_buf() });
  }

  for (index, q) in file.questions.iter().enumerate() {
    if let Err(reason) = validate_question(q) {
      return Err(PoolError::Invalid { path: path.to_path_buf(), index, reason });
    }
  }
  Ok(file.questions)
}

fn validate_question(q: &Question) -> Result<(), String> {
  if q.options.len() < 2 {
    return Err(format!("needs at least 2 options, has {}", q.options.len()));
  }
  if q.correct_index >= q.options.len() {
    return Err(format!("answer {} out of range for {} options", q.correct_index, q.options.len()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p() -> &'static Path {
    Path::new("pool.json")
  }

  #[test]
  fn parses_a_valid_pool() {
    let raw = r#"{"questions":[{"q":"Q1","options":["A","B","C"],"answer":2,"explanation":"e"}]}"#;
    let pool = parse_pool(p(), raw).expect("valid pool");
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].options[pool[0].correct_index], "C");
  }

  #[test]
  fn rejects_empty_and_malformed_pools() {
    assert!(matches!(parse_pool(p(), r#"{"questions":[]}"#), Err(PoolError::Empty { .. })));
    assert!(matches!(parse_pool(p(), "{}"), Err(PoolError::Empty { .. })));
    assert!(matches!(parse_pool(p(), "not json"), Err(PoolError::Parse { .. })));
  }

  #[test]
  fn rejects_questions_breaking_invariants() {
    let one_option = r#"{"questions":[{"q":"Q","options":["A"],"answer":0}]}"#;
    let bad_answer = r#"{"questions":[
      {"q":"ok","options":["A","B"],"answer":0},
      {"q":"bad","options":["A","B"],"answer":2}
    ]}"#;
    assert!(matches!(parse_pool(p(), one_option), Err(PoolError::Invalid { index: 0, .. })));
    match parse_pool(p(), bad_answer) {
      Err(PoolError::Invalid { index, reason, .. }) => {
        assert_eq!(index, 1);
        assert!(reason.contains("out of range"), "{reason}");
      }
      other => panic!("expected Invalid, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join(format!("daily_quiz_missing_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let err = load_pool(&path).await.expect_err("file does not exist");
    assert!(matches!(err, PoolError::Io { .. }));
    assert!(err.to_string().contains("failed to read"));
  }
}
