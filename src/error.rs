//! Engine error types.
//!
//! The engine degrades gracefully on almost every bad input (empty pools,
//! short option sets, ineligible question types), so only caller contract
//! violations and storage failures surface as errors.

use thiserror::Error;

/// Result type alias using the engine's error type.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
  /// The answer batch does not line up with the question sequence.
  /// Truncating instead would silently corrupt review state.
  #[error("answer count {answers} does not match question count {questions}")]
  AnswerCountMismatch { questions: usize, answers: usize },

  /// A session was finished before every question was answered.
  #[error("session still has {remaining} unanswered question(s)")]
  SessionIncomplete { remaining: usize },

  /// An item store implementation failed to load or persist items.
  #[error("item store error: {0}")]
  Store(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_answer_count_mismatch_display() {
    let err = EngineError::AnswerCountMismatch {
      questions: 5,
      answers: 3,
    };
    assert_eq!(
      err.to_string(),
      "answer count 3 does not match question count 5"
    );
  }

  #[test]
  fn test_session_incomplete_display() {
    let err = EngineError::SessionIncomplete { remaining: 2 };
    assert_eq!(err.to_string(), "session still has 2 unanswered question(s)");
  }

  #[test]
  fn test_store_display() {
    let err = EngineError::Store("connection refused".to_string());
    assert_eq!(err.to_string(), "item store error: connection refused");
  }
}
