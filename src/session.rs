//! Quiz session progress: answers recorded against a composed question
//! sequence, running tallies, and the finishing step that feeds results back
//! into the scheduler.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Item, Question};
use crate::error::{EngineError, Result};
use crate::srs;

/// A quiz in progress: composed questions plus answers recorded so far
#[derive(Debug, Clone)]
pub struct QuizSession {
  questions: Vec<Question>,
  selected: Vec<usize>,
}

impl QuizSession {
  pub fn new(questions: Vec<Question>) -> Self {
    QuizSession {
      questions,
      selected: Vec::new(),
    }
  }

  pub fn total(&self) -> usize {
    self.questions.len()
  }

  pub fn answered(&self) -> usize {
    self.selected.len()
  }

  pub fn is_complete(&self) -> bool {
    self.selected.len() == self.questions.len()
  }

  pub fn questions(&self) -> &[Question] {
    &self.questions
  }

  /// The next unanswered question, None once the session is complete
  pub fn current(&self) -> Option<&Question> {
    self.questions.get(self.selected.len())
  }

  /// Record the pick for the current question and report whether it was
  /// correct, for immediate feedback. None once the session is complete;
  /// extra answers are refused, not an error.
  pub fn record_answer(&mut self, option_index: usize) -> Option<bool> {
    let question = self.questions.get(self.selected.len())?;
    let was_correct = question.is_correct(option_index);
    self.selected.push(option_index);
    Some(was_correct)
  }

  /// Running tallies, computable mid-session for progress display
  pub fn summary(&self) -> SessionSummary {
    let correct = self
      .questions
      .iter()
      .zip(self.selected.iter().copied())
      .filter(|(question, choice)| question.is_correct(*choice))
      .count();

    SessionSummary {
      total: self.questions.len(),
      answered: self.selected.len(),
      correct,
    }
  }

  /// Close out a complete session: grade every answer through the scheduler
  /// and return the updated item states for persistence.
  pub fn finish(&self, now: DateTime<Utc>) -> Result<Vec<Item>> {
    if !self.is_complete() {
      return Err(EngineError::SessionIncomplete {
        remaining: self.questions.len() - self.selected.len(),
      });
    }

    srs::apply_session(&self.questions, &self.selected, now)
  }
}

/// Session tallies for the progress and results screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
  pub total: usize,
  pub answered: usize,
  pub correct: usize,
}

impl SessionSummary {
  /// Fraction of answered questions that were correct, 0.0 before any answer
  pub fn accuracy(&self) -> f64 {
    if self.answered == 0 {
      0.0
    } else {
      self.correct as f64 / self.answered as f64
    }
  }
}
