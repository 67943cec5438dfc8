//! Streak-based review scheduling.
//!
//! A correct answer advances the item one step along a graduated interval
//! curve; a miss resets the streak entirely and schedules a short retry.
//! The transition is a pure function over the review fields, so every
//! scheduling rule is checkable without touching an item store.

use chrono::{DateTime, Duration, Utc};

use crate::config;
use crate::domain::{Item, Question};
use crate::error::{EngineError, Result};

/// How a single review went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
  Correct,
  Incorrect,
}

impl ReviewOutcome {
  pub fn from_correct(was_correct: bool) -> Self {
    if was_correct {
      ReviewOutcome::Correct
    } else {
      ReviewOutcome::Incorrect
    }
  }
}

/// The scheduling fields of an item, separated from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewState {
  pub streak: u32,
  pub difficulty_score: u32,
  pub next_review: Option<DateTime<Utc>>,
  pub is_mastered: bool,
}

impl ReviewState {
  pub fn of(item: &Item) -> Self {
    ReviewState {
      streak: item.streak,
      difficulty_score: item.difficulty_score,
      next_review: item.next_review,
      is_mastered: item.is_mastered,
    }
  }
}

/// Advance a review state by one outcome.
///
/// Correct: streak grows, the next review lands `REVIEW_INTERVALS_DAYS[streak - 1]`
/// days out (capped at the table end), and the item is mastered once the
/// streak reaches `MASTERY_STREAK`. Incorrect: streak and mastery reset, the
/// difficulty score takes the miss penalty, and the item comes back in
/// `MISS_RETRY_HOURS`.
pub fn transition(state: ReviewState, outcome: ReviewOutcome, now: DateTime<Utc>) -> ReviewState {
  match outcome {
    ReviewOutcome::Correct => {
      let streak = state.streak + 1;
      let index = ((streak - 1) as usize).min(config::REVIEW_INTERVALS_DAYS.len() - 1);
      ReviewState {
        streak,
        difficulty_score: state.difficulty_score,
        next_review: Some(now + Duration::days(config::REVIEW_INTERVALS_DAYS[index])),
        is_mastered: streak >= config::MASTERY_STREAK,
      }
    }
    ReviewOutcome::Incorrect => ReviewState {
      streak: 0,
      difficulty_score: state.difficulty_score + config::MISS_DIFFICULTY_PENALTY,
      next_review: Some(now + Duration::hours(config::MISS_RETRY_HOURS)),
      is_mastered: false,
    },
  }
}

/// Apply one review outcome to an item, returning the updated copy
pub fn apply_result(item: &Item, was_correct: bool, now: DateTime<Utc>) -> Item {
  let next = transition(
    ReviewState::of(item),
    ReviewOutcome::from_correct(was_correct),
    now,
  );

  let mut updated = item.clone();
  updated.streak = next.streak;
  updated.difficulty_score = next.difficulty_score;
  updated.next_review = next.next_review;
  updated.is_mastered = next.is_mastered;
  updated
}

/// Grade a finished session and return updated items, one per distinct item.
///
/// Correctness at position `i` is `selected[i] == questions[i].correct_index`.
/// If the same item appears in several questions the outcomes apply in session
/// order, accumulating. Answer and question counts must match; a mismatch is a
/// caller bug and fails fast instead of silently truncating review state.
pub fn apply_session(
  questions: &[Question],
  selected: &[usize],
  now: DateTime<Utc>,
) -> Result<Vec<Item>> {
  if questions.len() != selected.len() {
    return Err(EngineError::AnswerCountMismatch {
      questions: questions.len(),
      answers: selected.len(),
    });
  }

  let mut updated: Vec<Item> = Vec::with_capacity(questions.len());
  for (question, &choice) in questions.iter().zip(selected) {
    let was_correct = question.is_correct(choice);
    match updated.iter_mut().find(|it| it.id == question.item.id) {
      Some(existing) => {
        let next = apply_result(existing, was_correct, now);
        *existing = next;
      }
      None => updated.push(apply_result(&question.item, was_correct, now)),
    }
  }

  tracing::debug!(items = updated.len(), "Applied session review results");
  Ok(updated)
}

/// Items currently due for review: scheduled, past due, and not yet mastered
pub fn due_pool(items: &[Item], now: DateTime<Utc>) -> Vec<&Item> {
  items.iter().filter(|item| item.is_due(now)).collect()
}
