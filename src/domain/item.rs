use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;

/// A single vocabulary entry tracked by the review engine.
///
/// Items are created externally (import or the starter seed) and mutated
/// only by the scheduler in response to answer events. The engine never
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id: String,
  pub term: String,
  pub meaning: String,
  /// May be filled in later by the enrichment service; the composer treats
  /// an absent or too-short sentence as ineligible for fill-in questions.
  pub example_sentence: Option<String>,
  /// Consecutive correct answers since the last miss (or since creation).
  pub streak: u32,
  /// Incremented on every miss, never decremented by the engine.
  pub difficulty_score: u32,
  /// None until the item has been answered at least once.
  pub next_review: Option<DateTime<Utc>>,
  pub is_mastered: bool,
}

impl Item {
  pub fn new(id: impl Into<String>, term: impl Into<String>, meaning: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      term: term.into(),
      meaning: meaning.into(),
      example_sentence: None,
      streak: 0,
      difficulty_score: 0,
      next_review: None,
      is_mastered: false,
    }
  }

  /// Attach an example sentence (builder form, used by imports and the seed).
  pub fn with_example(mut self, sentence: impl Into<String>) -> Self {
    self.example_sentence = Some(sentence.into());
    self
  }

  /// True if this item can carry a sentence fill-in question: the example
  /// sentence exists and has at least `MIN_SENTENCE_CHARS` characters.
  pub fn sentence_eligible(&self) -> bool {
    self
      .example_sentence
      .as_deref()
      .is_some_and(|s| s.chars().count() >= config::MIN_SENTENCE_CHARS)
  }

  /// True if this item belongs to the due pool at `now`: a review date is
  /// set, it has passed, and the item is not yet mastered.
  pub fn is_due(&self, now: DateTime<Utc>) -> bool {
    !self.is_mastered && self.next_review.is_some_and(|due| due <= now)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  #[test]
  fn test_item_new_defaults() {
    let item = Item::new("w1", "apply", "適用する");

    assert_eq!(item.id, "w1");
    assert_eq!(item.term, "apply");
    assert_eq!(item.meaning, "適用する");
    assert!(item.example_sentence.is_none());
    assert_eq!(item.streak, 0);
    assert_eq!(item.difficulty_score, 0);
    assert!(item.next_review.is_none());
    assert!(!item.is_mastered);
  }

  #[test]
  fn test_with_example() {
    let item = Item::new("w1", "apply", "適用する").with_example("Please apply the rule.");
    assert_eq!(
      item.example_sentence.as_deref(),
      Some("Please apply the rule.")
    );
  }

  #[test]
  fn test_sentence_eligible_no_sentence() {
    let item = Item::new("w1", "apply", "適用する");
    assert!(!item.sentence_eligible());
  }

  #[test]
  fn test_sentence_eligible_too_short() {
    // Below the 5-character minimum
    let item = Item::new("w1", "ask", "尋ねる").with_example("ask?");
    assert!(!item.sentence_eligible());
  }

  #[test]
  fn test_sentence_eligible_exactly_minimum() {
    let item = Item::new("w1", "ask", "尋ねる").with_example("I ask");
    assert!(item.sentence_eligible());
  }

  #[test]
  fn test_sentence_eligible_counts_chars_not_bytes() {
    // Five CJK characters is 15 bytes but still eligible
    let item = Item::new("w1", "apply", "適用する").with_example("適用する例");
    assert!(item.sentence_eligible());
  }

  #[test]
  fn test_is_due_unscheduled() {
    let item = Item::new("w1", "apply", "適用する");
    assert!(!item.is_due(Utc::now()));
  }

  #[test]
  fn test_is_due_past_date() {
    let now = Utc::now();
    let mut item = Item::new("w1", "apply", "適用する");
    item.next_review = Some(now - Duration::hours(1));
    assert!(item.is_due(now));
  }

  #[test]
  fn test_is_due_future_date() {
    let now = Utc::now();
    let mut item = Item::new("w1", "apply", "適用する");
    item.next_review = Some(now + Duration::hours(1));
    assert!(!item.is_due(now));
  }

  #[test]
  fn test_is_due_mastered_excluded() {
    let now = Utc::now();
    let mut item = Item::new("w1", "apply", "適用する");
    item.next_review = Some(now - Duration::hours(1));
    item.is_mastered = true;
    assert!(!item.is_due(now));
  }

  #[test]
  fn test_item_serde_roundtrip() {
    let item = Item::new("w1", "apply", "適用する").with_example("Please apply the rule.");
    let json = serde_json::to_string(&item).unwrap();
    let back: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
  }
}
