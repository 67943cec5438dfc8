use serde::{Deserialize, Serialize};

use crate::config;
use crate::domain::Item;

/// The concrete shape of a single quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
  /// Prompt with the term, answer with the meaning.
  WordToMeaning,
  /// Prompt with the meaning, answer with the term.
  MeaningToWord,
  /// Prompt with the example sentence, term blanked out; answer with the term.
  SentenceFillIn,
}

impl QuestionType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::WordToMeaning => "word_to_meaning",
      Self::MeaningToWord => "meaning_to_word",
      Self::SentenceFillIn => "sentence_fill_in",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "word_to_meaning" => Some(Self::WordToMeaning),
      "meaning_to_word" => Some(Self::MeaningToWord),
      "sentence_fill_in" => Some(Self::SentenceFillIn),
      _ => None,
    }
  }
}

/// What the caller asks for: a single question type for the whole session,
/// or a per-item mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
  WordToMeaning,
  MeaningToWord,
  SentenceFillIn,
  #[default]
  Mixed,
}

impl QuizMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::WordToMeaning => "word_to_meaning",
      Self::MeaningToWord => "meaning_to_word",
      Self::SentenceFillIn => "sentence_fill_in",
      Self::Mixed => "mixed",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "word_to_meaning" => Some(Self::WordToMeaning),
      "meaning_to_word" => Some(Self::MeaningToWord),
      "sentence_fill_in" => Some(Self::SentenceFillIn),
      "mixed" => Some(Self::Mixed),
      _ => None,
    }
  }

  /// The concrete type this mode pins down, or None for `Mixed`.
  pub fn fixed_type(&self) -> Option<QuestionType> {
    match self {
      Self::WordToMeaning => Some(QuestionType::WordToMeaning),
      Self::MeaningToWord => Some(QuestionType::MeaningToWord),
      Self::SentenceFillIn => Some(QuestionType::SentenceFillIn),
      Self::Mixed => None,
    }
  }
}

/// Session configuration supplied by the caller.
///
/// `sound_enabled` has no effect on composition; it rides along because
/// callers hand the same configuration object to the playback layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
  pub question_type: QuizMode,
  pub count: usize,
  pub sound_enabled: bool,
}

impl Default for QuizConfig {
  fn default() -> Self {
    Self {
      question_type: QuizMode::Mixed,
      count: config::DEFAULT_QUESTION_COUNT,
      sound_enabled: true,
    }
  }
}

/// One composed quiz question. Ephemeral: built for a single session and
/// graded against `correct_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  /// Snapshot of the source item at composition time.
  pub item: Item,
  pub question_type: QuestionType,
  pub prompt: String,
  /// One entry equals the correct value; the rest are distractors.
  pub options: Vec<String>,
  /// Position of the correct value within `options` after shuffling.
  pub correct_index: usize,
}

impl Question {
  pub fn is_correct(&self, selected_index: usize) -> bool {
    selected_index == self.correct_index
  }

  /// The option text being graded as correct.
  pub fn correct_text(&self) -> &str {
    self
      .options
      .get(self.correct_index)
      .map(String::as_str)
      .unwrap_or("")
  }
}
