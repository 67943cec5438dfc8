//! Quiz composition: pick a random subset of the pool, resolve each item's
//! question type, and build prompts and options.
//!
//! Entry points are generic over the random source so callers can pass a
//! seeded generator; `compose` wraps the thread-local one. Degenerate input
//! (empty pool, short pool, ineligible items) shrinks the output instead of
//! failing, so the caller never has to handle a composition error.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Item, Question, QuestionType, QuizConfig, QuizMode};
use crate::quiz::options;

/// Compose a quiz from the pool using the thread-local random source
pub fn compose(pool: &[Item], config: &QuizConfig) -> Vec<Question> {
  compose_with(pool, config, &mut rand::rng())
}

/// Compose a quiz from the pool using the given random source.
///
/// Selects `min(config.count, pool.len())` distinct items uniformly at
/// random, in random order, and builds one question per selected item.
pub fn compose_with<R: Rng + ?Sized>(
  pool: &[Item],
  config: &QuizConfig,
  rng: &mut R,
) -> Vec<Question> {
  if pool.is_empty() {
    tracing::debug!("Quiz requested from an empty pool");
    return Vec::new();
  }

  let mut selected: Vec<&Item> = pool.iter().collect();
  selected.shuffle(rng);
  selected.truncate(config.count.min(pool.len()));

  let questions: Vec<Question> = selected
    .into_iter()
    .map(|item| build_question(item, pool, config.question_type, rng))
    .collect();

  tracing::debug!(
    pool = pool.len(),
    questions = questions.len(),
    mode = config.question_type.as_str(),
    "Composed quiz"
  );

  questions
}

/// Resolve the question type for one item under the requested mode
fn resolve_type<R: Rng + ?Sized>(item: &Item, mode: QuizMode, rng: &mut R) -> QuestionType {
  match mode.fixed_type() {
    // No usable sentence, fall back to the plain direction
    Some(QuestionType::SentenceFillIn) if !item.sentence_eligible() => QuestionType::WordToMeaning,
    Some(fixed) => fixed,
    None => {
      let mut eligible = vec![QuestionType::WordToMeaning, QuestionType::MeaningToWord];
      if item.sentence_eligible() {
        eligible.push(QuestionType::SentenceFillIn);
      }
      eligible
        .choose(rng)
        .copied()
        .unwrap_or(QuestionType::WordToMeaning)
    }
  }
}

fn build_question<R: Rng + ?Sized>(
  item: &Item,
  pool: &[Item],
  mode: QuizMode,
  rng: &mut R,
) -> Question {
  let question_type = resolve_type(item, mode, rng);

  let prompt = match question_type {
    QuestionType::WordToMeaning => item.term.clone(),
    QuestionType::MeaningToWord => item.meaning.clone(),
    QuestionType::SentenceFillIn => {
      // resolve_type only picks this when a usable sentence exists
      options::mask_term(item.example_sentence.as_deref().unwrap_or(""), &item.term)
    }
  };

  let (options, correct_index) = options::build_options(item, pool, question_type, rng);

  Question {
    item: item.clone(),
    question_type,
    prompt,
    options,
    correct_index,
  }
}
