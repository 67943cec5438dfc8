//! Multiple-choice option assembly: distractor sampling, answer placement,
//! and term masking for fill-in prompts.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config;
use crate::domain::{Item, QuestionType};

/// The answer field a question type asks for
pub(crate) fn answer_text(item: &Item, question_type: QuestionType) -> String {
  match question_type {
    QuestionType::WordToMeaning => item.meaning.clone(),
    QuestionType::MeaningToWord | QuestionType::SentenceFillIn => item.term.clone(),
  }
}

/// Build the shuffled option list for one question.
///
/// Distractors are drawn uniformly without replacement from the pool minus
/// the current item. A pool too small for a full distractor set yields fewer
/// options rather than an error. If another item's answer text collides with
/// the correct one, `correct_index` points at the first matching position so
/// grading stays deterministic.
pub(crate) fn build_options<R: Rng + ?Sized>(
  item: &Item,
  pool: &[Item],
  question_type: QuestionType,
  rng: &mut R,
) -> (Vec<String>, usize) {
  let correct = answer_text(item, question_type);

  let mut others: Vec<&Item> = pool.iter().filter(|other| other.id != item.id).collect();
  if others.len() < config::DISTRACTOR_COUNT {
    tracing::warn!(
      item_id = %item.id,
      available = others.len(),
      "Not enough items for a full distractor set"
    );
  }
  others.shuffle(rng);
  others.truncate(config::DISTRACTOR_COUNT);

  let mut options = vec![correct.clone()];
  options.extend(
    others
      .into_iter()
      .map(|other| answer_text(other, question_type)),
  );
  options.shuffle(rng);

  let correct_index = options
    .iter()
    .position(|option| *option == correct)
    .unwrap_or(0);

  (options, correct_index)
}

/// Replace every case-insensitive occurrence of `term` in `sentence` with the
/// blank marker. Matches do not overlap; comparison lowercases one character
/// at a time so the text outside the matches is preserved exactly.
pub(crate) fn mask_term(sentence: &str, term: &str) -> String {
  if term.is_empty() {
    return sentence.to_string();
  }

  let lower_first = |c: char| c.to_lowercase().next().unwrap_or(c);
  let source: Vec<char> = sentence.chars().collect();
  let haystack: Vec<char> = source.iter().map(|&c| lower_first(c)).collect();
  let needle: Vec<char> = term.chars().map(lower_first).collect();

  let mut masked = String::with_capacity(sentence.len());
  let mut i = 0;
  while i < source.len() {
    if i + needle.len() <= haystack.len() && haystack[i..i + needle.len()] == needle[..] {
      masked.push_str(config::BLANK_MARKER);
      i += needle.len();
    } else {
      masked.push(source[i]);
      i += 1;
    }
  }

  masked
}
