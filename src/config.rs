//! Engine configuration constants and quiz defaults loading.
//!
//! The scheduling curve and composition counts live here so the numbers are
//! in one place instead of scattered through the engine.

use serde::Deserialize;
use std::path::Path;

use crate::domain::{QuizConfig, QuizMode};

// ==================== Scheduling Configuration ====================

/// Consecutive correct answers required before an item counts as mastered
pub const MASTERY_STREAK: u32 = 5;

/// Graduated review intervals in days, indexed by `streak - 1`.
/// Streaks past the table end stay on the last interval.
pub const REVIEW_INTERVALS_DAYS: [i64; 5] = [1, 3, 7, 14, 30];

/// Retry delay after a miss, in hours
pub const MISS_RETRY_HOURS: i64 = 1;

/// Added to an item's difficulty score on every miss
pub const MISS_DIFFICULTY_PENALTY: u32 = 10;

// ==================== Quiz Configuration ====================

/// Number of distractor choices in multiple choice questions
pub const DISTRACTOR_COUNT: usize = 3;

/// Total options per question (correct answer + distractors)
pub const OPTION_COUNT: usize = DISTRACTOR_COUNT + 1;

/// Minimum example-sentence length (in characters) for fill-in eligibility
pub const MIN_SENTENCE_CHARS: usize = 5;

/// Placeholder substituted for the term in fill-in prompts
pub const BLANK_MARKER: &str = "____";

/// Question count used when the caller does not specify one
pub const DEFAULT_QUESTION_COUNT: usize = 10;

// ==================== Quiz Defaults Loading ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    quiz: Option<QuizFileConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct QuizFileConfig {
    question_type: Option<String>,
    count: Option<usize>,
    sound_enabled: Option<bool>,
}

/// Load quiz defaults with priority: config.toml > environment > built-in.
///
/// Callers that build their own `QuizConfig` never need this; it exists for
/// hosts that want the session shape configured from the outside.
pub fn load_quiz_defaults() -> QuizConfig {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let mut defaults = QuizConfig::default();
    apply_env_config(&mut defaults);

    if let Some(file) = read_config_file(Path::new("config.toml")) {
        tracing::info!("Using quiz defaults from config.toml");
        apply_file_config(&mut defaults, file);
    }

    defaults
}

/// Overlay QUIZ_* environment variables onto the defaults
fn apply_env_config(defaults: &mut QuizConfig) {
    if let Ok(raw) = std::env::var("QUIZ_QUESTION_COUNT") {
        match raw.parse::<usize>() {
            Ok(count) if count > 0 => {
                tracing::info!("Using question count from QUIZ_QUESTION_COUNT env: {}", count);
                defaults.count = count;
            }
            _ => tracing::warn!("Ignoring invalid QUIZ_QUESTION_COUNT: {}", raw),
        }
    }

    if let Ok(raw) = std::env::var("QUIZ_QUESTION_TYPE") {
        match QuizMode::from_str(&raw) {
            Some(mode) => {
                tracing::info!("Using question type from QUIZ_QUESTION_TYPE env: {}", raw);
                defaults.question_type = mode;
            }
            None => tracing::warn!("Ignoring unknown QUIZ_QUESTION_TYPE: {}", raw),
        }
    }

    if let Ok(raw) = std::env::var("QUIZ_SOUND_ENABLED") {
        match raw.parse::<bool>() {
            Ok(enabled) => defaults.sound_enabled = enabled,
            Err(_) => tracing::warn!("Ignoring invalid QUIZ_SOUND_ENABLED: {}", raw),
        }
    }
}

/// Read and parse the `[quiz]` section of a config file, if present
fn read_config_file(path: &Path) -> Option<QuizFileConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&contents) {
        Ok(config) => config.quiz,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Overlay file values onto the defaults, skipping invalid entries
fn apply_file_config(defaults: &mut QuizConfig, file: QuizFileConfig) {
    if let Some(count) = file.count {
        if count > 0 {
            defaults.count = count;
        } else {
            tracing::warn!("Ignoring quiz.count = 0 in config file");
        }
    }

    if let Some(raw) = file.question_type {
        match QuizMode::from_str(&raw) {
            Some(mode) => defaults.question_type = mode,
            None => tracing::warn!("Ignoring unknown quiz.question_type: {}", raw),
        }
    }

    if let Some(enabled) = file.sound_enabled {
        defaults.sound_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_interval_table_shape() {
        assert_eq!(REVIEW_INTERVALS_DAYS.len(), MASTERY_STREAK as usize);
        assert_eq!(REVIEW_INTERVALS_DAYS, [1, 3, 7, 14, 30]);
        assert_eq!(OPTION_COUNT, DISTRACTOR_COUNT + 1);
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_config_file(&dir.path().join("config.toml")).is_none());
    }

    #[test]
    fn test_read_config_file_invalid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "quiz = not valid");
        assert!(read_config_file(&path).is_none());
    }

    #[test]
    fn test_read_config_file_without_quiz_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[other]\nkey = 1\n");
        assert!(read_config_file(&path).is_none());
    }

    #[test]
    fn test_apply_file_config_full() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[quiz]
question_type = "meaning_to_word"
count = 6
sound_enabled = false
"#,
        );

        let mut defaults = QuizConfig::default();
        apply_file_config(&mut defaults, read_config_file(&path).unwrap());

        assert_eq!(defaults.question_type, QuizMode::MeaningToWord);
        assert_eq!(defaults.count, 6);
        assert!(!defaults.sound_enabled);
    }

    #[test]
    fn test_apply_file_config_partial_keeps_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[quiz]\ncount = 3\n");

        let mut defaults = QuizConfig::default();
        apply_file_config(&mut defaults, read_config_file(&path).unwrap());

        assert_eq!(defaults.count, 3);
        assert_eq!(defaults.question_type, QuizMode::Mixed);
        assert!(defaults.sound_enabled);
    }

    #[test]
    fn test_apply_file_config_rejects_zero_count() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[quiz]\ncount = 0\n");

        let mut defaults = QuizConfig::default();
        apply_file_config(&mut defaults, read_config_file(&path).unwrap());

        assert_eq!(defaults.count, DEFAULT_QUESTION_COUNT);
    }

    #[test]
    fn test_apply_file_config_rejects_unknown_mode() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[quiz]\nquestion_type = \"listening\"\n");

        let mut defaults = QuizConfig::default();
        apply_file_config(&mut defaults, read_config_file(&path).unwrap());

        assert_eq!(defaults.question_type, QuizMode::Mixed);
    }
}
