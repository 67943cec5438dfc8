pub mod item;
pub mod question;

pub use item::Item;
pub use question::{Question, QuestionType, QuizConfig, QuizMode};
