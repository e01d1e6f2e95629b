//! Quiz text extraction.

mod parser;
mod types;

pub use parser::parse_quiz;
pub use types::{GeneratedQuiz, OptionLabel, QuizOptions, QuizQuestion};
