use serde::{Deserialize, Serialize};

/// Label of one of the four answer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in the order they appear in a question block.
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    /// Line prefix introducing this option, e.g. `"a)"`.
    pub fn prefix(self) -> &'static str {
        match self {
            OptionLabel::A => "a)",
            OptionLabel::B => "b)",
            OptionLabel::C => "c)",
            OptionLabel::D => "d)",
        }
    }
}

/// The four answer choices of a question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizOptions {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl QuizOptions {
    pub fn get(&self, label: OptionLabel) -> &str {
        match label {
            OptionLabel::A => &self.a,
            OptionLabel::B => &self.b,
            OptionLabel::C => &self.c,
            OptionLabel::D => &self.d,
        }
    }

    /// Iterate `(label, text)` pairs in a..d order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

/// One multiple-choice question extracted from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The numbered prompt line, e.g. `"1. What color is the sky?"`.
    pub question: String,
    pub options: QuizOptions,
    pub answer: String,
}

/// Parsed questions together with the text they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    pub questions: Vec<QuizQuestion>,
    pub raw_text: String,
}
