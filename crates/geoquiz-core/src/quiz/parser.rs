//! Line scanner turning generated quiz text into questions.
//!
//! ## Grammar
//!
//! ```text
//! block  := prompt option(a) option(b) option(c) option(d) answer
//! prompt := DIGIT+ "." TEXT
//! option := LABEL ")" TEXT
//! answer := "Answer:" TEXT
//! ```
//!
//! Lines are trimmed before matching and blank lines inside a block are
//! skipped. `TEXT` must be non-empty after trimming. A line that breaks the
//! expected order discards the pending block; if that line is a prompt it
//! opens the next block. Everything outside complete blocks is ignored.

use super::types::{OptionLabel, QuizOptions, QuizQuestion};

const ANSWER_PREFIX: &str = "Answer:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineShape<'a> {
    /// Whole trimmed line, number included.
    Prompt(&'a str),
    Option(OptionLabel, &'a str),
    Answer(&'a str),
    Other,
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn classify(line: &str) -> LineShape<'_> {
    if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
        return non_empty(rest).map_or(LineShape::Other, LineShape::Answer);
    }

    for label in OptionLabel::ALL {
        if let Some(rest) = line.strip_prefix(label.prefix()) {
            return non_empty(rest).map_or(LineShape::Other, |text| LineShape::Option(label, text));
        }
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            if non_empty(rest).is_some() {
                return LineShape::Prompt(line);
            }
        }
    }

    LineShape::Other
}

/// A block whose prompt and some leading options have been seen.
struct Pending<'a> {
    question: &'a str,
    options: Vec<&'a str>,
}

impl<'a> Pending<'a> {
    fn new(question: &'a str) -> Self {
        Self {
            question,
            options: Vec::with_capacity(OptionLabel::ALL.len()),
        }
    }

    fn expects(&self, label: OptionLabel) -> bool {
        OptionLabel::ALL.get(self.options.len()) == Some(&label)
    }

    /// `None` unless all four options were seen.
    fn finish(self, answer: &str) -> Option<QuizQuestion> {
        let &[a, b, c, d] = self.options.as_slice() else {
            return None;
        };
        Some(QuizQuestion {
            question: self.question.to_string(),
            options: QuizOptions {
                a: a.to_string(),
                b: b.to_string(),
                c: c.to_string(),
                d: d.to_string(),
            },
            answer: answer.to_string(),
        })
    }
}

/// Extract every complete question block from `text`, in order.
///
/// Never fails: text without a complete block yields an empty vector.
pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut pending: Option<Pending<'_>> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        pending = match (pending.take(), classify(line)) {
            (Some(mut block), LineShape::Option(label, option)) if block.expects(label) => {
                block.options.push(option);
                Some(block)
            }
            (Some(block), LineShape::Answer(answer)) => {
                questions.extend(block.finish(answer));
                None
            }
            (_, LineShape::Prompt(question)) => Some(Pending::new(question)),
            _ => None,
        };
    }

    questions
}
