//! Integration tests for quiz text extraction on realistic model output.

use geoquiz_core::{parse_quiz, OptionLabel};

/// Shaped like a typical chat-completion answer: preamble, indented options,
/// a markdown-formatted block the parser must skip, and a trailer.
const MODEL_OUTPUT: &str = r#"Sure! Here's a 5-question multiple-choice quiz about the Golden Gate Bridge:

1. In which year did the Golden Gate Bridge open?
    a) 1927
    b) 1937
    c) 1947
    d) 1957
Answer: b) 1937

2. What is the official color of the bridge called?
    a) International Orange
    b) Golden Yellow
    c) Crimson Red
    d) Sunset Copper
Answer: International Orange

**3. Which body of water does the bridge span?**
    a) San Pablo Bay
    b) The Golden Gate strait
    c) Monterey Bay
    d) Half Moon Bay
**Answer:** The Golden Gate strait

4. Who was the chief engineer?
    a) Joseph Strauss
    b) John Roebling
    c) Gustave Eiffel
    d) Othmar Ammann
Answer: Joseph Strauss

5. How long is the main span, approximately?
    a) 1,280 meters
    b) 2,000 meters
    c) 850 meters

Answer: 1,280 meters

I hope you enjoy the quiz!
"#;

#[test]
fn test_realistic_output_keeps_only_well_formed_blocks() {
    let questions = parse_quiz(MODEL_OUTPUT);

    let prompts: Vec<_> = questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(
        prompts,
        vec![
            "1. In which year did the Golden Gate Bridge open?",
            "2. What is the official color of the bridge called?",
            "4. Who was the chief engineer?",
        ]
    );

    assert_eq!(questions[0].answer, "b) 1937");
    assert_eq!(questions[1].options.get(OptionLabel::A), "International Orange");
    assert_eq!(questions[2].options.d, "Othmar Ammann");
}

#[test]
fn test_questions_serialize_to_wire_shape() {
    let questions = parse_quiz(
        "1. What color is the sky?\na) Red\nb) Blue\nc) Green\nd) Yellow\nAnswer: Blue",
    );
    let json = serde_json::to_value(&questions).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "question": "1. What color is the sky?",
            "options": { "a": "Red", "b": "Blue", "c": "Green", "d": "Yellow" },
            "answer": "Blue"
        }])
    );
}
