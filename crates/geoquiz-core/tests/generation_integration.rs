//! Integration tests for the generation client against a mock endpoint.

use geoquiz_core::{GenerationConfig, GenerationError, QuizGenerator};
use mockito::Matcher;
use serde_json::json;

const QUIZ_TEXT: &str = "Here is your quiz:\n\n1. What color is the sky?\n    a) Red\n    b) Blue\n    c) Green\n    d) Yellow\nAnswer: Blue\n\n2. How many legs does a spider have?\n    a) Six\n    b) Eight\n    c) Ten\n    d) Four\n";

fn config_for(server: &mockito::Server) -> GenerationConfig {
    GenerationConfig {
        endpoint: format!("{}/chat/completions", server.url()),
        ..GenerationConfig::default()
    }
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "cmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_sends_request_and_parses_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer secret-token")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.1-sonar-small-128k-online",
            "max_tokens": 500
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(QUIZ_TEXT))
        .create_async()
        .await;

    let generator = QuizGenerator::new(config_for(&server), "secret-token").unwrap();
    let quiz = generator.generate("the sky").await.unwrap();

    mock.assert_async().await;
    assert_eq!(quiz.raw_text, QUIZ_TEXT);
    // The second block has no answer line.
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].answer, "Blue");
    assert_eq!(quiz.questions[0].options.b, "Blue");
}

#[tokio::test]
async fn test_prompt_mentions_keyword() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("quiz about Kyoto".into()))
        .with_status(200)
        .with_body(completion_body("no quiz today"))
        .create_async()
        .await;

    let generator = QuizGenerator::new(config_for(&server), "k").unwrap();
    let quiz = generator.generate("  Kyoto ").await.unwrap();

    mock.assert_async().await;
    assert!(quiz.questions.is_empty());
    assert_eq!(quiz.raw_text, "no quiz today");
}

#[tokio::test]
async fn test_http_failure_is_reported_with_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;

    let generator = QuizGenerator::new(config_for(&server), "bad").unwrap();
    let err = generator.generate("Paris").await.unwrap_err();

    match err {
        GenerationError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_missing_choices_is_empty_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let generator = QuizGenerator::new(config_for(&server), "k").unwrap();
    let err = generator.complete("Paris").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let generator = QuizGenerator::new(config_for(&server), "k").unwrap();
    let err = generator.complete("Paris").await.unwrap_err();
    assert!(matches!(err, GenerationError::Request(_)));
}
