//! Quiz generation through a chat-completion endpoint.
//!
//! One request per call. Failures are returned to the caller as is; there is
//! no retry.

use std::time::Duration;

use indoc::formatdoc;
use reqwest::Client;
use tracing::{debug, warn};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::quiz::{parse_quiz, GeneratedQuiz};

const SYSTEM_PROMPT: &str = "You are a quiz generator. Create a precise multiple-choice quiz.";

/// Client for the text-generation service.
pub struct QuizGenerator {
    client: Client,
    config: GenerationConfig,
    api_key: String,
}

impl QuizGenerator {
    /// Build a generator with an explicit bearer token.
    pub fn new(config: GenerationConfig, api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Build a generator reading the token from `config.api_key_env`.
    pub fn from_env(config: GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Request body asking for a quiz about `keyword`.
    pub fn build_request(&self, keyword: &str) -> ChatCompletionRequest {
        let prompt = formatdoc! {"
            Generate a {count}-question multiple-choice quiz about {keyword}.
            Format EXACTLY like this:
            1. What is [question]?
            a) [Option A]
            b) [Option B]
            c) [Option C]
            d) [Option D]
            Answer: [Correct Answer]",
            count = self.config.question_count,
        };

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Raw generated text for `keyword`.
    pub async fn complete(&self, keyword: &str) -> Result<String, GenerationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(GenerationError::EmptyKeyword);
        }

        let request = self.build_request(keyword);
        debug!(model = %request.model, keyword, "requesting quiz");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generation service rejected request");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .into_first_content()
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }

    /// Generate and parse a quiz for `keyword`.
    pub async fn generate(&self, keyword: &str) -> Result<GeneratedQuiz, GenerationError> {
        let raw_text = self.complete(keyword).await?;
        let questions = parse_quiz(&raw_text);
        debug!(questions = questions.len(), "parsed generated quiz");
        Ok(GeneratedQuiz {
            questions,
            raw_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> QuizGenerator {
        QuizGenerator::new(GenerationConfig::default(), "test-key").unwrap()
    }

    #[test]
    fn test_request_carries_config_and_keyword() {
        let request = generator().build_request("the Eiffel Tower");

        assert_eq!(request.model, "llama-3.1-sonar-small-128k-online");
        assert_eq!(request.max_tokens, 500);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(request.messages[1].role, "user");

        let prompt = &request.messages[1].content;
        assert!(prompt.starts_with("Generate a 5-question multiple-choice quiz about the Eiffel Tower."));
        assert!(prompt.contains("\na) [Option A]\n"));
        assert!(prompt.ends_with("Answer: [Correct Answer]"));
    }

    #[test]
    fn test_prompt_format_example_is_itself_parseable() {
        let request = generator().build_request("anything");
        let questions = parse_quiz(&request.messages[1].content);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.d, "[Option D]");
    }

    #[test]
    fn test_question_count_is_configurable() {
        let config = GenerationConfig {
            question_count: 3,
            ..GenerationConfig::default()
        };
        let generator = QuizGenerator::new(config, "k").unwrap();
        assert_eq!(generator.config().question_count, 3);
        let request = generator.build_request("Rome");
        assert!(request.messages[1].content.contains("3-question"));
    }

    #[test]
    fn test_from_env_requires_key() {
        let config = GenerationConfig {
            api_key_env: "GEOQUIZ_TEST_KEY_THAT_IS_NEVER_SET".into(),
            ..GenerationConfig::default()
        };
        let err = QuizGenerator::from_env(config).err().unwrap();
        assert!(matches!(err, GenerationError::MissingApiKey { ref var } if var == "GEOQUIZ_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    #[tokio::test]
    async fn test_empty_keyword_is_rejected_before_any_request() {
        let err = generator().complete("   ").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyKeyword));
    }
}
